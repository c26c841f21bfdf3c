//! Postgres-backed collection: one row per place, the document in a JSONB
//! column keyed by a UUID the database assigns.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::id::PlaceId;
use crate::domain::place::{PlaceDocument, PlaceUpdate};
use crate::storage::collection::PlaceCollection;

/// Place collection stored in a Postgres table. Partial updates use
/// top-level JSONB concatenation, which writes exactly the fields the
/// serialized patch carries and nothing else.
pub struct PgCollection {
    pool: PgPool,
    table: String,
}

impl PgCollection {
    /// Connects with a fresh pool and ensures the backing table exists.
    pub async fn connect(database_url: &str, table: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::with_pool(pool, table).await
    }

    /// Builds the collection over an existing pool, creating the table on
    /// first use. The table name is interpolated into SQL, so it must be a
    /// plain identifier.
    pub async fn with_pool(pool: PgPool, table: &str) -> Result<Self> {
        anyhow::ensure!(is_plain_ident(table), "invalid collection name: {table}");
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                doc JSONB NOT NULL
            )"
        ))
        .execute(&pool)
        .await?;
        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn is_plain_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[async_trait]
impl PlaceCollection for PgCollection {
    async fn find_all(&self) -> Result<Vec<(PlaceId, PlaceDocument)>> {
        let rows = sqlx::query(&format!("SELECT id, doc FROM {}", self.table))
            .fetch_all(&self.pool)
            .await?;
        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: Uuid = row.try_get("id")?;
            let doc: JsonValue = row.try_get("doc")?;
            documents.push((PlaceId::from(id), serde_json::from_value(doc)?));
        }
        Ok(documents)
    }

    async fn find_by_id(&self, id: PlaceId) -> Result<Option<PlaceDocument>> {
        let row = sqlx::query(&format!("SELECT doc FROM {} WHERE id = $1", self.table))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                let doc: JsonValue = row.try_get("doc")?;
                Ok(Some(serde_json::from_value(doc)?))
            }
            None => Ok(None),
        }
    }

    async fn insert_one(&self, document: &PlaceDocument) -> Result<PlaceId> {
        let doc = serde_json::to_value(document)?;
        let row = sqlx::query(&format!(
            "INSERT INTO {} (doc) VALUES ($1) RETURNING id",
            self.table
        ))
        .bind(doc)
        .fetch_one(&self.pool)
        .await?;
        let id: Uuid = row.try_get("id")?;
        Ok(PlaceId::from(id))
    }

    async fn update_one_by_id(&self, id: PlaceId, update: &PlaceUpdate) -> Result<u64> {
        let changes = serde_json::to_value(update)?;
        let result = sqlx::query(&format!(
            "UPDATE {} SET doc = doc || $2 WHERE id = $1",
            self.table
        ))
        .bind(id.as_uuid())
        .bind(changes)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_one_by_id(&self, id: PlaceId) -> Result<u64> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", self.table))
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_idents_only() {
        assert!(is_plain_ident("places"));
        assert!(is_plain_ident("_staging_places"));
        assert!(!is_plain_ident("1places"));
        assert!(!is_plain_ident("places; DROP TABLE places"));
        assert!(!is_plain_ident(""));
    }
}
