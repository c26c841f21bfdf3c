//! End-to-end API test: serve the router over the in-memory store on an
//! ephemeral port and drive it through the HTTP surface.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use farm_directory::transport;
use farm_directory::{MemoryCollection, PlaceRepository};
use serde_json::{json, Value as JsonValue};

async fn spawn_server() -> String {
    let repository = PlaceRepository::new(Arc::new(MemoryCollection::new()));
    let app_state = transport::http::AppState { repository };
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

fn timestamp(value: &JsonValue) -> DateTime<Utc> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
        .expect("an RFC 3339 timestamp")
}

#[tokio::test]
async fn health_reports_ok() {
    let base_url = spawn_server().await;
    let resp = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn create_fetch_and_list_a_place() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .json(&json!({
            "name": "Green Acres Farm",
            "address": "123 Rural Route",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
            "coordinates": { "lat": 39.781721, "lng": -89.650148 },
            "category": "Farm",
            "isPublic": true,
            "description": "Family-owned organic farm."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));

    let created = &body["data"];
    let id = created["id"].as_str().expect("a string id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], json!("Green Acres Farm"));
    assert_eq!(created["coordinates"]["lat"], json!(39.781721));
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let resp = reqwest::get(format!("{}/api/places/{}", base_url, id))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(&body["data"], created);

    let resp = reqwest::get(format!("{}/api/places", base_url)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn create_with_missing_required_fields_is_400() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .json(&json!({ "city": "Springfield" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));

    let errors = body["data"]["errors"].as_array().expect("an error list");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], json!("name"));
    assert_eq!(errors[0]["message"], json!("name is required"));
    assert_eq!(errors[1]["field"], json!("address"));
}

#[tokio::test]
async fn malformed_and_unknown_ids_map_to_400_and_404() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = reqwest::get(format!("{}/api/places/not-an-id", base_url))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let missing = uuid_string();
    let resp = reqwest::get(format!("{}/api/places/{}", base_url, missing))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{}/api/places/{}", base_url, missing))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_touches_only_the_supplied_fields() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .json(&json!({ "name": "Green Acres Farm", "address": "123 Rural Route", "city": "Springfield" }))
        .send()
        .await
        .unwrap();
    let created: JsonValue = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let resp = client
        .put(format!("{}/api/places/{}", base_url, id))
        .json(&json!({ "address": "456 Main Street" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: JsonValue = resp.json().await.unwrap();

    assert_eq!(updated["data"]["address"], json!("456 Main Street"));
    assert_eq!(updated["data"]["name"], json!("Green Acres Farm"));
    assert_eq!(updated["data"]["city"], json!("Springfield"));
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);
    assert!(
        timestamp(&updated["data"]["updatedAt"]) > timestamp(&created["data"]["updatedAt"]),
        "updatedAt advances on every successful mutation"
    );
}

#[tokio::test]
async fn update_cannot_blank_a_required_field() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .json(&json!({ "name": "Green Acres Farm", "address": "123 Rural Route" }))
        .send()
        .await
        .unwrap();
    let created: JsonValue = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap();

    let resp = client
        .put(format!("{}/api/places/{}", base_url, id))
        .json(&json!({ "address": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"]["errors"][0]["field"], json!("address"));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .json(&json!({ "name": "Green Acres Farm", "address": "123 Rural Route" }))
        .send()
        .await
        .unwrap();
    let created: JsonValue = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{}/api/places/{}", base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"]["deleted"], json!(true));

    let resp = reqwest::get(format!("{}/api/places/{}", base_url, id))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn non_json_body_is_422() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places", base_url))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn seed_endpoint_fills_an_empty_collection_once() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/places/seed", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"]["inserted"], json!(3));

    let resp = client
        .post(format!("{}/api/places/seed", base_url))
        .send()
        .await
        .unwrap();
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"]["inserted"], json!(0));

    let resp = reqwest::get(format!("{}/api/places", base_url)).await.unwrap();
    let body: JsonValue = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().map(|a| a.len()), Some(3));
}

fn uuid_string() -> String {
    farm_directory::PlaceId::generate().to_string()
}
