//! End-to-end tests for the paintings resource.
//!
//! These require a running PostgreSQL instance.
//! Run with: DATABASE_URL=... cargo test -p gallery-server --features integration-tests
#![cfg(feature = "integration-tests")]

use gallery_server::{config::ServerConfig, routes, state::AppState};
use gallery_store::{Store, StoreConfig};
use serde_json::{json, Value};

/// Append a `search_path` option to a connection URL.
fn with_search_path(url: &str, schema: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}options=-csearch_path%3D{}", url, sep, schema)
}

/// Spawn the full router on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    spawn_app(StoreConfig::from_env().expect("DATABASE_URL must be set")).await
}

/// Spawn the router over a freshly created schema, so the paintings
/// collection is guaranteed empty regardless of concurrently running tests.
async fn spawn_empty_server(schema: &str) -> String {
    let mut config = StoreConfig::from_env().expect("DATABASE_URL must be set");

    let bootstrap = Store::connect(StoreConfig {
        run_migrations: false,
        ..config.clone()
    })
    .await
    .expect("database connection");
    sqlx::raw_sql(&format!(
        "DROP SCHEMA IF EXISTS {0} CASCADE; CREATE SCHEMA {0};",
        schema
    ))
    .execute(bootstrap.pool())
    .await
    .expect("schema setup");

    config.database_url = with_search_path(&config.database_url, schema);
    spawn_app(config).await
}

async fn spawn_app(store_config: StoreConfig) -> String {
    let database_url = store_config.database_url.clone();
    let store = Store::connect(store_config)
        .await
        .expect("database connection");

    let config = ServerConfig {
        database_url,
        port: 0,
        log_level: "info".to_string(),
        cors_allowed_origins: "*".to_string(),
    };

    let app = routes::build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server task");
    });

    format!("http://{}", addr)
}

async fn create_painting(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/paintings", base))
        .json(&body)
        .send()
        .await
        .expect("request")
}

#[tokio::test]
async fn create_without_name_is_400_and_writes_nothing() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let before = client
        .get(format!("{}/paintings/", base))
        .send()
        .await
        .expect("request")
        .json::<Vec<Value>>()
        .await
        .expect("array body")
        .len();

    let response = create_painting(&client, &base, json!({"artist": "anonymous"})).await;
    assert_eq!(response.status(), 400);

    let response = create_painting(&client, &base, json!({"name": ""})).await;
    assert_eq!(response.status(), 400);

    let after = client
        .get(format!("{}/paintings/", base))
        .send()
        .await
        .expect("request")
        .json::<Vec<Value>>()
        .await
        .expect("array body")
        .len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn create_then_read_roundtrip() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = create_painting(
        &client,
        &base,
        json!({"name": "Starry Night", "artist": "Vincent van Gogh"}),
    )
    .await;
    assert_eq!(response.status(), 200);

    let created: Value = response.json().await.expect("json body");
    let id = created["id"].as_str().expect("assigned id").to_string();
    assert_eq!(created["name"], json!("Starry Night"));
    assert_eq!(created["artist"], json!("Vincent van Gogh"));

    let response = client
        .get(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 202);

    let fetched: Value = response.json().await.expect("json body");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], created["name"]);

    // Cleanup
    client
        .delete(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
}

#[tokio::test]
async fn read_unknown_and_malformed_ids_are_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/paintings/{}", base, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/paintings/not-a-valid-id", base))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn list_on_empty_collection_is_202_with_empty_array() {
    let base = spawn_empty_server("gallery_api_empty").await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/paintings/", base))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 202);

    let all: Vec<Value> = response.json().await.expect("array body");
    assert!(all.is_empty());
}

#[tokio::test]
async fn list_is_202_with_an_array() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = create_painting(&client, &base, json!({"name": "Water Lilies"})).await;
    let created: Value = response.json().await.expect("json body");
    let id = created["id"].as_str().expect("assigned id").to_string();

    let response = client
        .get(format!("{}/paintings/", base))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 202);

    let all: Vec<Value> = response.json().await.expect("array body");
    assert!(all.iter().any(|p| p["id"] == created["id"]));

    // Cleanup
    client
        .delete(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
}

#[tokio::test]
async fn delete_lifecycle() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // POST {name: "Starry Night"} -> 200 with an id
    let response = create_painting(&client, &base, json!({"name": "Starry Night"})).await;
    assert_eq!(response.status(), 200);
    let created: Value = response.json().await.expect("json body");
    let id = created["id"].as_str().expect("assigned id").to_string();

    // GET -> 202 same record
    let response = client
        .get(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 202);

    // DELETE -> 204, no body
    let response = client
        .delete(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 204);
    assert!(response.bytes().await.expect("body").is_empty());

    // GET again -> 404
    let response = client
        .get(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);

    // DELETE again -> 404
    let response = client
        .delete(format!("{}/paintings/{}", base, id))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 404);
}
