#![allow(dead_code)]

//! Test infrastructure for ph-server route tests

use ph_core::Notification;
use ph_db::{HostedContentRepository, ProfileRepository, SqliteProfileCatalog};
use ph_lifecycle::{LoggingObserver, OperationsBroadcaster, Orchestrator};
use ph_rpc::HttpProfileRpcClient;
use ph_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::sync::broadcast;
use tower::ServiceExt;

pub const PROFILE_NAME: &str = "http-c2";
pub const CONTENT_ID: &str = "uuid-1";
pub const DELETED_CONTENT_ID: &str = "uuid-deleted";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test database");

    ph_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Seed one profile, one live file and one deleted file. Returns the profile id.
pub async fn seed_catalog(pool: &SqlitePool) -> i64 {
    let profile = ProfileRepository::new(pool.clone())
        .create(PROFILE_NAME, "HTTP profile")
        .await
        .expect("Failed to create profile");

    let contents = HostedContentRepository::new(pool.clone());
    contents
        .create(CONTENT_ID, "payload.bin")
        .await
        .expect("Failed to create content");
    contents
        .create(DELETED_CONTENT_ID, "old.bin")
        .await
        .expect("Failed to create content");
    contents
        .mark_deleted(DELETED_CONTENT_ID)
        .await
        .expect("Failed to delete content");

    profile.id
}

pub struct TestApp {
    pub state: AppState,
    pub profile_id: i64,
}

/// Create AppState wired to a seeded catalog and the given profile server
pub async fn create_test_app(rpc_base_url: &str) -> TestApp {
    let pool = create_test_pool().await;
    let profile_id = seed_catalog(&pool).await;

    let rpc = HttpProfileRpcClient::new(rpc_base_url, Duration::from_secs(5))
        .expect("Failed to create RPC client");
    let broadcaster = OperationsBroadcaster::new(64);

    let orchestrator = Orchestrator::new(
        Arc::new(SqliteProfileCatalog::new(pool)),
        Arc::new(rpc),
        Arc::new(broadcaster.clone()),
    )
    .with_observer(Arc::new(LoggingObserver::new()));

    TestApp {
        state: AppState {
            orchestrator,
            broadcaster,
        },
        profile_id,
    }
}

/// POST a raw body to the host-file webhook and return status and JSON reply
pub async fn post_host_file(state: &AppState, body: String) -> (StatusCode, serde_json::Value) {
    let app = ph_server::build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/c2profiles/host-file")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}

/// Receive the next notification or panic after five seconds
pub async fn next_notification(receiver: &mut broadcast::Receiver<Notification>) -> Notification {
    tokio::time::timeout(Duration::from_secs(5), receiver.recv())
        .await
        .expect("Timed out waiting for notification")
        .expect("Notification channel closed")
}
