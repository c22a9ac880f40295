use crate::AppState;

use ph_core::LifecycleRequest;
use ph_lifecycle::HostFileResponse;

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;

/// Webhook envelope: `{"input": {"c2_id", "file_uuid", "host_url"}}`.
#[derive(Debug, Deserialize)]
pub struct HostFileWebhook {
    pub input: Option<LifecycleRequest>,
}

/// POST /api/v1/c2profiles/host-file
///
/// Always answers 200; the verdict is carried in the body. Parsing is done
/// by hand so that a bad body becomes a malformed-request verdict instead of
/// an extractor rejection.
pub async fn host_file(State(state): State<AppState>, body: Bytes) -> Json<HostFileResponse> {
    let outcome = match serde_json::from_slice::<HostFileWebhook>(&body) {
        Ok(HostFileWebhook {
            input: Some(request),
        }) => state.orchestrator.host_file(request).await,
        Ok(HostFileWebhook { input: None }) => {
            state.orchestrator.reject_malformed("input is required")
        }
        Err(e) => state.orchestrator.reject_malformed(e.to_string()),
    };

    Json(HostFileResponse::from(&outcome))
}
