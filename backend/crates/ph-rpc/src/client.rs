use crate::RpcResult;

use ph_core::{ProfileRef, RpcOutcome};

use std::time::Duration;

use async_trait::async_trait;

/// Request/reply operations against a running profile server.
///
/// Each call suspends until the server replies or the client timeout
/// elapses. `Err` means the call never produced a usable reply;
/// `Ok(outcome)` with `success == false` means the server refused.
/// Implementations never retry.
#[async_trait]
pub trait ProfileRpcClient: Send + Sync {
    async fn attach_content(
        &self,
        profile: &ProfileRef,
        content_id: &str,
        target_location: &str,
    ) -> RpcResult<RpcOutcome>;

    async fn stop(&self, profile: &ProfileRef) -> RpcResult<RpcOutcome>;

    async fn start(&self, profile: &ProfileRef) -> RpcResult<RpcOutcome>;

    /// Upper bound on a single call.
    fn timeout(&self) -> Duration;
}
