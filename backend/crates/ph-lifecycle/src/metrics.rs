use crate::RpcOperation;

use metrics::counter;

/// Metrics collector for host-file lifecycle transitions
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "ph_lifecycle",
        }
    }

    /// Record a request that passed validation and attach
    pub fn request_accepted(&self) {
        counter!(format!("{}.requests.accepted", self.prefix)).increment(1);
    }

    /// Record a request rejected synchronously
    pub fn request_rejected(&self, error_code: &str) {
        counter!(format!("{}.requests.rejected", self.prefix)).increment(1);
        counter!(format!("{}.requests.rejected.{}", self.prefix, error_code)).increment(1);
    }

    /// Record a failed RPC, transport or logical
    pub fn rpc_failed(&self, operation: RpcOperation, kind: &str) {
        counter!(format!("{}.rpc.failures", self.prefix)).increment(1);
        counter!(format!(
            "{}.rpc.failures.{}.{}",
            self.prefix, operation, kind
        ))
        .increment(1);
    }

    pub fn restart_completed(&self) {
        counter!(format!("{}.restarts.completed", self.prefix)).increment(1);
    }

    pub fn restart_failed(&self, operation: RpcOperation) {
        counter!(format!("{}.restarts.failed", self.prefix)).increment(1);
        counter!(format!("{}.restarts.failed.{}", self.prefix, operation)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
