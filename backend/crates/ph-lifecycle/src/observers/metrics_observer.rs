use crate::{LifecycleEvent, LifecycleObserver, Metrics, RpcOperation};

/// Counts transitions through [`Metrics`].
#[derive(Clone, Default)]
pub struct MetricsObserver {
    metrics: Metrics,
}

impl MetricsObserver {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

impl LifecycleObserver for MetricsObserver {
    fn on_event(&self, event: &LifecycleEvent<'_>) {
        match event {
            LifecycleEvent::ValidationRejected { error } => {
                self.metrics.request_rejected(error.error_code());
            }
            LifecycleEvent::AttachFailed { error, .. } => {
                self.metrics.rpc_failed(RpcOperation::Attach, error.kind());
                self.metrics.request_rejected(error.error_code());
            }
            LifecycleEvent::Accepted { .. } => self.metrics.request_accepted(),
            LifecycleEvent::RestartPhaseFailed {
                operation, error, ..
            } => {
                self.metrics.rpc_failed(*operation, error.kind());
                self.metrics.restart_failed(*operation);
            }
            LifecycleEvent::RestartCompleted { .. } => self.metrics.restart_completed(),
        }
    }
}
