use crate::{LifecycleEvent, LifecycleObserver};

/// Writes every transition to the `log` facade.
#[derive(Debug, Clone, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl LifecycleObserver for LoggingObserver {
    fn on_event(&self, event: &LifecycleEvent<'_>) {
        match event {
            LifecycleEvent::ValidationRejected { error } => {
                log::warn!("Host-file request rejected [{}]: {}", error.error_code(), error);
            }
            LifecycleEvent::AttachFailed { profile, error } => {
                log::error!("Failed to attach file to {}: {}", profile, error);
            }
            LifecycleEvent::Accepted { profile, content } => {
                log::info!(
                    "Attached file {} to {}, restarting in background",
                    content.agent_file_id,
                    profile
                );
            }
            LifecycleEvent::RestartPhaseFailed {
                profile,
                operation,
                error,
            } => {
                log::error!("Restart of {} failed at {}: {}", profile, operation, error);
            }
            LifecycleEvent::RestartCompleted { profile } => {
                log::info!("Restarted {} after hosting a file", profile);
            }
        }
    }
}
