use crate::restart_sequence::{RestartSequence, check_reply};
use crate::{
    Broadcaster, LifecycleError, LifecycleEvent, LifecycleObserver, LifecycleResult,
    RequestValidator, RpcOperation, ValidatedRequest,
};

use ph_core::{HostedContentRef, LifecycleRequest, ProfileRef};
use ph_db::ProfileCatalog;
use ph_rpc::ProfileRpcClient;

use std::sync::Arc;

/// Synchronous verdict of a host-file request.
#[derive(Debug)]
pub enum HostFileOutcome {
    /// Attach succeeded and the restart sequence was launched.
    Accepted {
        profile: ProfileRef,
        content: HostedContentRef,
    },
    Rejected(LifecycleError),
}

impl HostFileOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, HostFileOutcome::Accepted { .. })
    }
}

/// Validates, attaches, then restarts the profile server in the background.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct Orchestrator {
    validator: RequestValidator,
    rpc: Arc<dyn ProfileRpcClient>,
    broadcaster: Arc<dyn Broadcaster>,
    observers: Vec<Arc<dyn LifecycleObserver>>,
}

impl Orchestrator {
    pub fn new(
        catalog: Arc<dyn ProfileCatalog>,
        rpc: Arc<dyn ProfileRpcClient>,
        broadcaster: Arc<dyn Broadcaster>,
    ) -> Self {
        Self {
            validator: RequestValidator::new(catalog),
            rpc,
            broadcaster,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn LifecycleObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Handle one host-file request.
    ///
    /// Returns once attach has a definite answer. On `Accepted` exactly one
    /// restart sequence has been spawned; its handle is dropped and its
    /// result is visible only through notifications and observers.
    pub async fn host_file(&self, request: LifecycleRequest) -> HostFileOutcome {
        let validated = match self.validator.validate(&request).await {
            Ok(validated) => validated,
            Err(error) => return self.reject(error),
        };

        if let Err(error) = self.attach(&validated).await {
            self.notify(&LifecycleEvent::AttachFailed {
                profile: &validated.profile,
                error: &error,
            });
            return HostFileOutcome::Rejected(error);
        }

        self.notify(&LifecycleEvent::Accepted {
            profile: &validated.profile,
            content: &validated.content,
        });
        self.launch_restart(validated.profile.clone());

        HostFileOutcome::Accepted {
            profile: validated.profile,
            content: validated.content,
        }
    }

    /// Reject a request that could not even be decoded.
    pub fn reject_malformed(&self, message: impl Into<String>) -> HostFileOutcome {
        self.reject(LifecycleError::malformed(message))
    }

    fn reject(&self, error: LifecycleError) -> HostFileOutcome {
        self.notify(&LifecycleEvent::ValidationRejected { error: &error });
        HostFileOutcome::Rejected(error)
    }

    async fn attach(&self, validated: &ValidatedRequest) -> LifecycleResult<()> {
        log::debug!(
            "Attaching file {} to {} at {} (timeout {:?})",
            validated.content.agent_file_id,
            validated.profile,
            validated.target_location,
            self.rpc.timeout()
        );

        let reply = self
            .rpc
            .attach_content(
                &validated.profile,
                &validated.content.agent_file_id,
                &validated.target_location,
            )
            .await;

        check_reply(RpcOperation::Attach, reply)
    }

    fn launch_restart(&self, profile: ProfileRef) {
        let sequence = RestartSequence {
            profile,
            rpc: Arc::clone(&self.rpc),
            broadcaster: Arc::clone(&self.broadcaster),
            observers: self.observers.clone(),
        };

        // Detached: never joined, never cancelled.
        drop(tokio::spawn(sequence.run()));
    }

    fn notify(&self, event: &LifecycleEvent<'_>) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
