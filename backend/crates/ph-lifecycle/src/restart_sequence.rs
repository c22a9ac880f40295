use crate::{
    Broadcaster, HOST_FILE_CATEGORY, LifecycleError, LifecycleEvent, LifecycleObserver,
    LifecycleResult, RESTARTED_MESSAGE, RpcOperation, STARTING_MESSAGE, STOPPING_MESSAGE,
};

use ph_core::{Notification, ProfileRef, RpcOutcome};
use ph_rpc::{ProfileRpcClient, RpcResult};

use std::sync::Arc;

/// Terminal state of a background restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    Completed,
    Failed(RpcOperation),
}

/// Stop then start one profile server, reporting progress as notifications.
///
/// Runs detached from the request that launched it. Stop must succeed before
/// start is attempted; nothing is retried.
pub(crate) struct RestartSequence {
    pub(crate) profile: ProfileRef,
    pub(crate) rpc: Arc<dyn ProfileRpcClient>,
    pub(crate) broadcaster: Arc<dyn Broadcaster>,
    pub(crate) observers: Vec<Arc<dyn LifecycleObserver>>,
}

impl RestartSequence {
    pub(crate) async fn run(self) -> RestartOutcome {
        self.info(STOPPING_MESSAGE);
        if let Err(error) = self.stop().await {
            return self.fail(RpcOperation::Stop, error);
        }

        self.info(STARTING_MESSAGE);
        if let Err(error) = self.start().await {
            return self.fail(RpcOperation::Start, error);
        }

        self.info(RESTARTED_MESSAGE);
        self.notify(&LifecycleEvent::RestartCompleted {
            profile: &self.profile,
        });
        RestartOutcome::Completed
    }

    async fn stop(&self) -> LifecycleResult<()> {
        let reply = self.rpc.stop(&self.profile).await;
        check_reply(RpcOperation::Stop, reply)
    }

    async fn start(&self) -> LifecycleResult<()> {
        let reply = self.rpc.start(&self.profile).await;
        check_reply(RpcOperation::Start, reply)
    }

    fn fail(&self, operation: RpcOperation, error: LifecycleError) -> RestartOutcome {
        self.broadcaster.broadcast(Notification::warning(
            warning_text(operation, &error),
            HOST_FILE_CATEGORY,
        ));
        self.notify(&LifecycleEvent::RestartPhaseFailed {
            profile: &self.profile,
            operation,
            error: &error,
        });
        RestartOutcome::Failed(operation)
    }

    fn info(&self, message: &str) {
        self.broadcaster
            .broadcast(Notification::info(message, HOST_FILE_CATEGORY));
    }

    fn notify(&self, event: &LifecycleEvent<'_>) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

/// Folds transport and logical failures into one error.
#[track_caller]
pub(crate) fn check_reply(
    operation: RpcOperation,
    reply: RpcResult<RpcOutcome>,
) -> LifecycleResult<()> {
    match reply {
        Ok(outcome) if outcome.success => Ok(()),
        Ok(outcome) => Err(LifecycleError::rpc_logical(operation, outcome.error)),
        Err(source) => Err(LifecycleError::rpc_transport(operation, source)),
    }
}

/// Operator text for a failed restart phase.
fn warning_text(operation: RpcOperation, error: &LifecycleError) -> String {
    match error {
        LifecycleError::RpcTransport { source, .. } => format!(
            "Failed to {} c2 profile after hosting file: {}",
            operation,
            source.summary()
        ),
        other => other.client_message(),
    }
}
