//! Transition hooks for the host-file lifecycle.
//!
//! The orchestrator reports what happened through [`LifecycleEvent`]s; what
//! gets logged or counted is decided by the observers it was built with.
//! Observers run inline on the task that raised the event, so they must not
//! block.

mod logging_observer;
mod metrics_observer;

pub use logging_observer::LoggingObserver;
pub use metrics_observer::MetricsObserver;

use crate::{LifecycleError, RpcOperation};

use ph_core::{HostedContentRef, ProfileRef};

#[derive(Debug)]
pub enum LifecycleEvent<'a> {
    /// The request never reached a profile server.
    ValidationRejected { error: &'a LifecycleError },
    /// Attach was issued and did not succeed.
    AttachFailed {
        profile: &'a ProfileRef,
        error: &'a LifecycleError,
    },
    /// Attach succeeded; the restart sequence is being launched.
    Accepted {
        profile: &'a ProfileRef,
        content: &'a HostedContentRef,
    },
    /// Stop or start did not succeed; the restart sequence has ended.
    RestartPhaseFailed {
        profile: &'a ProfileRef,
        operation: RpcOperation,
        error: &'a LifecycleError,
    },
    RestartCompleted { profile: &'a ProfileRef },
}

pub trait LifecycleObserver: Send + Sync {
    fn on_event(&self, event: &LifecycleEvent<'_>);
}
