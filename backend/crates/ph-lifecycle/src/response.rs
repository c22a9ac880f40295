use crate::{HostFileOutcome, LifecycleError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Caller-facing verdict of a host-file request.
///
/// `status` reflects the synchronous attach only; restart problems are
/// reported through notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFileResponse {
    pub status: ResponseStatus,
    pub error: String,
}

impl HostFileResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            error: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: message.into(),
        }
    }
}

impl From<&LifecycleError> for HostFileResponse {
    fn from(error: &LifecycleError) -> Self {
        Self::error(error.client_message())
    }
}

impl From<&HostFileOutcome> for HostFileResponse {
    fn from(outcome: &HostFileOutcome) -> Self {
        match outcome {
            HostFileOutcome::Accepted { .. } => Self::success(),
            HostFileOutcome::Rejected(error) => Self::from(error),
        }
    }
}
