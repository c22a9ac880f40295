use crate::Severity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator-facing message. Never persisted and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        category: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, category)
    }

    pub fn warning(message: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning, category)
    }
}
