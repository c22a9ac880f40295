use serde::{Deserialize, Serialize};

/// A stored file that may be attached to a profile server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedContentRef {
    pub agent_file_id: String,
    pub deleted: bool,
}

impl HostedContentRef {
    pub fn new(agent_file_id: impl Into<String>, deleted: bool) -> Self {
        Self {
            agent_file_id: agent_file_id.into(),
            deleted,
        }
    }

    /// Deleted content must never be handed to a running profile server.
    pub fn is_hostable(&self) -> bool {
        !self.deleted
    }
}
