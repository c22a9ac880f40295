use serde::{Deserialize, Serialize};

/// Logical reply of a profile server to any RPC.
///
/// `error` only carries meaning when `success` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

impl RpcOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: String::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
