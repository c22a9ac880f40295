use std::fmt;

/// The three calls the orchestrator makes against a profile server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcOperation {
    Attach,
    Stop,
    Start,
}

impl RpcOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcOperation::Attach => "attach",
            RpcOperation::Stop => "stop",
            RpcOperation::Start => "start",
        }
    }
}

impl fmt::Display for RpcOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
