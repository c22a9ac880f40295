mod broadcaster;
mod error;
mod metrics;
mod observers;
mod orchestrator;
mod request_validator;
mod response;
mod restart_sequence;
mod rpc_operation;

#[cfg(test)]
mod tests;

pub use broadcaster::{Broadcaster, OperationsBroadcaster};
pub use error::{LifecycleError, Result as LifecycleResult};
pub use crate::metrics::Metrics;
pub use observers::{LifecycleEvent, LifecycleObserver, LoggingObserver, MetricsObserver};
pub use orchestrator::{HostFileOutcome, Orchestrator};
pub use request_validator::{RequestValidator, ValidatedRequest};
pub use response::{HostFileResponse, ResponseStatus};
pub use restart_sequence::RestartOutcome;
pub use rpc_operation::RpcOperation;

/// Category attached to every notification this crate emits.
pub const HOST_FILE_CATEGORY: &str = "host_file";

pub const STOPPING_MESSAGE: &str = "Stopping C2 Profile after hosting new file...";
pub const STARTING_MESSAGE: &str = "Starting C2 Profile after hosting new file...";
pub const RESTARTED_MESSAGE: &str = "Successfully restarted C2 Profile after hosting a file";
