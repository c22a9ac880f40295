pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod http_client;
pub(crate) mod messages;

pub use client::ProfileRpcClient;
pub use error::{Result as RpcResult, RpcError};
pub use http_client::HttpProfileRpcClient;
pub use messages::{AttachContentRequest, StartRequest, StopRequest};
