pub mod hosted_content_ref;
pub mod lifecycle_request;
pub mod notification;
pub mod profile_ref;
pub mod rpc_outcome;
pub mod severity;
