mod hosted_content_ref;
mod lifecycle_request;
mod notification;
mod rpc_outcome;
mod severity;
