pub mod models;

pub use models::hosted_content_ref::HostedContentRef;
pub use models::lifecycle_request::LifecycleRequest;
pub use models::notification::Notification;
pub use models::profile_ref::ProfileRef;
pub use models::rpc_outcome::RpcOutcome;
pub use models::severity::Severity;

#[cfg(test)]
mod tests;
