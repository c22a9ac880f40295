use crate::{LifecycleError, LifecycleResult};

use ph_core::{HostedContentRef, LifecycleRequest, ProfileRef};
use ph_db::ProfileCatalog;

use std::sync::Arc;

/// A request whose profile and content both resolved and may be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub profile: ProfileRef,
    pub content: HostedContentRef,
    pub target_location: String,
}

/// Read-only checks run before any RPC is issued.
///
/// Order is fixed and short-circuits: required fields, profile, content,
/// deleted flag.
#[derive(Clone)]
pub struct RequestValidator {
    catalog: Arc<dyn ProfileCatalog>,
}

impl RequestValidator {
    pub fn new(catalog: Arc<dyn ProfileCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn validate(&self, request: &LifecycleRequest) -> LifecycleResult<ValidatedRequest> {
        let profile_id = request
            .profile_id
            .filter(|id| *id != 0)
            .ok_or_else(|| LifecycleError::missing_field("c2_id"))?;
        let content_id = required_text(request.content_id.as_deref(), "file_uuid")?;
        let target_location = required_text(request.target_location.as_deref(), "host_url")?;

        let profile = self
            .catalog
            .find_profile(profile_id)
            .await?
            .ok_or_else(|| LifecycleError::profile_not_found(profile_id))?;

        let content = self
            .catalog
            .find_content(content_id)
            .await?
            .ok_or_else(|| LifecycleError::content_not_found(content_id))?;

        if !content.is_hostable() {
            return Err(LifecycleError::content_unavailable(content_id));
        }

        Ok(ValidatedRequest {
            profile,
            content,
            target_location: target_location.to_string(),
        })
    }
}

#[track_caller]
fn required_text<'a>(value: Option<&'a str>, field: &str) -> LifecycleResult<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LifecycleError::missing_field(field)),
    }
}
