use serde::{Deserialize, Serialize};

/// An incoming "host this file on that profile" request.
///
/// Every field is optional at this level so that an absent field can be
/// reported as a malformed request instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRequest {
    #[serde(rename = "c2_id")]
    pub profile_id: Option<i64>,
    #[serde(rename = "file_uuid")]
    pub content_id: Option<String>,
    #[serde(rename = "host_url")]
    pub target_location: Option<String>,
}

impl LifecycleRequest {
    pub fn new(
        profile_id: i64,
        content_id: impl Into<String>,
        target_location: impl Into<String>,
    ) -> Self {
        Self {
            profile_id: Some(profile_id),
            content_id: Some(content_id.into()),
            target_location: Some(target_location.into()),
        }
    }
}
