//! Read contract used to validate hosting requests.
//!
//! The orchestrator only ever asks two questions of persistence: does this
//! profile exist, and does this file exist (and is it deleted). Both answers
//! are `Ok(None)` for a missing row; `Err` is reserved for the store itself
//! failing.

use crate::{HostedContentRepository, ProfileRepository, Result as DbErrorResult};

use ph_core::{HostedContentRef, ProfileRef};

use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait ProfileCatalog: Send + Sync {
    async fn find_profile(&self, profile_id: i64) -> DbErrorResult<Option<ProfileRef>>;

    async fn find_content(&self, agent_file_id: &str) -> DbErrorResult<Option<HostedContentRef>>;
}

/// `ProfileCatalog` backed by the SQLite repositories.
pub struct SqliteProfileCatalog {
    profiles: ProfileRepository,
    contents: HostedContentRepository,
}

impl SqliteProfileCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool.clone()),
            contents: HostedContentRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProfileCatalog for SqliteProfileCatalog {
    async fn find_profile(&self, profile_id: i64) -> DbErrorResult<Option<ProfileRef>> {
        self.profiles.find_by_id(profile_id).await
    }

    async fn find_content(&self, agent_file_id: &str) -> DbErrorResult<Option<HostedContentRef>> {
        self.contents.find_by_agent_file_id(agent_file_id).await
    }
}
