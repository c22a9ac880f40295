use ph_core::{HostedContentRef, ProfileRef};
use ph_db::{HostedContentRepository, ProfileRepository};

use sqlx::SqlitePool;

pub async fn create_profile(pool: &SqlitePool, name: &str) -> ProfileRef {
    ProfileRepository::new(pool.clone())
        .create(name, "test profile")
        .await
        .expect("Failed to create profile")
}

pub async fn create_content(pool: &SqlitePool, agent_file_id: &str) -> HostedContentRef {
    HostedContentRepository::new(pool.clone())
        .create(agent_file_id, "payload.bin")
        .await
        .expect("Failed to create content")
}

pub async fn create_deleted_content(pool: &SqlitePool, agent_file_id: &str) -> HostedContentRef {
    let repo = HostedContentRepository::new(pool.clone());
    repo.create(agent_file_id, "payload.bin")
        .await
        .expect("Failed to create content");
    repo.mark_deleted(agent_file_id)
        .await
        .expect("Failed to delete content");

    HostedContentRef::new(agent_file_id, true)
}
