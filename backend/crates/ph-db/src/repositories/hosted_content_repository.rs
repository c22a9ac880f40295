use crate::Result as DbErrorResult;

use ph_core::HostedContentRef;

use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct HostedContentRow {
    agent_file_id: String,
    deleted: bool,
}

impl From<HostedContentRow> for HostedContentRef {
    fn from(row: HostedContentRow) -> Self {
        HostedContentRef::new(row.agent_file_id, row.deleted)
    }
}

/// Read access to `filemeta`, keyed by the agent-facing file UUID.
pub struct HostedContentRepository {
    pool: SqlitePool,
}

impl HostedContentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        agent_file_id: &str,
        filename: &str,
    ) -> DbErrorResult<HostedContentRef> {
        let row = sqlx::query_as::<_, HostedContentRow>(
            r#"
                INSERT INTO filemeta (agent_file_id, filename)
                VALUES (?, ?)
                RETURNING agent_file_id, deleted
            "#,
        )
        .bind(agent_file_id)
        .bind(filename)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_agent_file_id(
        &self,
        agent_file_id: &str,
    ) -> DbErrorResult<Option<HostedContentRef>> {
        let row = sqlx::query_as::<_, HostedContentRow>(
            "SELECT agent_file_id, deleted FROM filemeta WHERE agent_file_id = ?",
        )
        .bind(agent_file_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(HostedContentRef::from))
    }

    /// Soft delete. Returns false when no such file exists.
    pub async fn mark_deleted(&self, agent_file_id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE filemeta SET deleted = 1 WHERE agent_file_id = ?")
            .bind(agent_file_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
