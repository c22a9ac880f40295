use crate::Result as DbErrorResult;

use ph_core::ProfileRef;

use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
}

impl From<ProfileRow> for ProfileRef {
    fn from(row: ProfileRow) -> Self {
        ProfileRef::new(row.id, row.name)
    }
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, description: &str) -> DbErrorResult<ProfileRef> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                INSERT INTO c2profile (name, description)
                VALUES (?, ?)
                RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<ProfileRef>> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT id, name FROM c2profile WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRef::from))
    }
}
