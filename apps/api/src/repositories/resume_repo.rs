use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::models::user::User;

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// All resumes owned by `user`. Implementations must never return
    /// another user's rows.
    async fn find_by_user(&self, user: &User) -> Result<Vec<Resume>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Resume>, AppError>;

    async fn insert(&self, resume: NewResume<'_>) -> Result<Resume, AppError>;

    /// Deletes resume `id` only if it is owned by `user_id`. Returns `false`
    /// when no row matched, e.g. a concurrent delete got there first.
    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn find_by_user(&self, user: &User) -> Result<Vec<Resume>, AppError> {
        let resumes = sqlx::query_as::<_, Resume>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user.id)
        .fetch_all(&self.pool)
        .await?;
        Ok(resumes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(resume)
    }

    async fn insert(&self, resume: NewResume<'_>) -> Result<Resume, AppError> {
        let row = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (user_id, user_description, resume_data)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(resume.user_id)
        .bind(resume.user_description)
        .bind(resume.resume_data)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted resume {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
