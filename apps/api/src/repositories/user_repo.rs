use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by email. Emails are unique.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
