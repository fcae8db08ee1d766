use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A generated resume owned by exactly one user.
///
/// `resume_data` holds the generated resume as JSON text, exactly as the
/// client renders it.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub user_description: String,
    pub resume_data: String,
    pub created_at: DateTime<Utc>,
}

/// Columns supplied when persisting a freshly generated resume.
pub struct NewResume<'a> {
    pub user_id: i64,
    pub user_description: &'a str,
    pub resume_data: &'a str,
}
