//! In-memory repositories for handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::models::resume::{NewResume, Resume};
use crate::models::user::User;
use crate::repositories::{ResumeRepository, UserRepository};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    resumes: Mutex<Vec<Resume>>,
}

impl MemoryStore {
    pub fn add_user(&self, email: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            name: String::new(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        user
    }

    pub fn add_resume(&self, owner: &User, description: &str) -> Resume {
        let mut resumes = self.resumes.lock().unwrap();
        let resume = Resume {
            id: resumes.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            user_id: owner.id,
            user_description: description.to_string(),
            resume_data: "{}".to_string(),
            created_at: Utc::now(),
        };
        resumes.push(resume.clone());
        resume
    }

    pub fn resume_count(&self) -> usize {
        self.resumes.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl ResumeRepository for MemoryStore {
    async fn find_by_user(&self, user: &User) -> Result<Vec<Resume>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes
            .iter()
            .filter(|r| r.user_id == user.id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Resume>, AppError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, resume: NewResume<'_>) -> Result<Resume, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let row = Resume {
            id: resumes.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            user_id: resume.user_id,
            user_description: resume.user_description.to_string(),
            resume_data: resume.resume_data.to_string(),
            created_at: Utc::now(),
        };
        resumes.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let before = resumes.len();
        resumes.retain(|r| !(r.id == id && r.user_id == user_id));
        Ok(resumes.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let store = MemoryStore::default();
        let a = store.add_user("a@x.com");
        let b = store.add_user("b@x.com");
        let resume = store.add_resume(&a, "a's");

        assert!(!store.delete(resume.id, b.id).await.unwrap());
        assert_eq!(store.resume_count(), 1);

        assert!(store.delete(resume.id, a.id).await.unwrap());
        assert!(!store.delete(resume.id, a.id).await.unwrap());
        assert_eq!(store.resume_count(), 0);
    }
}
