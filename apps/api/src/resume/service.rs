//! Resume business logic: generation through the LLM and owner-checked deletion.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::resume::NewResume;
use crate::models::user::User;
use crate::repositories::{ResumeRepository, UserRepository};
use crate::resume::prompts::{build_generation_prompt, GENERATION_SYSTEM};

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

#[async_trait]
pub trait ResumeService: Send + Sync {
    /// Generates a resume from `description`, stores it for the owner and
    /// returns the payload sent back to the client.
    async fn generate_resume_response(
        &self,
        owner_email: &str,
        description: &str,
    ) -> Result<Map<String, Value>, AppError>;

    /// Deletes resume `id` if it belongs to `owner_email`.
    async fn delete_resume(&self, id: i64, owner_email: &str) -> Result<(), AppError>;
}

pub struct DefaultResumeService {
    llm: Arc<dyn TextGenerator>,
    users: Arc<dyn UserRepository>,
    resumes: Arc<dyn ResumeRepository>,
}

impl DefaultResumeService {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        users: Arc<dyn UserRepository>,
        resumes: Arc<dyn ResumeRepository>,
    ) -> Self {
        Self {
            llm,
            users,
            resumes,
        }
    }

    async fn resolve_owner(&self, email: &str) -> Result<User, AppError> {
        self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!("Authenticated principal has no user record");
            AppError::Unauthorized
        })
    }
}

#[async_trait]
impl ResumeService for DefaultResumeService {
    async fn generate_resume_response(
        &self,
        owner_email: &str,
        description: &str,
    ) -> Result<Map<String, Value>, AppError> {
        let owner = self.resolve_owner(owner_email).await?;

        info!("Generating resume for user {}", owner.id);
        let prompt = build_generation_prompt(description);
        let raw = self
            .llm
            .complete(&prompt, GENERATION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume generation call failed: {e}")))?;

        let generated = parse_generation(&raw)?;
        let resume_data = serde_json::to_string(&generated.data)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

        let stored = self
            .resumes
            .insert(NewResume {
                user_id: owner.id,
                user_description: description,
                resume_data: &resume_data,
            })
            .await?;
        info!("Stored resume {} for user {}", stored.id, owner.id);

        let mut response = Map::new();
        response.insert("data".to_string(), Value::Object(generated.data));
        response.insert(
            "think".to_string(),
            generated.think.map(Value::String).unwrap_or(Value::Null),
        );
        response.insert("resumeId".to_string(), Value::from(stored.id));
        Ok(response)
    }

    async fn delete_resume(&self, id: i64, owner_email: &str) -> Result<(), AppError> {
        // Unknown principals are rejected before any id lookup.
        let owner = self.resolve_owner(owner_email).await?;

        let resume = self
            .resumes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if resume.user_id != owner.id {
            warn!("User {} attempted to delete resume {id} owned by another user", owner.id);
            return Err(AppError::Forbidden(
                "You are not authorized to delete this resume".to_string(),
            ));
        }

        if !self.resumes.delete(id, owner.id).await? {
            return Err(not_found(id));
        }
        info!("Deleted resume {id} for user {}", owner.id);
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

/// Model output split into its optional reasoning block and resume object.
#[derive(Debug)]
struct GeneratedResume {
    think: Option<String>,
    data: Map<String, Value>,
}

/// Reasoning models may prefix their answer with `<think>...</think>`. The
/// reasoning is returned separately; the remainder must be a JSON object.
fn parse_generation(raw: &str) -> Result<GeneratedResume, AppError> {
    let (think, answer) = split_reasoning(raw);

    let value: Value = serde_json::from_str(strip_json_fences(answer))
        .map_err(|e| AppError::Llm(format!("Generated resume is not valid JSON: {e}")))?;

    match value {
        Value::Object(data) => Ok(GeneratedResume { think, data }),
        other => Err(AppError::Llm(format!(
            "Generated resume must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn split_reasoning(raw: &str) -> (Option<String>, &str) {
    let Some(start) = raw.find(THINK_OPEN) else {
        return (None, raw);
    };
    let body_start = start + THINK_OPEN.len();
    match raw[body_start..].find(THINK_CLOSE) {
        Some(len) => {
            let think = raw[body_start..body_start + len].trim().to_string();
            let rest = &raw[body_start + len + THINK_CLOSE.len()..];
            ((!think.is_empty()).then_some(think), rest)
        }
        None => (None, raw),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
