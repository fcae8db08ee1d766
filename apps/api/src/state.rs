use std::sync::Arc;

use crate::config::Config;
use crate::repositories::{ResumeRepository, UserRepository};
use crate::resume::service::ResumeService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resume_service: Arc<dyn ResumeService>,
    pub resumes: Arc<dyn ResumeRepository>,
    pub users: Arc<dyn UserRepository>,
}
