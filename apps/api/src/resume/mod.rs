// Resume API: generate, list and delete resumes for the authenticated user.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
