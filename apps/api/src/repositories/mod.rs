//! Persistence seams. Handlers and services depend on the traits; `main`
//! wires the Postgres implementations.

pub mod resume_repo;
pub mod user_repo;

#[cfg(test)]
pub mod memory;

pub use resume_repo::{PgResumeRepository, ResumeRepository};
pub use user_repo::{PgUserRepository, UserRepository};
