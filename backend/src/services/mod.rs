pub mod auth;
pub mod resumes;
