//! Aptitude tutoring — explanations for incorrectly answered questions.

pub mod explain;
pub mod handlers;
pub mod prompts;
