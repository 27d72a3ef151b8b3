//! Code review — single-shot evaluation of a coding-challenge submission.

pub mod handlers;
pub mod prompts;
pub mod reviewer;
