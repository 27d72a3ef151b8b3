//! Communication coach — reading-practice feedback from transcript + speech metrics.

pub mod feedback;
pub mod handlers;
pub mod prompts;
