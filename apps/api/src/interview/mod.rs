//! Mock technical interview — session opening and question/answer loop.
//!
//! The model itself is the only place conversation state lives; callers
//! replay the full turn history with every step request.

pub mod handlers;
pub mod prompts;
pub mod session;
