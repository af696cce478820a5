//! Quiz gameplay
//!
//! Handles the question seed set, the console play loop and score reporting.

pub mod results;
pub mod seed;
pub mod session;

pub use results::QuizSummary;
pub use seed::default_questions;
pub use session::QuizSession;
