//! Storage result types
//!
//! Defines row structures returned by storage operations.

/// A stored quiz question with its canonical answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

/// One recorded quiz result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}
