//! Error handling
//!
//! Defines error types and handling for the quiz application.

pub mod handlers;
pub mod types;

pub use types::*;
