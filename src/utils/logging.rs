//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};
use std::io::Write;

/// Setup logging for the application
///
/// `RUST_LOG` wins over `default_level`. Lines look like
/// `2024-01-01T12:00:00Z - INFO - message`.
pub fn setup_logging(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
