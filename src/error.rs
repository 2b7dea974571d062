//! # Error Types
//!
//! This module defines error types used throughout the thermal-ttl library.

use thiserror::Error;

/// Main error type for thermal-ttl operations
#[derive(Debug, Error)]
pub enum ThermalError {
    /// Transport-level errors (open, write, flush)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Baud rate the serial line cannot be configured for
    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaud(u32),

    /// Invalid printer configuration or profile
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
