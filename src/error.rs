//! Crate-level error types.
//!
//! Only setup paths are fallible. Per-frame work never returns an error:
//! a surface that cannot be drawn to simply produces empty frames.

use std::fmt;

/// Errors produced by the tidelight crate.
#[derive(Debug)]
pub enum TidelightError {
    /// Generic I/O failure (options files, preview output).
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Browser host failure (missing window, element, listener setup).
    Host(String),
}

impl fmt::Display for TidelightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for TidelightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TidelightError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
