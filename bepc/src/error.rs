//! Error types for the BEPC runtime crate

use bepc_core::CodecError;
use thiserror::Error;

/// Errors raised by containers, persistence and the command line tool
#[derive(Error, Debug)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cli")]
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// Codec error category, when this error came from the codec
    pub fn category(&self) -> Option<bepc_core::ErrorCategory> {
        match self {
            Error::Codec(err) => Some(err.category()),
            _ => None,
        }
    }
}

/// Result type for the BEPC runtime crate
pub type Result<T> = std::result::Result<T, Error>;
