//! Error type shared by the configuration and persistence layers.
//!
//! None of the per-frame operations fail; errors only come out of parsing
//! tunables and writing through a flag store.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid value {value:?} for tunable `{key}`")]
    InvalidTunable { key: String, value: String },

    #[error("flag store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("failed to write `{key}` to flag store: {reason}")]
    StoreWrite { key: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
