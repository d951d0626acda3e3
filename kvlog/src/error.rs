// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors returned by [`Log`](crate::Log) implementations.

/// Result type for emitting a record.
pub type Result<T> = std::result::Result<T, LogError>;

/// Failure to emit a record.
///
/// Encoders report write and serialization failures. [`Filter`](crate::level::Filter)
/// reports rejected records only when configured to, otherwise rejection is silent.
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record rejected by level filter")]
    NotAllowed,

    #[error("record has no level")]
    NoLevel,
}
