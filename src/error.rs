//! Error types for the admin client.
//!
//! Load paths never surface these to the host: the editor turns an [`ApiError`]
//! into a placeholder dataset plus a [`crate::models::common::Notice`]. Save paths
//! return them wrapped in [`EditorError::Save`] so the host can show an
//! acknowledgment while the edits stay in place.

use thiserror::Error;

/// Failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// Body was not the expected JSON shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Body decoded but carried no records
    #[error("response contained no data")]
    EmptyPayload,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Failure of an editor operation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor is not in edit mode")]
    NotEditing,

    #[error("a load is in progress")]
    Loading,

    #[error("a save is already in progress")]
    SaveInFlight,

    #[error("editor has been closed")]
    Closed,

    #[error("save failed: {0}")]
    Save(#[source] ApiError),
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid request timeout {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),
}
