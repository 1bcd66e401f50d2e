// src/error.rs
use thiserror::Error;

/// Failures surfaced by the backend API client. None are retried
/// automatically and none are fatal; callers surface them and let the
/// user try again.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("Cannot connect to backend at {url}. Please check if the backend is running.")]
    BackendUnreachable { url: String },

    /// Non-2xx status on the analysis submission.
    #[error("Analyze failed ({status}): {body}")]
    AnalysisRequestFailed { status: u16, body: String },

    /// Non-2xx status on the report export.
    #[error("Export failed ({status}): {body}")]
    ExportRequestFailed { status: u16, body: String },

    /// 2xx response whose body could not be decoded.
    #[error("Failed to decode backend response")]
    MalformedResponse(#[source] reqwest::Error),

    /// The request body could not be constructed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
