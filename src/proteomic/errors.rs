use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::proteomic::models::sequence::SequenceError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Everything that stops a request from producing an analysis.
/// An unrecognised enzyme is not an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    MissingSequence(&'static str),
    #[error("{field}: {source}")]
    InvalidSequence { field: &'static str, source: SequenceError },
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("analysis did not finish in time")]
    Timeout,
    #[error("internal fault: {0}")]
    Internal(String)
}

impl AnalysisError {
    pub fn get_status_code(&self) -> StatusCode {
        return match self {
            AnalysisError::MissingSequence(_)
            | AnalysisError::InvalidSequence { .. }
            | AnalysisError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Timeout
            | AnalysisError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.get_status_code();
        // server faults are logged in full but answered generically
        let message = if status.is_server_error() {
            error!(error = %self, "analysis failed");
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
