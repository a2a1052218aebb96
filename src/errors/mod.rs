//! Error handling module for the FAQ search proxy.
//!
//! Maps every failure of a search request onto an HTTP status code and the JSON
//! error envelope the clients expect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Value of the `endpoint` field in every search payload.
pub const ENDPOINT: &str = "faq";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// `q` missing or empty
    MissingQuery,
    /// A pagination parameter is not an integer
    InvalidParameter { name: &'static str, value: String },
    /// The upstream call failed before a response arrived
    UpstreamTransport(String),
    /// The upstream answered with a status other than 200/206
    UpstreamStatus { status: u16, query: String },
    /// The upstream body could not be read as JSON
    UpstreamPayload { query: String, detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::UpstreamTransport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamStatus { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamPayload { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the client.
    ///
    /// Transport details stay in the server log.
    pub fn message(&self) -> String {
        match self {
            AppError::MissingQuery => "q parameter is required".to_string(),
            AppError::InvalidParameter { name, .. } => format!("{} must be an integer", name),
            AppError::UpstreamTransport(_) => "Search error".to_string(),
            AppError::UpstreamStatus { status, query } => {
                format!("Received {} for q={}", status, query)
            }
            AppError::UpstreamPayload { query, .. } => format!("Invalid response for q={}", query),
        }
    }

    /// Whether the failure happened on the upstream side of the proxy.
    pub fn is_upstream(&self) -> bool {
        !matches!(
            self,
            AppError::MissingQuery | AppError::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidParameter { name, value } => {
                write!(f, "{} must be an integer, got {:?}", name, value)
            }
            AppError::UpstreamTransport(detail) => write!(f, "Search error: {}", detail),
            AppError::UpstreamPayload { query, detail } => {
                write!(f, "Invalid response for q={}: {}", query, detail)
            }
            _ => f.write_str(&self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamTransport(err.to_string())
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub msg: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            endpoint: error.is_upstream().then(|| ENDPOINT.to_string()),
            error: ErrorDetails {
                msg: error.message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
