//! Application error type and its HTTP mapping
//!
//! Every failure a route can hit is an [`AppError`]. Handlers attach the
//! route's message with [`AppError::context`] and the resulting
//! [`RouteError`] renders the `{success, message, error}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error("input must be a 24 character hex string, got '{0}'")]
    InvalidId(String),

    #[error("invalid value for '{field}': '{value}' is not a number")]
    InvalidQuery { field: &'static str, value: String },

    #[error("{0}")]
    InvalidQueryString(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Attach the route-level message shown to the caller
    pub fn context(self, message: &'static str) -> RouteError {
        RouteError {
            message,
            source: self,
        }
    }
}

/// An [`AppError`] tagged with the message of the route it surfaced from
#[derive(Debug)]
pub struct RouteError {
    message: &'static str,
    source: AppError,
}

impl RouteError {
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn source(&self) -> &AppError {
        &self.source
    }
}

/// Error envelope returned by every failing route
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);

        let body = ErrorResponse {
            success: false,
            message: self.message.to_string(),
            error: self.source.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.context("An unexpected error occurred").into_response()
    }
}
