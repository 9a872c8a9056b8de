//! Error types for the relgraph-server crate and their HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use relgraph_core::RelgraphError;
use relgraph_graph::GraphError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Invalid(#[from] RelgraphError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("No route for {0}")]
    NotFound(String),

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Json(rejection) => (rejection.status(), "invalid_body"),
            Self::Invalid(RelgraphError::InvalidIdentifier { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_identifier")
            }
            Self::Invalid(RelgraphError::Config(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error")
            }
            Self::Graph(_) => (StatusCode::INTERNAL_SERVER_ERROR, "graph_error"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::MethodNotAllowed { .. } => {
                (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
                error_type,
            },
        };
        (status, Json(body)).into_response()
    }
}
