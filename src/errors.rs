use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the front-end service.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// A collaborator could not be reached, timed out or sent a body we
    /// could not decode.
    #[error("{service} request failed: {reason}")]
    Network {
        service: &'static str,
        reason: String,
    },

    /// A collaborator answered with a non-success status.
    #[error("{service} returned {status}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: Option<String>,
    },

    /// Client-side input rejected before any collaborator was called.
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Not signed in")]
    Unauthorized,
}

impl FrontendError {
    pub fn network(service: &'static str, reason: impl ToString) -> Self {
        FrontendError::Network {
            service,
            reason: reason.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        FrontendError::Validation(message.into())
    }

    /// Whether a read view may fall back to the bundled sample data.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FrontendError::Network { .. } | FrontendError::Upstream { .. }
        )
    }

    /// Message suitable for an inline form error, preferring what the
    /// collaborator said over our own description.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FrontendError::Upstream {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            FrontendError::Validation(message) => message.clone(),
            FrontendError::NotFound(_) | FrontendError::Unauthorized => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl ResponseError for FrontendError {
    fn status_code(&self) -> StatusCode {
        match self {
            FrontendError::Network { .. } => StatusCode::BAD_GATEWAY,
            FrontendError::Upstream { status, .. } => match StatusCode::from_u16(*status) {
                Ok(status) if status.is_client_error() => status,
                _ => StatusCode::BAD_GATEWAY,
            },
            FrontendError::Validation(_) => StatusCode::BAD_REQUEST,
            FrontendError::NotFound(_) => StatusCode::NOT_FOUND,
            FrontendError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

pub type FrontendResult<T> = Result<T, FrontendError>;
