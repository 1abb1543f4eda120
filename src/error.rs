use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::weather::WeatherError;

pub const GENERIC_ERROR: &str = "Internal Server Error";

/// Error returned by every handler. Renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream { status, .. } => *status,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Internal details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Internal(_) => GENERIC_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::MissingApiKey => Self::Config(e.to_string()),
            WeatherError::Upstream { status, message } => Self::Upstream {
                status: StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            },
            WeatherError::Transport(inner) => {
                error!(error = %inner, "weather fetch error");
                Self::Internal(anyhow::anyhow!(GENERIC_ERROR))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(e) = &self {
            error!(error = %e, "request failed");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

/// Maps a Postgres unique violation to 409, everything else to 500.
pub fn conflict_or_internal(e: anyhow::Error, conflict_message: &str) -> ApiError {
    let unique = e
        .downcast_ref::<sqlx::Error>()
        .and_then(|db| db.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);
    if unique {
        ApiError::Conflict(conflict_message.to_string())
    } else {
        ApiError::Internal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_details() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused on 10.0.0.3"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn upstream_status_passes_through() {
        let err = ApiError::from(WeatherError::Upstream {
            status: 404,
            message: "city not found".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "city not found");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = ApiError::from(WeatherError::MissingApiKey);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().contains("API Key is missing"));
    }

    #[test]
    fn non_database_errors_are_not_conflicts() {
        let err = conflict_or_internal(anyhow::anyhow!("boom"), "taken");
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
