//! Response types for the TJM Engine API.
//!
//! This module defines the success-response structures, the error response
//! body and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{FreelancerProfile, ProfileData, ProspectProfile, UserType};

/// Response body for a created session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// The id of the new session.
    pub session_id: Uuid,
    /// The user type the session was created with.
    pub user_type: UserType,
}

/// Response body for a saved profile, defaults applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProfileResponse {
    /// The session the profile was saved on.
    pub session_id: Uuid,
    /// The stored profile after boundary defaulting.
    pub profile: ProfileData,
}

/// Response body for a match request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    /// The user type the matching ran for.
    pub user_type: UserType,
    /// Number of matches returned.
    pub count: usize,
    /// Matched companies, for freelancer sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<ProspectProfile>>,
    /// Matched freelancers, for company sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freelancers: Option<Vec<FreelancerProfile>>,
}

/// Response body for a generated mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMailResponse {
    /// The thread the mail belongs to.
    pub thread_key: String,
    /// The generated mail content.
    pub email: String,
    /// How many generations this thread has used.
    pub generations: u32,
    /// How many generations remain before the limit.
    pub generations_remaining: u32,
}

/// Response body for a sent mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMailResponse {
    /// The thread whose draft was sent.
    pub thread_key: String,
    /// Whether this call transitioned the thread to sent. `false` means
    /// the thread had already been sent and nothing changed.
    pub sent: bool,
    /// The session's total prospecting minutes saved.
    pub total_time_saved: u32,
    /// The session's total copywriting euros saved.
    pub total_money_saved: Decimal,
}

/// One sent interaction on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// The thread the mail was sent on.
    pub thread_key: String,
    /// When it was sent.
    pub sent_at: DateTime<Utc>,
}

/// Response body for the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The session the dashboard describes.
    pub session_id: Uuid,
    /// The session's user type.
    pub user_type: UserType,
    /// Whether a profile has been saved.
    pub profile_created: bool,
    /// The most recently calculated daily rate, if any.
    pub tjm: Option<u32>,
    /// Total prospecting minutes saved.
    pub total_time_saved: u32,
    /// Total copywriting euros saved.
    pub total_money_saved: Decimal,
    /// Sent interactions, oldest first.
    pub interactions: Vec<InteractionRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains a value outside its declared domain",
                ),
            },
            EngineError::SessionNotFound { session_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SESSION_NOT_FOUND",
                    format!("Session not found: {}", session_id),
                    "The session does not exist or has been discarded",
                ),
            },
            EngineError::ThreadNotFound { thread_key } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "THREAD_NOT_FOUND",
                    format!("Mail thread not found: {}", thread_key),
                    "Generate a mail for this thread before sending it",
                ),
            },
            EngineError::GenerationLimitReached { thread_key, limit } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "GENERATION_LIMIT_REACHED",
                    format!(
                        "Generation limit of {} reached for thread '{}'",
                        limit, thread_key
                    ),
                    "This thread has used all of its mail generations",
                ),
            },
            EngineError::UpstreamStatus {
                endpoint,
                status,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_ERROR",
                    format!("Upstream {} returned status {}", endpoint, status),
                    message,
                ),
            },
            EngineError::UpstreamTransport { endpoint, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_UNAVAILABLE",
                    format!("Upstream {} could not be reached", endpoint),
                    message,
                ),
            },
            EngineError::HttpClient { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "HTTP_CLIENT_ERROR",
                    "HTTP client initialisation failed",
                    message,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
