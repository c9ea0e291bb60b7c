//! Error types for the TJM Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rate estimation and
//! outreach handling.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the TJM Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tjm_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An estimation input was outside its declared domain.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No session exists for the given id.
    #[error("Session not found: {session_id}")]
    SessionNotFound {
        /// The session id that was not found.
        session_id: Uuid,
    },

    /// No mail thread exists for the given key in the session.
    #[error("Mail thread not found: {thread_key}")]
    ThreadNotFound {
        /// The thread key that was not found.
        thread_key: String,
    },

    /// The per-thread mail generation limit has been exhausted.
    #[error("Generation limit of {limit} reached for thread '{thread_key}'")]
    GenerationLimitReached {
        /// The thread key that hit the limit.
        thread_key: String,
        /// The configured generation limit.
        limit: u32,
    },

    /// The upstream service answered with a non-success status.
    #[error("Upstream {endpoint} returned status {status}: {message}")]
    UpstreamStatus {
        /// The upstream endpoint that was called.
        endpoint: String,
        /// The HTTP status code returned.
        status: u16,
        /// The response body, as far as it could be read.
        message: String,
    },

    /// The upstream service could not be reached or answered garbage.
    #[error("Upstream {endpoint} request failed: {message}")]
    UpstreamTransport {
        /// The upstream endpoint that was called.
        endpoint: String,
        /// A description of the transport failure.
        message: String,
    },

    /// The HTTP client could not be initialised.
    #[error("Failed to initialise HTTP client: {message}")]
    HttpClient {
        /// A description of the initialisation failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "years_experience".to_string(),
            message: "must be between 0 and 20, got 25".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input 'years_experience': must be between 0 and 20, got 25"
        );
    }

    #[test]
    fn test_session_not_found_displays_id() {
        let error = EngineError::SessionNotFound {
            session_id: Uuid::nil(),
        };
        assert_eq!(
            error.to_string(),
            "Session not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_thread_not_found_displays_key() {
        let error = EngineError::ThreadNotFound {
            thread_key: "Acme Corp".to_string(),
        };
        assert_eq!(error.to_string(), "Mail thread not found: Acme Corp");
    }

    #[test]
    fn test_generation_limit_displays_key_and_limit() {
        let error = EngineError::GenerationLimitReached {
            thread_key: "Acme Corp".to_string(),
            limit: 3,
        };
        assert_eq!(
            error.to_string(),
            "Generation limit of 3 reached for thread 'Acme Corp'"
        );
    }

    #[test]
    fn test_upstream_status_displays_endpoint_and_status() {
        let error = EngineError::UpstreamStatus {
            endpoint: "/match_freelance".to_string(),
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream /match_freelance returned status 503: service unavailable"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
