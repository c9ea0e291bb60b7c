//! HTTP API module for the TJM Engine.
//!
//! This module provides the REST endpoints for sessions, profiles,
//! daily-rate estimation, matching, mail generation and the dashboard.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateSessionRequest, EstimateRequest, GenerateMailRequest, MatchRequest, SaveProfileRequest,
    SendMailRequest,
};
pub use response::{
    ApiError, CreateSessionResponse, DashboardResponse, GenerateMailResponse, InteractionRecord,
    MatchResponse, SaveProfileResponse, SendMailResponse,
};
pub use state::AppState;
