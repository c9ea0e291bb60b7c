//! HTTP request handlers for the TJM Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{estimate_daily_rate, project_income, recommend_range};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    FreelancerProfile, ProfileData, ProspectProfile, RateEstimate, RawFreelancerProfile,
    RawProspectProfile, SessionState, UserType,
};

use super::request::{
    CreateSessionRequest, EstimateRequest, GenerateMailRequest, MatchRequest, SaveProfileRequest,
    SendMailRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CreateSessionResponse, DashboardResponse, GenerateMailResponse,
    InteractionRecord, MatchResponse, SaveProfileResponse, SendMailResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(create_session_handler))
        .route("/sessions/:session_id", delete(delete_session_handler))
        .route("/profiles", post(save_profile_handler))
        .route("/estimate", post(estimate_handler))
        .route("/matches", post(matches_handler))
        .route("/mails", post(generate_mail_handler))
        .route("/mails/send", post(send_mail_handler))
        .route("/dashboard/:session_id", get(dashboard_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /sessions.
async fn create_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let session_id = state.create_session(request.user_type);
    info!(
        correlation_id = %correlation_id,
        session_id = %session_id,
        user_type = request.user_type.as_str(),
        "Session created"
    );

    ok_json(CreateSessionResponse {
        session_id,
        user_type: request.user_type,
    })
}

/// Handler for DELETE /sessions/{id}.
async fn delete_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.remove_session(session_id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, session_id = %session_id, "Session discarded");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => error_response(error, correlation_id),
    }
}

/// Handler for POST /profiles.
async fn save_profile_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveProfileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let profile = match (request.freelancer, request.company) {
        (Some(raw), None) => ProfileData::Freelancer(raw.into()),
        (None, Some(raw)) => ProfileData::Company(raw.into()),
        _ => {
            return error_response(
                EngineError::InvalidInput {
                    field: "profile".to_string(),
                    message: "provide exactly one of 'freelancer' or 'company'".to_string(),
                },
                correlation_id,
            );
        }
    };

    let stored = profile.clone();
    let result = state.with_session(request.session_id, move |session| {
        let matches_session = matches!(
            (&profile, session.user_type),
            (ProfileData::Freelancer(_), UserType::Freelancer)
                | (ProfileData::Company(_), UserType::Company)
        );
        if !matches_session {
            return Err(EngineError::InvalidInput {
                field: "profile".to_string(),
                message: "profile type does not match the session user type".to_string(),
            });
        }
        session.profile = Some(profile);
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %request.session_id,
                "Profile saved"
            );
            ok_json(SaveProfileResponse {
                session_id: request.session_id,
                profile: stored,
            })
        }
        Err(error) => error_response(error, correlation_id),
    }
}

/// Handler for POST /estimate.
///
/// Computes the daily rate and derived figures. With a `session_id`, the
/// result is also recorded on the (freelancer) session.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let inputs = request.inputs();
    let daily_rate = match estimate_daily_rate(&inputs) {
        Ok(rate) => rate,
        Err(error) => return error_response(error, correlation_id),
    };

    if let Some(session_id) = request.session_id {
        let recorded = state.with_session(session_id, |session| {
            if session.user_type != UserType::Freelancer {
                return Err(EngineError::InvalidInput {
                    field: "session_id".to_string(),
                    message: "daily-rate estimation is available to freelancer sessions only"
                        .to_string(),
                });
            }
            session.record_estimate(daily_rate);
            Ok(())
        });
        if let Err(error) = recorded {
            return error_response(error, correlation_id);
        }
    }

    info!(
        correlation_id = %correlation_id,
        daily_rate = daily_rate,
        "Estimation completed successfully"
    );

    ok_json(RateEstimate {
        estimate_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        daily_rate,
        projection: project_income(daily_rate),
        recommended_range: recommend_range(daily_rate),
    })
}

/// Handler for POST /matches.
async fn matches_handler(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let session = match state.session(request.session_id) {
        Ok(session) => session,
        Err(error) => return error_response(error, correlation_id),
    };

    let statement = request.mission_statement.trim();
    let min_len = state.config().min_statement_len();
    if statement.chars().count() < min_len {
        return error_response(
            EngineError::InvalidInput {
                field: "mission_statement".to_string(),
                message: format!("must be at least {} characters", min_len),
            },
            correlation_id,
        );
    }

    let max_matches = state.config().max_matches();
    let response = match session.user_type {
        UserType::Freelancer => match state.client().match_companies(statement).await {
            Ok(mut companies) => {
                companies.truncate(max_matches);
                MatchResponse {
                    user_type: session.user_type,
                    count: companies.len(),
                    companies: Some(companies),
                    freelancers: None,
                }
            }
            Err(error) => return error_response(error, correlation_id),
        },
        UserType::Company => match state.client().match_freelancers(statement).await {
            Ok(mut freelancers) => {
                freelancers.truncate(max_matches);
                MatchResponse {
                    user_type: session.user_type,
                    count: freelancers.len(),
                    companies: None,
                    freelancers: Some(freelancers),
                }
            }
            Err(error) => return error_response(error, correlation_id),
        },
    };

    info!(
        correlation_id = %correlation_id,
        session_id = %request.session_id,
        matches = response.count,
        "Matching completed"
    );
    ok_json(response)
}

/// Resolves the two sides of a mail conversation.
///
/// The side the session belongs to may be omitted from the request when a
/// saved profile can stand in for it; the counterpart must be provided.
fn resolve_mail_profiles(
    session: &SessionState,
    freelance: Option<RawFreelancerProfile>,
    prospect: Option<RawProspectProfile>,
) -> EngineResult<(FreelancerProfile, ProspectProfile)> {
    let freelance = match (freelance, &session.profile) {
        (Some(raw), _) => FreelancerProfile::from(raw),
        (None, Some(ProfileData::Freelancer(saved)))
            if session.user_type == UserType::Freelancer =>
        {
            saved.clone()
        }
        (None, _) => {
            return Err(EngineError::InvalidInput {
                field: "freelance".to_string(),
                message: "no freelancer profile in the request and none saved on the session"
                    .to_string(),
            });
        }
    };

    let prospect = match (prospect, &session.profile) {
        (Some(raw), _) => ProspectProfile::from(raw),
        (None, Some(ProfileData::Company(saved))) if session.user_type == UserType::Company => {
            saved.clone()
        }
        (None, _) => {
            return Err(EngineError::InvalidInput {
                field: "prospect".to_string(),
                message: "no prospect profile in the request and none saved on the session"
                    .to_string(),
            });
        }
    };

    Ok((freelance, prospect))
}

/// Handler for POST /mails.
async fn generate_mail_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateMailRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let session = match state.session(request.session_id) {
        Ok(session) => session,
        Err(error) => return error_response(error, correlation_id),
    };

    let limit = state.config().max_generations();
    if let Err(error) = session.ensure_can_generate(&request.thread_key, limit) {
        return error_response(error, correlation_id);
    }
    let previous = session.previous_content(&request.thread_key);

    let (freelance, prospect) =
        match resolve_mail_profiles(&session, request.freelance, request.prospect) {
            Ok(profiles) => profiles,
            Err(error) => return error_response(error, correlation_id),
        };

    let email = match state
        .client()
        .generate_mail(&freelance, &prospect, session.user_type, &previous)
        .await
    {
        Ok(email) => email,
        Err(error) => return error_response(error, correlation_id),
    };

    // Re-check the limit under the lock; another request for the same
    // thread may have landed while the upstream call was in flight.
    let stored_email = email.clone();
    let thread_key = request.thread_key.clone();
    let generations = match state.with_session(request.session_id, move |session| {
        session.ensure_can_generate(&thread_key, limit)?;
        Ok(session.record_generation(&thread_key, stored_email))
    }) {
        Ok(generations) => generations,
        Err(error) => return error_response(error, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        session_id = %request.session_id,
        thread_key = %request.thread_key,
        generations = generations,
        "Mail generated"
    );

    ok_json(GenerateMailResponse {
        thread_key: request.thread_key,
        email,
        generations,
        generations_remaining: limit.saturating_sub(generations),
    })
}

/// Handler for POST /mails/send.
async fn send_mail_handler(
    State(state): State<AppState>,
    payload: Result<Json<SendMailRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (minutes, value) = state.config().savings_per_mail();
    let thread_key = request.thread_key.clone();
    let result = state.with_session(request.session_id, move |session| {
        let newly_sent = session.record_sent(&thread_key, minutes, value)?;
        Ok((
            newly_sent,
            session.total_time_saved,
            session.total_money_saved,
        ))
    });

    match result {
        Ok((sent, total_time_saved, total_money_saved)) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %request.session_id,
                thread_key = %request.thread_key,
                newly_sent = sent,
                "Mail marked as sent"
            );
            ok_json(SendMailResponse {
                thread_key: request.thread_key,
                sent,
                total_time_saved,
                total_money_saved,
            })
        }
        Err(error) => error_response(error, correlation_id),
    }
}

/// Handler for GET /dashboard/{id}.
async fn dashboard_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let session = match state.session(session_id) {
        Ok(session) => session,
        Err(error) => return error_response(error, correlation_id),
    };

    let interactions = session
        .sent_threads()
        .into_iter()
        .map(|(thread_key, sent_at)| InteractionRecord {
            thread_key: thread_key.to_string(),
            sent_at,
        })
        .collect();

    ok_json(DashboardResponse {
        session_id,
        user_type: session.user_type,
        profile_created: session.profile.is_some(),
        tjm: session.tjm,
        total_time_saved: session.total_time_saved,
        total_money_saved: session.total_money_saved,
        interactions,
    })
}
