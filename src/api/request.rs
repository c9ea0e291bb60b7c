//! Request types for the TJM Engine API.
//!
//! This module defines the JSON request structures for all endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    BusinessImpact, ClientSize, DemandLevel, EducationLevel, Industry, MarketLocation,
    PortfolioStrength, RateInputs, RawFreelancerProfile, RawProspectProfile, SkillLevel,
    Specialization, UserType, WorkMode,
};

/// Request body for the `/sessions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Which side of the marketplace the session belongs to.
    pub user_type: UserType,
}

/// Request body for the `/profiles` endpoint.
///
/// Exactly one of `freelancer` and `company` must be present, matching the
/// session's user type.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProfileRequest {
    /// The session to save the profile on.
    pub session_id: Uuid,
    /// A freelancer profile, for freelancer sessions.
    #[serde(default)]
    pub freelancer: Option<RawFreelancerProfile>,
    /// A company profile, for company sessions.
    #[serde(default)]
    pub company: Option<RawProspectProfile>,
}

/// Request body for the `/estimate` endpoint.
///
/// Mirrors the calculator form: the twelve rate factors plus the accepted
/// but non-contributing work mode. When a `session_id` is given, the
/// result is recorded on that (freelancer) session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Optional session to record the result on.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Years of professional experience, 0–20 inclusive.
    pub years_experience: u8,
    /// Skill seniority level.
    pub skill_level: SkillLevel,
    /// Area of specialization.
    pub specialization: Specialization,
    /// Target market location.
    pub market_location: MarketLocation,
    /// Industry focus.
    pub industry: Industry,
    /// Whether the freelancer holds professional certifications.
    pub has_certifications: bool,
    /// Highest education level.
    pub education: EducationLevel,
    /// Market demand for the skill set.
    pub demand_level: DemandLevel,
    /// Business impact of the typical engagement.
    pub business_impact: BusinessImpact,
    /// Whether an urgency premium applies.
    pub urgency_premium: bool,
    /// Size of the typical client.
    pub client_size: ClientSize,
    /// Strength of the portfolio.
    pub portfolio_strength: PortfolioStrength,
    /// Work mode; accepted for form compatibility, carries no multiplier.
    #[serde(default)]
    pub work_mode: Option<WorkMode>,
}

impl EstimateRequest {
    /// The calculation inputs carried by this request.
    pub fn inputs(&self) -> RateInputs {
        RateInputs {
            years_experience: self.years_experience,
            skill_level: self.skill_level,
            specialization: self.specialization,
            market_location: self.market_location,
            industry: self.industry,
            has_certifications: self.has_certifications,
            education: self.education,
            demand_level: self.demand_level,
            business_impact: self.business_impact,
            urgency_premium: self.urgency_premium,
            client_size: self.client_size,
            portfolio_strength: self.portfolio_strength,
        }
    }
}

/// Request body for the `/matches` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// The session asking for matches.
    pub session_id: Uuid,
    /// The mission statement the upstream matches against.
    pub mission_statement: String,
}

/// Request body for the `/mails` endpoint.
///
/// The sender-side profile may be omitted when the session has a saved
/// profile to fall back on.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateMailRequest {
    /// The session generating the mail.
    pub session_id: Uuid,
    /// The thread this mail belongs to, keyed by the counterpart's name.
    pub thread_key: String,
    /// The freelancer side of the conversation.
    #[serde(default)]
    pub freelance: Option<RawFreelancerProfile>,
    /// The prospect side of the conversation.
    #[serde(default)]
    pub prospect: Option<RawProspectProfile>,
}

/// Request body for the `/mails/send` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMailRequest {
    /// The session sending the mail.
    pub session_id: Uuid,
    /// The thread whose current draft is being sent.
    pub thread_key: String,
}
