//! Matching calls against the upstream API.
//!
//! Freelancers are matched against companies and companies against
//! freelancers; the upstream decides relevance from the mission statement
//! alone. Match results arrive as loose dictionaries and are converted
//! into domain profiles at this boundary.

use crate::error::EngineResult;
use crate::models::{
    FreelancerProfile, ProspectProfile, RawFreelancerProfile, RawProspectProfile, UserType,
};

use super::OutreachClient;

/// Endpoint that matches a freelancer's statement against companies.
pub const MATCH_FREELANCE_ENDPOINT: &str = "/match_freelance";

/// Endpoint that matches a company's statement against freelancers.
pub const MATCH_PROSPECT_ENDPOINT: &str = "/match_prospect";

/// Selects the matching endpoint for a user type.
pub fn match_endpoint(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Freelancer => MATCH_FREELANCE_ENDPOINT,
        UserType::Company => MATCH_PROSPECT_ENDPOINT,
    }
}

impl OutreachClient {
    /// Finds companies matching a freelancer's mission statement.
    pub async fn match_companies(
        &self,
        mission_statement: &str,
    ) -> EngineResult<Vec<ProspectProfile>> {
        let raw: Vec<RawProspectProfile> = self
            .get_json(
                MATCH_FREELANCE_ENDPOINT,
                &[("mission_statement", mission_statement)],
            )
            .await?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    /// Finds freelancers matching a company's mission statement.
    pub async fn match_freelancers(
        &self,
        mission_statement: &str,
    ) -> EngineResult<Vec<FreelancerProfile>> {
        let raw: Vec<RawFreelancerProfile> = self
            .get_json(
                MATCH_PROSPECT_ENDPOINT,
                &[("mission_statement", mission_statement)],
            )
            .await?;
        Ok(raw.into_iter().map(Into::into).collect())
    }
}
