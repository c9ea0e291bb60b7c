//! Mail generation calls against the upstream API.
//!
//! The upstream copywriter takes both profiles, the sender side and the
//! previous draft (for regenerations) and returns the email text. The
//! freelancer side of the payload has two legacy wire quirks: skills are
//! a comma-joined string and the remote flag is spelled "Yes"/"No".

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::EngineResult;
use crate::models::{FreelancerProfile, ProspectProfile, UserType};

use super::OutreachClient;

/// Endpoint generating a mail sent by a freelancer to a company.
pub const MAIL_FREELANCE_ENDPOINT: &str = "/generate_mail_freelance";

/// Endpoint generating a mail sent by a company to a freelancer.
pub const MAIL_PROSPECT_ENDPOINT: &str = "/generate_mail_prospect";

/// Selects the mail-generation endpoint for a sender type.
pub fn mail_endpoint(sender_type: UserType) -> &'static str {
    match sender_type {
        UserType::Freelancer => MAIL_FREELANCE_ENDPOINT,
        UserType::Company => MAIL_PROSPECT_ENDPOINT,
    }
}

/// Builds the wire payload for a mail-generation request.
pub fn build_mail_payload(
    freelance: &FreelancerProfile,
    prospect: &ProspectProfile,
    sender_type: UserType,
    previous_mail_content: &str,
) -> Value {
    json!({
        "freelance": freelancer_wire(freelance),
        "prospect": prospect,
        "sender_type": sender_type.as_str(),
        "previous_mail_content": previous_mail_content,
    })
}

/// The freelancer profile as the upstream expects it.
fn freelancer_wire(profile: &FreelancerProfile) -> Value {
    json!({
        "name": profile.name,
        "title": profile.title,
        "main_sector": profile.main_sector,
        "top3_skills": profile.top3_skills.join(", "),
        "daily_rate": profile.daily_rate,
        "city": profile.city,
        "remote": if profile.remote { "Yes" } else { "No" },
        "mission_statement": profile.mission_statement,
        "preferred_tone": profile.preferred_tone,
        "preferred_style": profile.preferred_style,
    })
}

#[derive(Debug, Deserialize)]
struct MailGenerationResponse {
    #[serde(default)]
    email: String,
}

impl OutreachClient {
    /// Generates an outreach mail via the upstream API.
    ///
    /// `previous_mail_content` carries the current draft when regenerating,
    /// and is empty for the first generation of a thread.
    pub async fn generate_mail(
        &self,
        freelance: &FreelancerProfile,
        prospect: &ProspectProfile,
        sender_type: UserType,
        previous_mail_content: &str,
    ) -> EngineResult<String> {
        let payload = build_mail_payload(freelance, prospect, sender_type, previous_mail_content);
        let response: MailGenerationResponse = self
            .post_json(mail_endpoint(sender_type), &payload)
            .await?;
        Ok(response.email)
    }
}
