//! Freelancer and prospect profiles.
//!
//! Profiles arrive from two places with the same loose shape: API request
//! bodies and upstream match results. Both are deserialized into raw,
//! all-optional records and converted into fully populated domain types at
//! that boundary. Missing, empty or mistyped fields get the documented
//! default values; nothing is patched after construction.

use serde::{Deserialize, Serialize};

/// A freelancer profile with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    /// Display name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// Main sector of activity.
    pub main_sector: String,
    /// Top skills, at most three in practice.
    pub top3_skills: Vec<String>,
    /// Daily rate in euros.
    pub daily_rate: u32,
    /// City, or "Remote".
    pub city: String,
    /// Whether the freelancer works remotely.
    pub remote: bool,
    /// Personal mission statement.
    pub mission_statement: String,
    /// Preferred email tone.
    pub preferred_tone: String,
    /// Preferred email style.
    pub preferred_style: String,
}

/// A prospect (company) profile with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectProfile {
    /// Company name.
    pub company: String,
    /// Company sector.
    pub sector: String,
    /// Main contact person.
    pub main_contact: String,
    /// Role of the contact person.
    pub contact_role: String,
    /// City, or "Remote".
    pub city: String,
    /// Company mission statement.
    pub mission_statement: String,
    /// Company size bracket.
    pub company_size: String,
    /// Funding stage.
    pub funding_stage: String,
    /// Ticket size class.
    pub ticket_size_class: String,
    /// Tone the company wants its outreach written in.
    pub target_tone: String,
    /// Whether the company hires remotely.
    pub remote: bool,
    /// Contact email address.
    pub email: String,
}

/// A remote-work flag as it appears in the wild: a boolean, or a string
/// such as "Yes", "true" or "Remote".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawRemoteFlag {
    /// A proper boolean.
    Bool(bool),
    /// A free-text flag.
    Text(String),
}

impl RawRemoteFlag {
    fn as_bool(&self) -> bool {
        match self {
            RawRemoteFlag::Bool(b) => *b,
            RawRemoteFlag::Text(s) => {
                matches!(s.to_lowercase().as_str(), "yes" | "true" | "remote")
            }
        }
    }
}

/// A skills field as it appears in the wild: a list, or a comma-joined
/// string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSkills {
    /// A proper list of skills.
    List(Vec<String>),
    /// A comma-joined string of skills.
    Text(String),
}

/// A daily-rate field as it appears in the wild: a number, or a list of
/// numbers (of which only the first matters).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDailyRate {
    /// A single rate.
    Number(f64),
    /// A list of rates; only the first is used.
    Many(Vec<f64>),
}

/// A freelancer profile as received from a request body or an upstream
/// match result. Every field is optional; [`FreelancerProfile::from`]
/// fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFreelancerProfile {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Professional title.
    #[serde(default)]
    pub title: Option<String>,
    /// Main sector of activity.
    #[serde(default)]
    pub main_sector: Option<String>,
    /// Top skills, as a list or a comma-joined string.
    #[serde(default)]
    pub top3_skills: Option<RawSkills>,
    /// Daily rate, as a number or a list of numbers.
    #[serde(default)]
    pub daily_rate: Option<RawDailyRate>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Remote-work flag.
    #[serde(default)]
    pub remote: Option<RawRemoteFlag>,
    /// Personal mission statement.
    #[serde(default)]
    pub mission_statement: Option<String>,
    /// Preferred email tone.
    #[serde(default)]
    pub preferred_tone: Option<String>,
    /// Preferred email style.
    #[serde(default)]
    pub preferred_style: Option<String>,
}

/// A prospect profile as received from a request body or an upstream match
/// result. Every field is optional; [`ProspectProfile::from`] fills the
/// gaps. `preferred_tone` is accepted as a legacy spelling of
/// `target_tone`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProspectProfile {
    /// Company name.
    #[serde(default)]
    pub company: Option<String>,
    /// Company sector.
    #[serde(default)]
    pub sector: Option<String>,
    /// Main contact person.
    #[serde(default)]
    pub main_contact: Option<String>,
    /// Role of the contact person.
    #[serde(default)]
    pub contact_role: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Company mission statement.
    #[serde(default)]
    pub mission_statement: Option<String>,
    /// Company size bracket.
    #[serde(default)]
    pub company_size: Option<String>,
    /// Funding stage.
    #[serde(default)]
    pub funding_stage: Option<String>,
    /// Ticket size class.
    #[serde(default)]
    pub ticket_size_class: Option<String>,
    /// Tone the company wants its outreach written in.
    #[serde(default)]
    pub target_tone: Option<String>,
    /// Legacy spelling of `target_tone`, used when the former is absent.
    #[serde(default)]
    pub preferred_tone: Option<String>,
    /// Remote-hiring flag.
    #[serde(default)]
    pub remote: Option<RawRemoteFlag>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn default_skills() -> Vec<String> {
    vec![
        "Software Development".to_string(),
        "Data Analysis".to_string(),
        "Project Management".to_string(),
    ]
}

const DEFAULT_DAILY_RATE: u32 = 500;

impl From<RawFreelancerProfile> for FreelancerProfile {
    fn from(raw: RawFreelancerProfile) -> Self {
        let top3_skills = match raw.top3_skills {
            Some(RawSkills::List(skills)) if !skills.is_empty() => skills,
            Some(RawSkills::Text(joined)) if !joined.trim().is_empty() => joined
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => default_skills(),
        };

        let daily_rate = match raw.daily_rate {
            Some(RawDailyRate::Number(n)) if n >= 0.0 => n as u32,
            Some(RawDailyRate::Many(rates)) => rates
                .first()
                .copied()
                .filter(|n| *n >= 0.0)
                .map(|n| n as u32)
                .unwrap_or(DEFAULT_DAILY_RATE),
            _ => DEFAULT_DAILY_RATE,
        };

        FreelancerProfile {
            name: non_empty(raw.name).unwrap_or_else(|| "A Professional Freelancer".to_string()),
            title: non_empty(raw.title).unwrap_or_else(|| "Freelancer".to_string()),
            main_sector: non_empty(raw.main_sector).unwrap_or_else(|| "General Tech".to_string()),
            top3_skills,
            daily_rate,
            city: non_empty(raw.city).unwrap_or_else(|| "Remote".to_string()),
            remote: raw.remote.map(|r| r.as_bool()).unwrap_or(false),
            mission_statement: non_empty(raw.mission_statement).unwrap_or_else(|| {
                "Experienced professional ready to contribute to innovative projects.".to_string()
            }),
            preferred_tone: non_empty(raw.preferred_tone)
                .unwrap_or_else(|| "Professional".to_string()),
            preferred_style: non_empty(raw.preferred_style)
                .unwrap_or_else(|| "Storytelling".to_string()),
        }
    }
}

impl From<RawProspectProfile> for ProspectProfile {
    fn from(raw: RawProspectProfile) -> Self {
        // target_tone wins over the legacy preferred_tone spelling.
        let target_tone = non_empty(raw.target_tone)
            .or_else(|| non_empty(raw.preferred_tone))
            .unwrap_or_else(|| "Professional".to_string());

        ProspectProfile {
            company: non_empty(raw.company).unwrap_or_else(|| "A Leading Company".to_string()),
            sector: non_empty(raw.sector).unwrap_or_else(|| "Tech / SaaS".to_string()),
            main_contact: non_empty(raw.main_contact)
                .unwrap_or_else(|| "Valued Partner".to_string()),
            contact_role: non_empty(raw.contact_role)
                .unwrap_or_else(|| "Hiring Manager".to_string()),
            city: non_empty(raw.city).unwrap_or_else(|| "Remote".to_string()),
            mission_statement: non_empty(raw.mission_statement).unwrap_or_else(|| {
                "Driving innovation and delivering value to clients.".to_string()
            }),
            company_size: non_empty(raw.company_size).unwrap_or_else(|| "Mid-size".to_string()),
            funding_stage: non_empty(raw.funding_stage)
                .unwrap_or_else(|| "Undisclosed".to_string()),
            ticket_size_class: non_empty(raw.ticket_size_class)
                .unwrap_or_else(|| "Medium".to_string()),
            target_tone,
            remote: raw.remote.map(|r| r.as_bool()).unwrap_or(false),
            email: non_empty(raw.email).unwrap_or_else(|| "info@example.com".to_string()),
        }
    }
}
