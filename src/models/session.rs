//! Session state for the outreach workflow.
//!
//! The original product kept counters and mail state in ambient globals;
//! here every piece of per-user state lives in an explicit [`SessionState`]
//! owned by the API layer. Sessions are created on demand, mutated only
//! through handlers and discarded on delete.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{FreelancerProfile, ProspectProfile};

/// Which side of the marketplace a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// A freelancer looking for companies.
    Freelancer,
    /// A company looking for freelancers.
    Company,
}

impl UserType {
    /// The wire spelling used by the upstream services.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Freelancer => "freelancer",
            UserType::Company => "company",
        }
    }
}

/// The profile saved on a session, matching its user type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "profile", rename_all = "snake_case")]
pub enum ProfileData {
    /// A freelancer profile.
    Freelancer(FreelancerProfile),
    /// A company profile.
    Company(ProspectProfile),
}

/// One outreach mail conversation with a single counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailThread {
    /// The most recently generated mail content.
    pub content: String,
    /// How many times a mail has been generated for this thread.
    pub generations: u32,
    /// Whether the mail has been sent.
    pub sent: bool,
    /// When the mail was sent, if it was.
    pub sent_at: Option<DateTime<Utc>>,
}

/// All state held for one user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Which side of the marketplace this session belongs to.
    pub user_type: UserType,
    /// The saved profile, once one has been submitted.
    pub profile: Option<ProfileData>,
    /// The most recently calculated daily rate, if any.
    pub tjm: Option<u32>,
    /// Total prospecting time saved, in minutes.
    pub total_time_saved: u32,
    /// Total copywriting money saved, in euros.
    pub total_money_saved: Decimal,
    /// Mail threads keyed by the counterpart's name.
    pub threads: BTreeMap<String, MailThread>,
}

impl SessionState {
    /// Creates a fresh session for the given user type.
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            profile: None,
            tjm: None,
            total_time_saved: 0,
            total_money_saved: Decimal::ZERO,
            threads: BTreeMap::new(),
        }
    }

    /// Records a calculated daily rate on the session and, when a
    /// freelancer profile is saved, keeps its `daily_rate` in sync.
    pub fn record_estimate(&mut self, daily_rate: u32) {
        self.tjm = Some(daily_rate);
        if let Some(ProfileData::Freelancer(profile)) = self.profile.as_mut() {
            profile.daily_rate = daily_rate;
        }
    }

    /// Returns the current content of a thread, or an empty string if the
    /// thread has not been generated yet.
    pub fn previous_content(&self, thread_key: &str) -> String {
        self.threads
            .get(thread_key)
            .map(|t| t.content.clone())
            .unwrap_or_default()
    }

    /// Checks that a thread has generations left under the given limit.
    pub fn ensure_can_generate(&self, thread_key: &str, limit: u32) -> EngineResult<()> {
        let generations = self
            .threads
            .get(thread_key)
            .map(|t| t.generations)
            .unwrap_or(0);
        if generations >= limit {
            return Err(EngineError::GenerationLimitReached {
                thread_key: thread_key.to_string(),
                limit,
            });
        }
        Ok(())
    }

    /// Stores freshly generated content on a thread and bumps its
    /// generation count. A regenerated mail is no longer considered sent.
    pub fn record_generation(&mut self, thread_key: &str, content: String) -> u32 {
        let thread = self.threads.entry(thread_key.to_string()).or_default();
        thread.content = content;
        thread.generations += 1;
        thread.sent = false;
        thread.sent_at = None;
        thread.generations
    }

    /// Marks a thread as sent and credits the savings counters.
    ///
    /// Returns `true` if the thread transitioned to sent, `false` if it was
    /// already sent (in which case the counters are left untouched).
    pub fn record_sent(
        &mut self,
        thread_key: &str,
        minutes_per_mail: u32,
        value_per_mail: Decimal,
    ) -> EngineResult<bool> {
        let thread =
            self.threads
                .get_mut(thread_key)
                .ok_or_else(|| EngineError::ThreadNotFound {
                    thread_key: thread_key.to_string(),
                })?;

        if thread.sent {
            return Ok(false);
        }

        thread.sent = true;
        thread.sent_at = Some(Utc::now());
        self.total_time_saved += minutes_per_mail;
        self.total_money_saved += value_per_mail;
        Ok(true)
    }

    /// The sent threads, oldest first.
    pub fn sent_threads(&self) -> Vec<(&str, DateTime<Utc>)> {
        let mut sent: Vec<(&str, DateTime<Utc>)> = self
            .threads
            .iter()
            .filter_map(|(key, thread)| thread.sent_at.map(|at| (key.as_str(), at)))
            .collect();
        sent.sort_by_key(|(_, at)| *at);
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_session_starts_empty() {
        let session = SessionState::new(UserType::Freelancer);
        assert_eq!(session.user_type, UserType::Freelancer);
        assert!(session.profile.is_none());
        assert!(session.tjm.is_none());
        assert_eq!(session.total_time_saved, 0);
        assert_eq!(session.total_money_saved, Decimal::ZERO);
        assert!(session.threads.is_empty());
    }

    #[test]
    fn test_record_estimate_updates_freelancer_profile_rate() {
        let mut session = SessionState::new(UserType::Freelancer);
        session.profile = Some(ProfileData::Freelancer(
            crate::models::RawFreelancerProfile::default().into(),
        ));

        session.record_estimate(825);

        assert_eq!(session.tjm, Some(825));
        match session.profile.unwrap() {
            ProfileData::Freelancer(profile) => assert_eq!(profile.daily_rate, 825),
            other => panic!("Expected freelancer profile, got {:?}", other),
        }
    }

    #[test]
    fn test_generation_limit_enforced() {
        let mut session = SessionState::new(UserType::Freelancer);

        for i in 1..=3 {
            session.ensure_can_generate("Acme", 3).unwrap();
            let count = session.record_generation("Acme", format!("draft {}", i));
            assert_eq!(count, i);
        }

        let result = session.ensure_can_generate("Acme", 3);
        match result.unwrap_err() {
            EngineError::GenerationLimitReached { thread_key, limit } => {
                assert_eq!(thread_key, "Acme");
                assert_eq!(limit, 3);
            }
            other => panic!("Expected GenerationLimitReached, got {:?}", other),
        }
    }

    #[test]
    fn test_regeneration_clears_sent_flag() {
        let mut session = SessionState::new(UserType::Freelancer);
        session.record_generation("Acme", "first draft".to_string());
        session.record_sent("Acme", 5, dec("20")).unwrap();
        assert!(session.threads["Acme"].sent);

        session.record_generation("Acme", "second draft".to_string());
        assert!(!session.threads["Acme"].sent);
        assert!(session.threads["Acme"].sent_at.is_none());
    }

    #[test]
    fn test_record_sent_credits_counters_once() {
        let mut session = SessionState::new(UserType::Company);
        session.record_generation("Nadia", "a draft".to_string());

        assert!(session.record_sent("Nadia", 5, dec("20")).unwrap());
        assert_eq!(session.total_time_saved, 5);
        assert_eq!(session.total_money_saved, dec("20"));

        // Sending again is a no-op.
        assert!(!session.record_sent("Nadia", 5, dec("20")).unwrap());
        assert_eq!(session.total_time_saved, 5);
        assert_eq!(session.total_money_saved, dec("20"));
    }

    #[test]
    fn test_record_sent_unknown_thread_errors() {
        let mut session = SessionState::new(UserType::Freelancer);
        let result = session.record_sent("Nowhere Inc", 5, dec("20"));
        match result.unwrap_err() {
            EngineError::ThreadNotFound { thread_key } => {
                assert_eq!(thread_key, "Nowhere Inc");
            }
            other => panic!("Expected ThreadNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_previous_content_empty_for_new_thread() {
        let session = SessionState::new(UserType::Freelancer);
        assert_eq!(session.previous_content("Acme"), "");
    }

    #[test]
    fn test_sent_threads_only_lists_sent() {
        let mut session = SessionState::new(UserType::Freelancer);
        session.record_generation("Acme", "draft".to_string());
        session.record_generation("Globex", "draft".to_string());
        session.record_sent("Globex", 5, dec("20")).unwrap();

        let sent = session.sent_threads();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Globex");
    }

    #[test]
    fn test_user_type_wire_spelling() {
        assert_eq!(UserType::Freelancer.as_str(), "freelancer");
        assert_eq!(UserType::Company.as_str(), "company");
        assert_eq!(
            serde_json::to_string(&UserType::Freelancer).unwrap(),
            "\"freelancer\""
        );
    }
}
