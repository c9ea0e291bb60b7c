//! Configuration types for the TJM Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Service configuration from service.yaml.
///
/// Identifies the deployment and points at the upstream matching and
/// mail-generation API.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Human-readable service name.
    pub name: String,
    /// Configuration version or effective date.
    pub version: String,
    /// Base URL of the upstream matching / mail-generation API.
    pub base_url: String,
    /// Timeout for upstream requests, in seconds.
    pub timeout_secs: u64,
}

/// Per-mail savings credited to a session when a mail is sent.
///
/// The figures come from market research on personalized email drafting
/// time and copywriting cost.
#[derive(Debug, Clone, Deserialize)]
pub struct SavingsConfig {
    /// Prospecting minutes saved per sent mail.
    pub minutes_per_mail: u32,
    /// Copywriting value saved per sent mail, in euros.
    pub value_per_mail: Decimal,
}

/// Outreach configuration from outreach.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachConfig {
    /// Maximum number of matches returned to a session.
    pub max_matches: usize,
    /// Maximum mail generations per thread.
    pub max_generations: u32,
    /// Minimum length of a mission statement, in characters.
    pub min_statement_len: usize,
    /// Savings credited per sent mail.
    pub savings: SavingsConfig,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    service: ServiceConfig,
    outreach: OutreachConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(service: ServiceConfig, outreach: OutreachConfig) -> Self {
        Self { service, outreach }
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the outreach configuration.
    pub fn outreach(&self) -> &OutreachConfig {
        &self.outreach
    }
}
