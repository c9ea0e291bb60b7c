//! Rate estimate output models.
//!
//! This module contains the [`RateEstimate`] type returned by the
//! `/estimate` endpoint, together with the derived income figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recommended rate band around the calculated daily rate.
///
/// The minimum is meant for long-term engagements and relationship
/// building; the maximum for urgent or high-value work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRange {
    /// Lower bound of the recommended band, in euros per day.
    pub minimum: u32,
    /// Upper bound of the recommended band, in euros per day.
    pub maximum: u32,
}

/// Projected income derived from a daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProjection {
    /// Monthly income assuming 20 billable days.
    pub monthly: u32,
    /// Yearly income assuming 11 working months.
    pub yearly: u32,
}

/// The complete result of a daily-rate estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEstimate {
    /// Unique identifier for this estimate.
    pub estimate_id: Uuid,
    /// When the estimate was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the estimate.
    pub engine_version: String,
    /// The recommended daily rate in euros, a multiple of 25.
    pub daily_rate: u32,
    /// Income projection derived from the daily rate.
    pub projection: IncomeProjection,
    /// Recommended rate band around the daily rate.
    pub recommended_range: RateRange,
}
