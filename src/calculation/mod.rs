//! Calculation logic for the TJM Engine.
//!
//! This module contains the daily-rate formula: the experience lookup
//! table, the categorical multiplier tables, the composition into a
//! rounded daily rate, and the derived income projection.

mod daily_rate;
mod experience;
mod multipliers;
mod projection;

pub use daily_rate::{BASE_DAILY_RATE, RATE_STEP, estimate_daily_rate};
pub use experience::{MAX_YEARS_EXPERIENCE, experience_multiplier};
pub use multipliers::{
    CERTIFICATION_MULTIPLIER, URGENCY_MULTIPLIER, business_impact_multiplier,
    client_size_multiplier, demand_multiplier, education_multiplier, industry_multiplier,
    location_multiplier, portfolio_multiplier, skill_multiplier, specialization_multiplier,
};
pub use projection::{
    BILLABLE_DAYS_PER_MONTH, WORKING_MONTHS_PER_YEAR, project_income, recommend_range,
};
