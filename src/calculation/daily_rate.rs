//! Daily-rate estimation.
//!
//! This module composes the multiplier tables into the daily-rate formula:
//! a base of 300 scaled by every factor in a fixed order, rounded to the
//! nearest multiple of 25.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::RateInputs;

use super::experience::experience_multiplier;
use super::multipliers::{
    business_impact_multiplier, client_size_multiplier, demand_multiplier, education_multiplier,
    industry_multiplier, location_multiplier, portfolio_multiplier, skill_multiplier,
    specialization_multiplier, CERTIFICATION_MULTIPLIER, URGENCY_MULTIPLIER,
};

/// The base daily rate before any multiplier is applied, in euros.
pub const BASE_DAILY_RATE: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Rates are quoted in steps of 25 euros.
pub const RATE_STEP: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Rounds a raw rate to the nearest multiple of [`RATE_STEP`].
///
/// Midpoints round half-to-even: 287.50 and 312.50 both land on 300.
fn round_to_step(rate: Decimal) -> Decimal {
    (rate / RATE_STEP).round() * RATE_STEP
}

/// Estimates the recommended daily rate for the given inputs.
///
/// Starting from [`BASE_DAILY_RATE`], every factor is applied in the order
/// of the formula: experience, skill, specialization, location, industry,
/// certifications, education, demand, business impact, urgency, client
/// size, portfolio. The result is rounded to the nearest multiple of 25
/// and returned as an integer amount in euros.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `years_experience` is outside
/// the 0–20 table. The categorical fields are closed enums and cannot be
/// out of domain here.
///
/// # Examples
///
/// ```
/// use tjm_engine::calculation::estimate_daily_rate;
/// use tjm_engine::models::*;
///
/// let inputs = RateInputs {
///     years_experience: 4,
///     skill_level: SkillLevel::MidLevel,
///     specialization: Specialization::GeneralDevelopment,
///     market_location: MarketLocation::FranceOtherCities,
///     industry: Industry::General,
///     has_certifications: false,
///     education: EducationLevel::BachelorsDegree,
///     demand_level: DemandLevel::Medium,
///     business_impact: BusinessImpact::Medium,
///     urgency_premium: false,
///     client_size: ClientSize::MidSizeCompany,
///     portfolio_strength: PortfolioStrength::Good,
/// };
/// assert_eq!(estimate_daily_rate(&inputs).unwrap(), 300);
/// ```
pub fn estimate_daily_rate(inputs: &RateInputs) -> EngineResult<u32> {
    let mut rate = BASE_DAILY_RATE;

    rate *= experience_multiplier(inputs.years_experience)?;
    rate *= skill_multiplier(inputs.skill_level);
    rate *= specialization_multiplier(inputs.specialization);
    rate *= location_multiplier(inputs.market_location);
    rate *= industry_multiplier(inputs.industry);

    if inputs.has_certifications {
        rate *= CERTIFICATION_MULTIPLIER;
    }

    rate *= education_multiplier(inputs.education);
    rate *= demand_multiplier(inputs.demand_level);
    rate *= business_impact_multiplier(inputs.business_impact);

    if inputs.urgency_premium {
        rate *= URGENCY_MULTIPLIER;
    }

    rate *= client_size_multiplier(inputs.client_size);
    rate *= portfolio_multiplier(inputs.portfolio_strength);

    round_to_step(rate)
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("rounded rate {} does not fit an integer amount", rate),
        })
}
