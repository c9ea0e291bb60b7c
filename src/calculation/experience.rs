//! Experience multiplier lookup.
//!
//! This module provides the lookup from years of professional experience
//! to the first multiplier of the daily-rate formula.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Experience multipliers for 0 through 20 years, indexed by year.
///
/// The table is non-decreasing: 0.6 at zero years, rising by 0.1 per year
/// up to 2.6 at twenty years.
const EXPERIENCE_MULTIPLIERS: [Decimal; 21] = [
    Decimal::from_parts(6, 0, 0, false, 1),
    Decimal::from_parts(7, 0, 0, false, 1),
    Decimal::from_parts(8, 0, 0, false, 1),
    Decimal::from_parts(9, 0, 0, false, 1),
    Decimal::from_parts(10, 0, 0, false, 1),
    Decimal::from_parts(11, 0, 0, false, 1),
    Decimal::from_parts(12, 0, 0, false, 1),
    Decimal::from_parts(13, 0, 0, false, 1),
    Decimal::from_parts(14, 0, 0, false, 1),
    Decimal::from_parts(15, 0, 0, false, 1),
    Decimal::from_parts(16, 0, 0, false, 1),
    Decimal::from_parts(17, 0, 0, false, 1),
    Decimal::from_parts(18, 0, 0, false, 1),
    Decimal::from_parts(19, 0, 0, false, 1),
    Decimal::from_parts(20, 0, 0, false, 1),
    Decimal::from_parts(21, 0, 0, false, 1),
    Decimal::from_parts(22, 0, 0, false, 1),
    Decimal::from_parts(23, 0, 0, false, 1),
    Decimal::from_parts(24, 0, 0, false, 1),
    Decimal::from_parts(25, 0, 0, false, 1),
    Decimal::from_parts(26, 0, 0, false, 1),
];

/// The highest number of years the experience table covers.
pub const MAX_YEARS_EXPERIENCE: u8 = 20;

/// Looks up the experience multiplier for a number of years.
///
/// Years outside the 0–20 table are invalid input, not silently clamped.
///
/// # Examples
///
/// ```
/// use tjm_engine::calculation::experience_multiplier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     experience_multiplier(4).unwrap(),
///     Decimal::from_str("1.0").unwrap()
/// );
/// assert!(experience_multiplier(25).is_err());
/// ```
pub fn experience_multiplier(years: u8) -> EngineResult<Decimal> {
    EXPERIENCE_MULTIPLIERS
        .get(years as usize)
        .copied()
        .ok_or_else(|| EngineError::InvalidInput {
            field: "years_experience".to_string(),
            message: format!(
                "must be between 0 and {}, got {}",
                MAX_YEARS_EXPERIENCE, years
            ),
        })
}
