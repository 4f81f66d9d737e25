//! Weekly overtime tiering.
//!
//! Once every day in an ISO week has been split at the daily threshold, the
//! week's accumulated overtime is tiered:
//!
//! - **Tier 1:** the first hour of overtime in the week (paid at 1.5x)
//! - **Tier 2:** everything beyond that (paid at 2.0x)
//!
//! Tiering operates on the sum of daily overtime, never on total weekly hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default hours of weekly overtime paid at the first tier.
pub const DEFAULT_FIRST_TIER_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Default multiplier for first-tier overtime (1.5).
pub const DEFAULT_TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default multiplier for second-tier overtime (2.0).
pub const DEFAULT_TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// A week's accumulated overtime split into pay tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTiers {
    /// Overtime hours in the first tier, never above the threshold.
    pub tier_1: Decimal,
    /// Overtime hours beyond the first tier.
    pub tier_2: Decimal,
}

impl OvertimeTiers {
    /// Sum of both tiers.
    pub fn total(&self) -> Decimal {
        self.tier_1 + self.tier_2
    }
}

/// Tiers a week's accumulated daily overtime.
///
/// # Examples
///
/// ## 1 hour of weekly overtime (tier 1 only)
///
/// ```
/// use hours_engine::calculation::{tier_weekly_overtime, DEFAULT_FIRST_TIER_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let tiers = tier_weekly_overtime(Decimal::ONE, DEFAULT_FIRST_TIER_THRESHOLD);
/// assert_eq!(tiers.tier_1, Decimal::ONE);
/// assert_eq!(tiers.tier_2, Decimal::ZERO);
/// ```
///
/// ## 3 hours of weekly overtime (both tiers)
///
/// ```
/// use hours_engine::calculation::{tier_weekly_overtime, DEFAULT_FIRST_TIER_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let tiers = tier_weekly_overtime(Decimal::from(3), DEFAULT_FIRST_TIER_THRESHOLD);
/// assert_eq!(tiers.tier_1, Decimal::ONE);
/// assert_eq!(tiers.tier_2, Decimal::from(2));
/// ```
pub fn tier_weekly_overtime(overtime_hours: Decimal, first_tier_threshold: Decimal) -> OvertimeTiers {
    let overtime_hours = overtime_hours.max(Decimal::ZERO);
    let threshold = first_tier_threshold.max(Decimal::ZERO);

    if overtime_hours <= threshold {
        OvertimeTiers {
            tier_1: overtime_hours,
            tier_2: Decimal::ZERO,
        }
    } else {
        OvertimeTiers {
            tier_1: threshold,
            tier_2: overtime_hours - threshold,
        }
    }
}
