//! Configuration types for the overtime policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files or supplied inline by callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_FIRST_TIER_THRESHOLD, DEFAULT_TIER_1_MULTIPLIER,
    DEFAULT_TIER_2_MULTIPLIER,
};
use crate::error::{EngineError, EngineResult};

/// How raw per-record durations are rounded before they are summed.
///
/// Rounding always happens per record, ahead of the daily cap and the
/// weekly tiering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourRounding {
    /// Durations are kept to the minute.
    #[default]
    Exact,
    /// Durations are rounded to the nearest 15 minutes.
    QuarterHour,
}

impl HourRounding {
    /// Applies the rounding to a whole number of minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_engine::config::HourRounding;
    ///
    /// assert_eq!(HourRounding::Exact.apply_minutes(52), 52);
    /// assert_eq!(HourRounding::QuarterHour.apply_minutes(52), 45);
    /// assert_eq!(HourRounding::QuarterHour.apply_minutes(53), 60);
    /// ```
    pub fn apply_minutes(self, minutes: i64) -> i64 {
        match self {
            HourRounding::Exact => minutes,
            HourRounding::QuarterHour => {
                if minutes <= 0 {
                    0
                } else {
                    ((minutes + 7) / 15) * 15
                }
            }
        }
    }
}

/// The overtime policy applied by the aggregation pipeline.
///
/// Every threshold and multiplier used by the engine lives here, so a policy
/// change never needs to touch the call sites. Missing fields fall back to
/// the defaults (8h daily threshold, 1h first tier, 1.5x and 2.0x).
///
/// # Example
///
/// ```
/// use hours_engine::config::{HourRounding, OvertimePolicy};
/// use rust_decimal::Decimal;
///
/// let policy = OvertimePolicy::default();
/// assert_eq!(policy.daily_threshold_hours, Decimal::from(8));
/// assert_eq!(policy.first_tier_threshold_hours, Decimal::from(1));
/// assert_eq!(policy.rounding, HourRounding::Exact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimePolicy {
    /// Hours per day paid at the regular rate before daily overtime starts.
    pub daily_threshold_hours: Decimal,
    /// Hours of accumulated weekly overtime paid at the first tier.
    pub first_tier_threshold_hours: Decimal,
    /// Pay multiplier for first-tier overtime.
    pub tier_1_multiplier: Decimal,
    /// Pay multiplier for overtime beyond the first tier.
    pub tier_2_multiplier: Decimal,
    /// Per-record duration rounding.
    pub rounding: HourRounding,
}

const MAX_DAILY_THRESHOLD: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
const MAX_FIRST_TIER_THRESHOLD: Decimal = Decimal::from_parts(168, 0, 0, false, 0);
const MAX_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            daily_threshold_hours: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            first_tier_threshold_hours: DEFAULT_FIRST_TIER_THRESHOLD,
            tier_1_multiplier: DEFAULT_TIER_1_MULTIPLIER,
            tier_2_multiplier: DEFAULT_TIER_2_MULTIPLIER,
            rounding: HourRounding::Exact,
        }
    }
}

impl OvertimePolicy {
    /// Checks that every threshold and multiplier lies within its accepted range.
    ///
    /// The daily threshold must be between 0 and 24 hours, the first-tier
    /// threshold between 0 and 168 hours, and each multiplier between 1 and 10.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_engine::config::OvertimePolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let mut policy = OvertimePolicy::default();
    /// assert!(policy.validate().is_ok());
    ///
    /// policy.daily_threshold_hours = Decimal::from(-1);
    /// assert!(policy.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let bounds = [
            ("daily_threshold_hours", self.daily_threshold_hours, Decimal::ZERO, MAX_DAILY_THRESHOLD),
            (
                "first_tier_threshold_hours",
                self.first_tier_threshold_hours,
                Decimal::ZERO,
                MAX_FIRST_TIER_THRESHOLD,
            ),
            ("tier_1_multiplier", self.tier_1_multiplier, Decimal::ONE, MAX_MULTIPLIER),
            ("tier_2_multiplier", self.tier_2_multiplier, Decimal::ONE, MAX_MULTIPLIER),
        ];

        for (field, value, min, max) in bounds {
            if value < min || value > max {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must be between {} and {}, got {}", min, max, value),
                });
            }
        }

        Ok(())
    }
}

/// Descriptive metadata about a policy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable policy name.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
}

/// The structure of a `policy.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// The overtime policy itself.
    #[serde(default)]
    pub overtime: OvertimePolicy,
}
