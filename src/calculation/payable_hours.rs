//! Payable hours calculation.
//!
//! Applies the policy's tier multipliers to a [`WeekBucket`] to obtain
//! payable-equivalent hours, and optionally a pay amount for an hourly rate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::OvertimePolicy;
use crate::models::WeekBucket;

/// A week's hours weighted by their pay multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayableHours {
    /// Regular hours, paid at 1x.
    pub regular: Decimal,
    /// First-tier overtime hours times the first-tier multiplier.
    pub tier_1: Decimal,
    /// Second-tier overtime hours times the second-tier multiplier.
    pub tier_2: Decimal,
    /// Sum of the three weighted components.
    pub total: Decimal,
}

impl PayableHours {
    /// Gross pay for the week at the given hourly rate, rounded to cents.
    ///
    /// Returns `None` if the product does not fit in a [`Decimal`].
    ///
    /// # Example
    ///
    /// ```
    /// use hours_engine::calculation::{calculate_payable_hours, summarize_weeks};
    /// use hours_engine::config::OvertimePolicy;
    /// use hours_engine::models::JobRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = OvertimePolicy::default();
    /// let records = vec![JobRecord::new("2026-01-12", Some("07:00"), Some("18:00"))];
    /// let week = &summarize_weeks(&records, &policy).weeks[0];
    ///
    /// // 8h + 1h x 1.5 + 2h x 2.0 = 13.5 payable hours
    /// let payable = calculate_payable_hours(week, &policy);
    /// assert_eq!(payable.total, Decimal::new(135, 1));
    /// assert_eq!(payable.amount(Decimal::new(2000, 2)), Some(Decimal::new(27000, 2)));
    /// ```
    pub fn amount(&self, hourly_rate: Decimal) -> Option<Decimal> {
        self.total
            .checked_mul(hourly_rate)
            .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Weights a week bucket's hours by the policy's tier multipliers.
///
/// Products and sums saturate at [`Decimal::MAX`] for policies that were
/// never validated.
pub fn calculate_payable_hours(bucket: &WeekBucket, policy: &OvertimePolicy) -> PayableHours {
    let regular = bucket.regular_hours;
    let tier_1 = bucket.overtime_15_hours.saturating_mul(policy.tier_1_multiplier);
    let tier_2 = bucket.overtime_20_hours.saturating_mul(policy.tier_2_multiplier);

    PayableHours {
        regular,
        tier_1,
        tier_2,
        total: regular.saturating_add(tier_1).saturating_add(tier_2),
    }
}
