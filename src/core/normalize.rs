//! Cycle normalization and canonical amount derivation.

use crate::currency::{self, CurrencyCode};
use crate::domain::subscription::BillingCycle;
use crate::errors::{Result, TrackerError};

/// The canonical JPY pair cached on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalAmounts {
    pub monthly_jpy: i64,
    pub yearly_jpy: i64,
}

/// Spreads a JPY amount across the monthly/yearly pair for a billing cycle.
///
/// Monthly amounts multiply out to a year; yearly amounts divide down to a
/// month; `Other` cadences behave as monthly. Each side of the pair rounds
/// to whole yen from the unrounded JPY value, ties away from zero.
pub fn to_monthly_yearly(amount_jpy: f64, cycle: BillingCycle) -> CanonicalAmounts {
    let (monthly, yearly) = match cycle {
        BillingCycle::Yearly => (amount_jpy / 12.0, amount_jpy),
        BillingCycle::Monthly | BillingCycle::Other => (amount_jpy, amount_jpy * 12.0),
    };
    CanonicalAmounts {
        monthly_jpy: monthly.round() as i64,
        yearly_jpy: yearly.round() as i64,
    }
}

/// Derives the canonical pair for one record's inputs.
///
/// Validates the amount, converts to JPY at `rate`, and normalizes across
/// the cycle. Runs on every create or edit of a canonical input and on live
/// form preview; a rate replacement alone never reaches here.
pub fn calculate_amounts(
    amount: f64,
    currency: &CurrencyCode,
    cycle: BillingCycle,
    rate: f64,
) -> Result<CanonicalAmounts> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TrackerError::InvalidAmount(amount.to_string()));
    }
    let jpy = currency::to_jpy(amount, currency, rate);
    Ok(to_monthly_yearly(jpy, cycle))
}

/// Parses a form-entered amount string.
///
/// Trims surrounding whitespace and requires a strictly positive finite
/// number; anything else is [`TrackerError::InvalidAmount`].
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(TrackerError::InvalidAmount(trimmed.to_string()));
    }
    Ok(value)
}
