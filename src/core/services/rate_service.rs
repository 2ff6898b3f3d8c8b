//! Replacement of the book's exchange-rate setting.

use crate::domain::book::SubscriptionBook;
use crate::domain::rate::RateSetting;
use crate::errors::{Result, TrackerError};

/// Manages the singleton USD to JPY rate.
pub struct RateService;

impl RateService {
    /// Replaces the rate setting wholesale with a fresh timestamp.
    ///
    /// Manual entry and fetched market rates both land here and are treated
    /// identically. Existing cached pairs are deliberately left alone; each
    /// record picks the new rate up at its next canonical-input edit.
    pub fn set_rate(book: &mut SubscriptionBook, usd_to_jpy: f64) -> Result<()> {
        if !usd_to_jpy.is_finite() || usd_to_jpy <= 0.0 {
            return Err(TrackerError::InvalidRate(usd_to_jpy.to_string()));
        }
        book.rate = RateSetting::new(usd_to_jpy);
        book.touch();
        Ok(())
    }

    /// Current rate applied to USD conversions.
    pub fn current(book: &SubscriptionBook) -> f64 {
        book.rate.usd_to_jpy
    }
}
