//! The process-wide USD to JPY exchange rate setting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate applied when no setting has ever been stored.
pub const DEFAULT_USD_JPY: f64 = 150.0;

/// Singleton exchange-rate setting of a subscription book.
///
/// Manual entry and fetched market rates replace the setting wholesale and
/// are indistinguishable afterwards. Replacing the rate never touches the
/// canonical pairs already cached on records; each record picks the new rate
/// up at its next edit of an amount, currency, or cycle. Staleness between
/// the two is intentional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateSetting {
    pub usd_to_jpy: f64,
    pub last_updated: DateTime<Utc>,
}

impl RateSetting {
    pub fn new(usd_to_jpy: f64) -> Self {
        Self {
            usd_to_jpy,
            last_updated: Utc::now(),
        }
    }
}

impl Default for RateSetting {
    fn default() -> Self {
        Self::new(DEFAULT_USD_JPY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_150() {
        assert_eq!(RateSetting::default().usd_to_jpy, DEFAULT_USD_JPY);
    }

    #[test]
    fn replacement_carries_a_fresh_timestamp() {
        let old = RateSetting::new(150.0);
        let new = RateSetting::new(155.5);
        assert!(new.last_updated >= old.last_updated);
        assert_eq!(new.usd_to_jpy, 155.5);
    }
}
