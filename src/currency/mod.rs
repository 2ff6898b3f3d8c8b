//! Currency tagging, JPY conversion, and display formatting.

use serde::{Deserialize, Serialize};

/// ISO 4217-style tag attached to a subscription's original amount.
///
/// `JPY` and `USD` are the recognized codes; anything else is kept verbatim
/// and treated as already JPY-denominated wherever a conversion happens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn jpy() -> Self {
        Self::new("JPY")
    }

    pub fn usd() -> Self {
        Self::new("USD")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_jpy(&self) -> bool {
        self.0 == "JPY"
    }

    pub fn is_usd(&self) -> bool {
        self.0 == "USD"
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("JPY")
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts `amount` in `currency` to JPY using `rate` (yen per dollar).
///
/// JPY passes through unchanged; USD multiplies by the rate. Every other
/// code also passes through unchanged: unsupported currencies are treated as
/// already-JPY rather than rejected, so callers must not rely on validation
/// having happened here. Numeric validation of `amount` and `rate` is the
/// caller's responsibility.
pub fn to_jpy(amount: f64, currency: &CurrencyCode, rate: f64) -> f64 {
    if currency.is_usd() {
        amount * rate
    } else {
        amount
    }
}

/// Glyph used when rendering an amount in the given currency.
pub fn symbol_for(currency: &CurrencyCode) -> &'static str {
    if currency.is_usd() {
        "$"
    } else {
        "¥"
    }
}

/// Formats a JPY amount for display: whole yen (ties round away from zero),
/// comma-grouped thousands, yen glyph.
pub fn format_jpy(amount: f64) -> String {
    let yen = amount.round() as i64;
    format!("¥{}", group_signed(yen))
}

/// Formats an amount in its original currency.
///
/// USD renders dollar-prefixed with grouped thousands and up to two
/// fractional digits, trailing zeros trimmed. JPY and unrecognized codes
/// render as whole yen, consistent with the converter's pass-through policy.
pub fn format_original(amount: f64, currency: &CurrencyCode) -> String {
    if !currency.is_usd() {
        return format_jpy(amount);
    }
    let cents = (amount * 100.0).round() as i64;
    let dollars = cents / 100;
    let remainder = (cents % 100).abs();
    let mut body = group_signed(dollars);
    if dollars == 0 && cents < 0 {
        body.insert(0, '-');
    }
    if remainder != 0 {
        if remainder % 10 == 0 {
            body.push_str(&format!(".{}", remainder / 10));
        } else {
            body.push_str(&format!(".{:02}", remainder));
        }
    }
    format!("${}", body)
}

fn group_signed(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_normalize_to_uppercase() {
        assert_eq!(CurrencyCode::new(" usd ").as_str(), "USD");
        assert!(CurrencyCode::new("jpy").is_jpy());
        assert_eq!(CurrencyCode::default(), CurrencyCode::jpy());
    }

    #[test]
    fn jpy_passes_through_for_any_rate() {
        assert_eq!(to_jpy(1490.0, &CurrencyCode::jpy(), 150.0), 1490.0);
        assert_eq!(to_jpy(1490.0, &CurrencyCode::jpy(), 0.0), 1490.0);
    }

    #[test]
    fn usd_multiplies_by_rate_exactly() {
        assert_eq!(to_jpy(20.0, &CurrencyCode::usd(), 150.0), 3000.0);
        assert_eq!(to_jpy(19.99, &CurrencyCode::usd(), 100.0), 19.99 * 100.0);
    }

    #[test]
    fn unknown_codes_pass_through_unchanged() {
        let eur = CurrencyCode::new("EUR");
        assert_eq!(to_jpy(12.5, &eur, 150.0), 12.5);
        assert_eq!(symbol_for(&eur), "¥");
    }

    #[test]
    fn jpy_formatting_groups_and_rounds() {
        assert_eq!(format_jpy(1490.0), "¥1,490");
        assert_eq!(format_jpy(1234567.0), "¥1,234,567");
        assert_eq!(format_jpy(999.4), "¥999");
        assert_eq!(format_jpy(1082.5), "¥1,083");
    }

    #[test]
    fn original_usd_trims_trailing_zeros() {
        assert_eq!(format_original(20.0, &CurrencyCode::usd()), "$20");
        assert_eq!(format_original(19.99, &CurrencyCode::usd()), "$19.99");
        assert_eq!(format_original(19.9, &CurrencyCode::usd()), "$19.9");
        assert_eq!(format_original(1234.5, &CurrencyCode::usd()), "$1,234.5");
    }

    #[test]
    fn original_falls_back_to_yen_for_other_codes() {
        assert_eq!(format_original(1490.0, &CurrencyCode::jpy()), "¥1,490");
        assert_eq!(format_original(500.0, &CurrencyCode::new("GBP")), "¥500");
    }
}
