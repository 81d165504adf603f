//! Money formatting for decimal amounts.
//!
//! Renders an exact decimal as a grouped, signed, currency-styled string.
//! Rounding happens here and only here: ledgers keep full precision and
//! quantize at display time.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default number of digits after the decimal point
pub const DEFAULT_PLACES: u32 = 2;

/// Largest scale a `Decimal` can carry
pub const MAX_PLACES: u32 = 28;

/// Parameters controlling how amounts are rendered.
///
/// The defaults produce plain grouped amounts such as `1,234.56` and
/// `-12.00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Digits after the decimal point
    pub places: u32,
    /// Currency symbol placed after the sign (may be blank)
    pub currency: String,
    /// Thousands grouping separator (comma, period, space or blank)
    pub group_separator: String,
    /// Decimal point; only blank when `places` is zero
    pub decimal_point: String,
    /// Sign for positive numbers: `+`, space or blank
    pub positive_sign: String,
    /// Sign for negative numbers: `-`, `(`, space or blank
    pub negative_sign: String,
    /// Trailing marker for negative numbers: `-`, `)`, space or blank
    pub trailing_negative: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            places: DEFAULT_PLACES,
            currency: String::new(),
            group_separator: ",".to_string(),
            decimal_point: ".".to_string(),
            positive_sign: String::new(),
            negative_sign: "-".to_string(),
            trailing_negative: String::new(),
        }
    }
}

impl MoneyFormat {
    /// Create the default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounting style: negatives wrapped in parentheses
    pub fn accounting() -> Self {
        Self::default()
            .with_negative_sign("(")
            .with_trailing_negative(")")
    }

    /// Builder: set decimal places (clamped to [`MAX_PLACES`])
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places.min(MAX_PLACES);
        self
    }

    /// Builder: set currency symbol
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set grouping separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Builder: set decimal point
    pub fn with_decimal_point(mut self, point: impl Into<String>) -> Self {
        self.decimal_point = point.into();
        self
    }

    /// Builder: set positive sign
    pub fn with_positive_sign(mut self, sign: impl Into<String>) -> Self {
        self.positive_sign = sign.into();
        self
    }

    /// Builder: set negative sign
    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Builder: set trailing negative marker
    pub fn with_trailing_negative(mut self, marker: impl Into<String>) -> Self {
        self.trailing_negative = marker.into();
        self
    }

    /// Format a decimal as a money string.
    ///
    /// The value is rounded half-to-even to `places` digits. The sign is
    /// taken from the unrounded value, so `-0.001` renders as `-0.00`.
    ///
    /// ```rust
    /// use billcalclib::MoneyFormat;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let fmt = MoneyFormat::default();
    /// assert_eq!(fmt.format(&Decimal::from_str("1234.5").unwrap()), "1,234.50");
    /// assert_eq!(fmt.format(&Decimal::from(-12)), "-12.00");
    /// ```
    pub fn format(&self, value: &Decimal) -> String {
        let places = self.places.min(MAX_PLACES);
        let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
        let negative = value.is_sign_negative();

        let digits = rounded.mantissa().unsigned_abs().to_string();
        let scale = rounded.scale() as usize;
        let (int_digits, frac_digits) = if digits.len() > scale {
            digits.split_at(digits.len() - scale)
        } else {
            ("", digits.as_str())
        };

        let mut out = String::with_capacity(digits.len() + places as usize + 8);
        if negative {
            out.push_str(&self.negative_sign);
        } else {
            out.push_str(&self.positive_sign);
        }
        out.push_str(&self.currency);

        if int_digits.is_empty() {
            out.push('0');
        } else {
            push_grouped(&mut out, int_digits, &self.group_separator);
        }

        if places > 0 {
            out.push_str(&self.decimal_point);
            out.extend(std::iter::repeat('0').take(scale - frac_digits.len()));
            out.push_str(frac_digits);
            out.extend(std::iter::repeat('0').take(places as usize - scale));
        }

        if negative {
            out.push_str(&self.trailing_negative);
        }
        out
    }
}

/// Append ASCII digits in groups of three, left to right.
fn push_grouped(out: &mut String, digits: &str, separator: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fmt(value: Decimal) -> String {
        MoneyFormat::default().format(&value)
    }

    #[test]
    fn test_default_representative_values() {
        assert_eq!(fmt(dec!(0)), "0.00");
        assert_eq!(fmt(dec!(0.01)), "0.01");
        assert_eq!(fmt(dec!(-0.01)), "-0.01");
        assert_eq!(fmt(dec!(1234.5)), "1,234.50");
        assert_eq!(fmt(dec!(-1234.5)), "-1,234.50");
        assert_eq!(fmt(dec!(1000000)), "1,000,000.00");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(fmt(dec!(999)), "999.00");
        assert_eq!(fmt(dec!(1000)), "1,000.00");
        assert_eq!(fmt(dec!(123456)), "123,456.00");
        assert_eq!(fmt(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn test_bankers_rounding() {
        assert_eq!(fmt(dec!(0.125)), "0.12");
        assert_eq!(fmt(dec!(0.135)), "0.14");
        assert_eq!(fmt(dec!(2.675)), "2.68");
        assert_eq!(fmt(dec!(-0.125)), "-0.12");
    }

    #[test]
    fn test_repeating_share_is_quantized() {
        let share = dec!(100) / dec!(3);
        assert_eq!(fmt(share), "33.33");
    }

    #[test]
    fn test_negative_sign_survives_rounding_to_zero() {
        assert_eq!(fmt(dec!(-0.001)), "-0.00");
    }

    #[test]
    fn test_zero_places() {
        let format = MoneyFormat::default().with_places(0).with_decimal_point("");
        assert_eq!(format.format(&dec!(1234.5)), "1,234");
        assert_eq!(format.format(&dec!(1235.5)), "1,236");
        assert_eq!(format.format(&dec!(0.4)), "0");
    }

    #[test]
    fn test_extra_places_pad_with_zeros() {
        let format = MoneyFormat::default().with_places(4);
        assert_eq!(format.format(&dec!(1.5)), "1.5000");
        assert_eq!(format.format(&dec!(0.00005)), "0.0000");
        assert_eq!(format.format(&dec!(0.00015)), "0.0002");
    }

    #[test]
    fn test_places_are_clamped() {
        let format = MoneyFormat::default().with_places(40);
        assert_eq!(format.places, MAX_PLACES);
    }

    #[test]
    fn test_accounting_style() {
        let format = MoneyFormat::accounting().with_currency("$").with_places(0);
        assert_eq!(format.format(&dec!(-1234.56)), "($1,235)");
        assert_eq!(format.format(&dec!(1234.56)), "$1,235");
    }

    #[test]
    fn test_positive_sign_and_currency() {
        let format = MoneyFormat::default()
            .with_positive_sign("+")
            .with_currency("€");
        assert_eq!(format.format(&dec!(1)), "+€1.00");
        assert_eq!(format.format(&dec!(-1)), "-€1.00");
    }

    #[test]
    fn test_european_separators() {
        let format = MoneyFormat::default()
            .with_group_separator(".")
            .with_decimal_point(",");
        assert_eq!(format.format(&dec!(1234567.5)), "1.234.567,50");
    }

    #[test]
    fn test_blank_separator() {
        let format = MoneyFormat::default().with_group_separator("");
        assert_eq!(format.format(&dec!(1234567)), "1234567.00");
    }
}
