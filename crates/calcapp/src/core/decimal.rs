//! Locale-aware decimal text
//!
//! Parsing follows a "float" number style: surrounding whitespace, a
//! leading sign, one decimal separator and an optional exponent. Group
//! separators are never accepted, so `1,5` is not a number in the
//! invariant locale and `1.5` is not one in the comma locale.

use crate::core::{CalcError, CalcResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

/// Exponents beyond this cannot change a representable, non-zero value
/// without overflowing (or underflowing to zero).
const MAX_EXPONENT: u32 = 60;

/// Numeric text conventions for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberLocale {
    /// `.` as decimal separator
    #[default]
    Invariant,
    /// `,` as decimal separator
    Comma,
}

impl NumberLocale {
    /// The decimal separator of this locale
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::Invariant => '.',
            Self::Comma => ',',
        }
    }

    /// Parses `text` using this locale only.
    pub fn parse(self, text: &str) -> CalcResult<Decimal> {
        let text = text.trim();
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], Some(&text[at + 1..])),
            None => (text, None),
        };

        let (negative, unsigned) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (whole, fraction) = unsigned
            .split_once(self.decimal_separator())
            .unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(CalcError::InvalidNumericInput);
        }
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(CalcError::InvalidNumericInput);
        }

        let mut canonical = String::with_capacity(unsigned.len() + 3);
        if negative {
            canonical.push('-');
        }
        canonical.push_str(if whole.is_empty() { "0" } else { whole });
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(fraction);
        }

        let value = Decimal::from_str(&canonical).map_err(|_| CalcError::InvalidNumericInput)?;
        match exponent {
            Some(exponent) => scale_by_exponent(value, exponent),
            None => Ok(value),
        }
    }

    /// Renders `value` in fixed-point notation without trailing zeros.
    #[must_use]
    pub fn format(self, value: Decimal) -> String {
        if value.is_zero() {
            return "0".to_string();
        }
        let text = value.normalize().to_string();
        match self {
            Self::Invariant => text,
            Self::Comma => text.replace('.', ","),
        }
    }
}

/// Parses with `locale` first, then falls back to the invariant locale.
pub fn parse_decimal_flexible(text: &str, locale: NumberLocale) -> CalcResult<Decimal> {
    locale.parse(text).or_else(|err| {
        trace!(?locale, input = text, "primary locale rejected input");
        if locale == NumberLocale::Invariant {
            Err(err)
        } else {
            NumberLocale::Invariant.parse(text)
        }
    })
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn scale_by_exponent(value: Decimal, exponent: &str) -> CalcResult<Decimal> {
    let (negative, digits) = match exponent.as_bytes().first() {
        Some(b'-') => (true, &exponent[1..]),
        Some(b'+') => (false, &exponent[1..]),
        _ => (false, exponent),
    };
    if digits.is_empty() || !is_digits(digits) {
        return Err(CalcError::InvalidNumericInput);
    }
    if value.is_zero() {
        return Ok(value);
    }

    let significant = digits.trim_start_matches('0');
    let magnitude = if significant.is_empty() {
        0
    } else {
        significant.parse::<u32>().unwrap_or(u32::MAX)
    };
    if magnitude > MAX_EXPONENT {
        return if negative {
            Ok(Decimal::ZERO)
        } else {
            Err(CalcError::InvalidNumericInput)
        };
    }

    let mut scaled = value;
    for _ in 0..magnitude {
        scaled = if negative {
            scaled.checked_div(Decimal::TEN)
        } else {
            scaled.checked_mul(Decimal::TEN)
        }
        .ok_or(CalcError::InvalidNumericInput)?;
    }
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    // ===== NumberLocale tests =====

    #[test]
    fn test_default_locale_is_invariant() {
        assert_eq!(NumberLocale::default(), NumberLocale::Invariant);
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(NumberLocale::Invariant.decimal_separator(), '.');
        assert_eq!(NumberLocale::Comma.decimal_separator(), ',');
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&NumberLocale::Comma).unwrap();
        assert_eq!(json, "\"Comma\"");
        let back: NumberLocale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NumberLocale::Comma);
    }

    // ===== parse tests =====

    #[test]
    fn test_parse_integers_and_signs() {
        let locale = NumberLocale::Invariant;
        assert_eq!(locale.parse("12"), Ok(d("12")));
        assert_eq!(locale.parse("-3"), Ok(d("-3")));
        assert_eq!(locale.parse("+7"), Ok(d("7")));
        assert_eq!(locale.parse("  42 \r\n"), Ok(d("42")));
    }

    #[test]
    fn test_parse_fraction_forms() {
        let locale = NumberLocale::Invariant;
        assert_eq!(locale.parse("-3.5"), Ok(d("-3.5")));
        assert_eq!(locale.parse(".5"), Ok(d("0.5")));
        assert_eq!(locale.parse("5."), Ok(d("5")));
    }

    #[test]
    fn test_parse_exponent() {
        let locale = NumberLocale::Invariant;
        assert_eq!(locale.parse("1e3"), Ok(d("1000")));
        assert_eq!(locale.parse("2.5E-2"), Ok(d("0.025")));
        assert_eq!(locale.parse("0e999999"), Ok(Decimal::ZERO));
        assert_eq!(locale.parse("1e-999"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_parse_comma_locale() {
        assert_eq!(NumberLocale::Comma.parse("3,5"), Ok(d("3.5")));
        assert_eq!(NumberLocale::Comma.parse("3.5"), Err(CalcError::InvalidNumericInput));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let locale = NumberLocale::Invariant;
        for text in ["", "   ", "abc", "12a", "1.2.3", "-", "+", ".", "1e", "e5", "--1", "1,000", "1 000"] {
            assert_eq!(locale.parse(text), Err(CalcError::InvalidNumericInput), "{text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let locale = NumberLocale::Invariant;
        assert_eq!(
            locale.parse("99999999999999999999999999999999"),
            Err(CalcError::InvalidNumericInput)
        );
        assert_eq!(locale.parse("1e40"), Err(CalcError::InvalidNumericInput));
        assert_eq!(locale.parse("1e99999999999"), Err(CalcError::InvalidNumericInput));
    }

    // ===== flexible parse tests =====

    #[test]
    fn test_flexible_prefers_primary_locale() {
        assert_eq!(
            parse_decimal_flexible("3,5", NumberLocale::Comma),
            Ok(d("3.5"))
        );
    }

    #[test]
    fn test_flexible_falls_back_to_invariant() {
        assert_eq!(
            parse_decimal_flexible("3.5", NumberLocale::Comma),
            Ok(d("3.5"))
        );
    }

    #[test]
    fn test_flexible_invariant_does_not_accept_comma() {
        assert_eq!(
            parse_decimal_flexible("3,5", NumberLocale::Invariant),
            Err(CalcError::InvalidNumericInput)
        );
    }

    #[test]
    fn test_comma_and_dot_locales_agree() {
        let comma = parse_decimal_flexible("3,5", NumberLocale::Comma).unwrap();
        let dot = parse_decimal_flexible("3.5", NumberLocale::Invariant).unwrap();
        assert_eq!(comma, dot);
    }

    // ===== format tests =====

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(NumberLocale::Invariant.format(d("8.000")), "8");
        assert_eq!(NumberLocale::Invariant.format(d("2.50")), "2.5");
        assert_eq!(NumberLocale::Invariant.format(d("-0.0")), "0");
    }

    #[test]
    fn test_format_never_uses_exponent() {
        assert_eq!(
            NumberLocale::Invariant.format(d("0.0000001")),
            "0.0000001"
        );
        assert_eq!(
            NumberLocale::Invariant.format(Decimal::MAX),
            "79228162514264337593543950335"
        );
    }

    #[test]
    fn test_format_uses_locale_separator() {
        assert_eq!(NumberLocale::Comma.format(d("-3.25")), "-3,25");
    }

    #[test]
    fn test_format_one_third_keeps_full_precision() {
        let third = Decimal::ONE / Decimal::from(3);
        let text = NumberLocale::Invariant.format(third);
        assert_eq!(text, "0.3333333333333333333333333333");
    }

    // ===== Property-based tests =====

    fn locale_strategy() -> impl Strategy<Value = NumberLocale> {
        prop_oneof![Just(NumberLocale::Invariant), Just(NumberLocale::Comma)]
    }

    fn decimal_strategy() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), 0u32..=18u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_round_trips(value in decimal_strategy(), locale in locale_strategy()) {
            let text = locale.format(value);
            prop_assert_eq!(parse_decimal_flexible(&text, locale), Ok(value));
        }

        #[test]
        fn prop_format_has_no_exponent(value in decimal_strategy()) {
            let text = NumberLocale::Invariant.format(value);
            prop_assert!(!text.contains(['e', 'E']));
        }

        #[test]
        fn prop_letters_never_parse(text in "[a-df-zA-DF-Z]{1,8}") {
            prop_assert_eq!(
                parse_decimal_flexible(&text, NumberLocale::Comma),
                Err(CalcError::InvalidNumericInput)
            );
        }
    }
}
