use crate::config::TIP_SLIDER_STEPS;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use tip_split::defaults::MAX_TIP_PERCENT;

// Optional "$", an integer part with optional thousands separators, and an
// optional fractional part.
static BILL_AMOUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$?\s*(\d{1,3}(?:,\d{3})+|\d+)(\.\d+)?$").unwrap());

/// Bill parsing error types for better error handling
#[derive(Debug, PartialEq, Eq)]
pub enum BillParseError {
    EmptyInput,
    NegativeAmount,
    InvalidFormat,
}

impl std::fmt::Display for BillParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillParseError::EmptyInput => write!(f, "Bill amount cannot be empty"),
            BillParseError::NegativeAmount => write!(f, "Bill amount cannot be negative"),
            BillParseError::InvalidFormat => {
                write!(f, "Invalid amount. Use: 42, 42.50, or $1,042.50")
            }
        }
    }
}

impl std::error::Error for BillParseError {}

/// Parse free-text bill input into a non-negative amount.
///
/// Supported forms:
/// - Plain number: "42" or "42.5"
/// - With currency symbol: "$42.50"
/// - With thousands separators: "1,042.50"
///
/// Surrounding whitespace is ignored. Anything else is rejected with a typed
/// error rather than silently coerced.
pub fn parse_bill_amount(input: &str) -> Result<f64, BillParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BillParseError::EmptyInput);
    }
    if trimmed.starts_with('-') || trimmed.starts_with("$-") {
        return Err(BillParseError::NegativeAmount);
    }

    if let Some(captures) = BILL_AMOUNT_REGEX.captures(trimmed) {
        let integer_part = captures[1].replace(',', "");
        let fraction_part = captures.get(2).map(|m| m.as_str()).unwrap_or("");
        return format!("{}{}", integer_part, fraction_part)
            .parse::<f64>()
            .map_err(|_| BillParseError::InvalidFormat);
    }

    debug!("Rejected bill input: '{}'", trimmed);
    Err(BillParseError::InvalidFormat)
}

/// Map a slider notch index into a position on the unit interval.
pub fn slider_position(idx: usize) -> f64 {
    idx.min(TIP_SLIDER_STEPS) as f64 / TIP_SLIDER_STEPS as f64
}

/// Scale a `[0.0, 1.0]` slider position to a whole tip percentage.
///
/// Truncates toward zero, so a position of 0.159 reads as 15%.
pub fn tip_percent_from_position(position: f64) -> u32 {
    (position.clamp(0.0, 1.0) * MAX_TIP_PERCENT as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_decimal_amounts() {
        assert_eq!(parse_bill_amount("42"), Ok(42.0));
        assert_eq!(parse_bill_amount("42.5"), Ok(42.5));
        assert_eq!(parse_bill_amount("0.99"), Ok(0.99));
    }

    #[test]
    fn parses_currency_symbol_and_separators() {
        assert_eq!(parse_bill_amount("$42.50"), Ok(42.5));
        assert_eq!(parse_bill_amount("1,042.50"), Ok(1042.5));
        assert_eq!(parse_bill_amount("$ 1,250"), Ok(1250.0));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_bill_amount("  19.99  "), Ok(19.99));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_bill_amount(""), Err(BillParseError::EmptyInput));
        assert_eq!(parse_bill_amount("   "), Err(BillParseError::EmptyInput));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(parse_bill_amount("-5"), Err(BillParseError::NegativeAmount));
        assert_eq!(
            parse_bill_amount("$-5.00"),
            Err(BillParseError::NegativeAmount)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_bill_amount("abc"), Err(BillParseError::InvalidFormat));
        assert_eq!(
            parse_bill_amount("12.34.56"),
            Err(BillParseError::InvalidFormat)
        );
        assert_eq!(
            parse_bill_amount("12,34"),
            Err(BillParseError::InvalidFormat)
        );
    }

    #[test]
    fn slider_notches_map_to_whole_percents() {
        assert_eq!(tip_percent_from_position(slider_position(0)), 0);
        assert_eq!(tip_percent_from_position(slider_position(3)), 15);
        assert_eq!(tip_percent_from_position(slider_position(TIP_SLIDER_STEPS)), 100);
    }

    #[test]
    fn out_of_range_notches_clamp() {
        assert_eq!(slider_position(TIP_SLIDER_STEPS + 5), 1.0);
    }

    #[test]
    fn percent_truncates_instead_of_rounding() {
        assert_eq!(tip_percent_from_position(0.159), 15);
        assert_eq!(tip_percent_from_position(0.999), 99);
    }

    #[test]
    fn percent_clamps_to_the_unit_interval() {
        assert_eq!(tip_percent_from_position(-0.25), 0);
        assert_eq!(tip_percent_from_position(1.75), 100);
    }
}
