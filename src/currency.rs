//! # Currency Normalization
//!
//! Text-to-amount helpers for the deposit flow and dashboard figures.
//!
//! ## Functions
//!
//! - [`format_currency`] - Canonical two-decimal amount, used on submit
//! - [`filter_amount_input`] - Live-typing filter, never rounds or pads
//! - [`validate_deposit_amount`] - Minimum deposit check
//! - [`format_number`] / [`format_usd`] - Display formatting with separators
//!
//! `format_currency` rounds while `filter_amount_input` truncates. They are
//! deliberately separate: the input box must show exactly what was typed.

use crate::constants::{CURRENCY_DECIMALS, MIN_DEPOSIT};

const ZERO_AMOUNT: &str = "0.00";

/// Every finite f64 has a terminating decimal expansion within this many
/// fractional digits, so formatting at this precision is exact.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Keep digits and dots, merge every fractional run after the first dot,
/// and strip leading zeros unless the value is `0` or starts with `0.`.
fn sanitize_amount(text: &str) -> String {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let merged = match filtered.split_once('.') {
        Some((whole, rest)) if rest.contains('.') => format!("{}.{}", whole, rest.replace('.', "")),
        _ => filtered,
    };

    if merged.starts_with('0') && merged.len() > 1 && !merged[1..].starts_with('.') {
        merged.trim_start_matches('0').to_string()
    } else {
        merged
    }
}

/// Format arbitrary text as an amount with exactly two decimals.
///
/// Anything that does not reduce to a finite number becomes `"0.00"`.
/// Rounds the exact binary value, ties up: `"0.125"` becomes `"0.13"`,
/// while `"1.005"` (stored as 1.00499...) becomes `"1.00"`.
///
/// ```rust
/// use trustup::currency::format_currency;
///
/// assert_eq!(format_currency("$10.5"), "10.50");
/// assert_eq!(format_currency("10,000.50"), "10000.50");
/// assert_eq!(format_currency("abc"), "0.00");
/// ```
pub fn format_currency(value: &str) -> String {
    if value.trim().is_empty() {
        return ZERO_AMOUNT.to_string();
    }

    let filtered = sanitize_amount(value);
    if filtered.is_empty() || filtered == "." {
        return ZERO_AMOUNT.to_string();
    }

    match filtered.parse::<f64>() {
        Ok(amount) if amount.is_finite() => round_to_cents(amount),
        _ => ZERO_AMOUNT.to_string(),
    }
}

/// Round the exact binary value of a non-negative `amount` to cents, with
/// true ties going up. `0.015` is stored just below the tie, so it rounds
/// down to `0.01`.
fn round_to_cents(amount: f64) -> String {
    let exact = format!("{:.prec$}", amount, prec = EXACT_FRACTION_DIGITS);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(CURRENCY_DECIMALS))
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(CURRENCY_DECIMALS)
        .map_or(false, |d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - CURRENCY_DECIMALS;
    let text: String = digits.iter().map(|&d| d as char).collect();
    format!("{}.{}", &text[..split], &text[split..])
}

/// Filter a deposit field while the user is typing.
///
/// Strips `$`, whitespace and thousands separators, then applies the same
/// digit filtering as [`format_currency`]. Extra fractional digits are cut,
/// not rounded, and an input that reduces to nothing yields `""` so the
/// field can show its placeholder.
pub fn filter_amount_input(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !(*c == '$' || *c == ',' || c.is_whitespace()))
        .collect();

    let filtered = sanitize_amount(&stripped);
    if filtered.is_empty() || filtered == "." {
        return String::new();
    }

    match filtered.split_once('.') {
        Some((whole, fraction)) if fraction.len() > CURRENCY_DECIMALS => {
            format!("{}.{}", whole, &fraction[..CURRENCY_DECIMALS])
        }
        _ => filtered,
    }
}

/// Read the longest decimal literal at the start of `value`, after leading
/// whitespace: `"12abc"` reads as 12, `"abc"` reads as nothing.
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let whole_digits = digits_from(end);
    end += whole_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if whole_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if whole_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// True iff `value` reads as an amount of at least the minimum deposit.
pub fn validate_deposit_amount(value: &str) -> bool {
    match parse_leading_number(value) {
        Some(amount) if amount != 0.0 => amount >= MIN_DEPOSIT,
        _ => false,
    }
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    // A value that rounds to zero keeps no sign
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) if rest.bytes().any(|b| matches!(b, b'1'..=b'9')) => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Dollar amount with separators and cents, e.g. `$1,250.00`.
pub fn format_usd(value: f64) -> String {
    let formatted = format_number(value, CURRENCY_DECIMALS);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}
