use alloy_primitives::U256;
use tracing::debug;

use crate::error::UtilsError;

/// Fractional digits kept by [`to_decimal`] before trailing zeros are trimmed.
const FRACTION_DIGITS: u32 = 10;

/// Largest decimal shift accepted by [`decimal_exp`].
const MAX_DECIMAL_SHIFT: u32 = 1_000;

/// Rounds half away from zero.
pub fn round(num: f64) -> i64 {
    (num + 0.5f64.copysign(num)) as i64
}

/// Rounds `num` to `precision` decimal places.
pub fn float_to_precision(num: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    round(num * scale) as f64 / scale
}

/// Shortest decimal representation without an exponent: `0.1010` → `"0.101"`.
pub fn float_to_string(num: f64) -> String {
    num.to_string()
}

/// Parses a decimal string such as `"0.00037500"`.
pub fn parse_f64(input: &str) -> Result<f64, UtilsError> {
    Ok(input.parse::<f64>()?)
}

/// Parses every string as an integer, failing on the first invalid one.
pub fn parse_ints(inputs: &[&str]) -> Result<Vec<i64>, UtilsError> {
    inputs
        .iter()
        .map(|s| s.parse::<i64>().map_err(UtilsError::from))
        .collect()
}

fn pow10(exp: u32) -> Option<U256> {
    (0..exp).try_fold(U256::from(1u8), |acc, _| acc.checked_mul(U256::from(10u8)))
}

fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Converts an integer amount in base units into a decimal string.
///
/// `try_to_decimal("1234567", 6)` is `"1.234567"`. The fraction is rounded
/// half-up to ten digits and trailing zeros are trimmed, so amounts smaller
/// than `1e-10` become `"0"`.
pub fn try_to_decimal(value: &str, exp: u32) -> Result<String, UtilsError> {
    let (negative, digits) = split_sign(value);
    if !is_digits(digits) {
        return Err(UtilsError::InvalidNumber(value.to_owned()));
    }

    let num = U256::from_str_radix(digits, 10)
        .map_err(|_| UtilsError::InvalidNumber(value.to_owned()))?;
    let denom = pow10(exp).ok_or(UtilsError::ExponentTooLarge(exp))?;
    let full = pow10(FRACTION_DIGITS).ok_or(UtilsError::ExponentTooLarge(FRACTION_DIGITS))?;

    let mut int_part = num / denom;
    let rem = num % denom;

    let mut frac = if exp <= FRACTION_DIGITS {
        let scale = pow10(FRACTION_DIGITS - exp).ok_or(UtilsError::ExponentTooLarge(exp))?;
        rem * scale
    } else {
        let scale = pow10(exp - FRACTION_DIGITS).ok_or(UtilsError::ExponentTooLarge(exp))?;
        let mut q = rem / scale;
        if (rem % scale) * U256::from(2u8) >= scale {
            q += U256::from(1u8);
        }
        q
    };

    if frac == full {
        int_part += U256::from(1u8);
        frac = U256::ZERO;
    }

    let mut out = String::new();
    if negative && !(int_part.is_zero() && frac.is_zero()) {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if !frac.is_zero() {
        let padded = format!("{:0>width$}", frac.to_string(), width = FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(padded.trim_end_matches('0'));
    }

    Ok(out)
}

/// Lenient [`try_to_decimal`]: invalid input yields `"0"`.
pub fn to_decimal(value: &str, exp: u32) -> String {
    try_to_decimal(value, exp).unwrap_or_else(|e| {
        debug!(value, exp, error = %e, "to_decimal fell back to zero");
        "0".to_owned()
    })
}

/// Drops the decimal point of a full-precision decimal string:
/// `"0.00037500"` → `"37500"`.
pub fn decimal_to_satoshis(dec: &str) -> Result<String, UtilsError> {
    let trimmed = dec.trim();
    if trimmed.is_empty() {
        return Err(UtilsError::EmptyInput);
    }

    let joined = trimmed.replacen('.', "", 1);
    if !is_digits(&joined) {
        return Err(UtilsError::InvalidNumber(dec.to_owned()));
    }

    let stripped = joined.trim_start_matches('0');
    Ok(if stripped.is_empty() { "0".to_owned() } else { stripped.to_owned() })
}

/// Lenient [`decimal_to_satoshis`]: invalid input yields `"0"`.
pub fn from_decimal(dec: &str) -> String {
    decimal_to_satoshis(dec).unwrap_or_else(|e| {
        debug!(dec, error = %e, "from_decimal fell back to zero");
        "0".to_owned()
    })
}

/// Computes `dec * 10^exp` on the decimal string itself.
///
/// A comma is accepted as the decimal separator. The result carries no
/// leading zeros in the integral part nor trailing zeros in the fraction.
pub fn decimal_exp(dec: &str, exp: i32) -> Result<String, UtilsError> {
    let normalized = dec.trim().replacen(',', ".", 1);
    let (negative, unsigned) = split_sign(&normalized);

    let (int_digits, frac_digits) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(UtilsError::EmptyInput);
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return Err(UtilsError::InvalidNumber(dec.to_owned()));
    }

    if exp.unsigned_abs() > MAX_DECIMAL_SHIFT {
        return Err(UtilsError::ExponentTooLarge(exp.unsigned_abs()));
    }
    let shift = exp.unsigned_abs() as usize;
    let (int_part, frac_part) = if exp >= 0 {
        let mut frac = frac_digits.to_owned();
        if frac.len() < shift {
            frac.push_str(&"0".repeat(shift - frac.len()));
        }
        let (moved, rest) = frac.split_at(shift);
        (format!("{int_digits}{moved}"), rest.to_owned())
    } else {
        let mut int = int_digits.to_owned();
        if int.len() < shift {
            int.insert_str(0, &"0".repeat(shift - int.len()));
        }
        let (kept, moved) = int.split_at(int.len() - shift);
        (kept.to_owned(), format!("{moved}{frac_digits}"))
    };

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative && !(int_part == "0" && frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    Ok(out)
}

/// Integral part of [`decimal_exp`]: `from_decimal_exp("1.5", 2)` is `"150"`.
pub fn from_decimal_exp(dec: &str, exp: i32) -> Result<String, UtilsError> {
    let shifted = decimal_exp(dec, exp)?;
    Ok(match shifted.split_once('.') {
        Some((int, _)) => int.to_owned(),
        None => shifted,
    })
}
