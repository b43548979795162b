//! Whole-line classification rules.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. integer: `-?[0-9]+`
//! 2. float: `-?[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?`
//! 3. string: everything else
//!
//! Patterns are anchored on both ends, so `" 42"`, `"+1"`, `".5"` and `"1e"`
//! are strings. Digits are ASCII only.
//!
//! A float whose exponent or resulting scale does not fit in 32 bits is not
//! demoted to a string: it is rejected with [`FilterError::InvalidNumber`].

use super::Classification;
use crate::errors::{FilterError, Result};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static FLOAT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?$").unwrap());

/// Classify a single line.
///
/// Lines that match no numeric pattern are always [`Classification::Text`].
/// A float-pattern line fails only when its exponent is out of range.
///
/// # Example
///
/// ```rust
/// use linesift::core::{classify, Category};
///
/// assert_eq!(classify("-45")?.category(), Category::Integer);
/// assert_eq!(classify("1.528535047E-25")?.category(), Category::Float);
/// assert_eq!(classify(".5")?.category(), Category::String);
/// assert!(classify("1e99999999999999999999").is_err());
/// # Ok::<(), linesift::errors::FilterError>(())
/// ```
pub fn classify(line: &str) -> Result<Classification> {
    if INTEGER_PATTERN.is_match(line) {
        let value = BigInt::from_str(line)
            .map_err(|e| FilterError::invalid_number(line, e.to_string()))?;
        return Ok(Classification::Integer(value));
    }

    if FLOAT_PATTERN.is_match(line) {
        check_float_scale(line)?;
        let value = BigDecimal::from_str(line)
            .map_err(|e| FilterError::invalid_number(line, e.to_string()))?;
        return Ok(Classification::Float(value));
    }

    Ok(Classification::Text)
}

/// Exponent and scale (fraction digits minus exponent) must both fit in an
/// `i32`. Expects a line already matched by `FLOAT_PATTERN`.
fn check_float_scale(line: &str) -> Result<()> {
    let unsigned = line.strip_prefix('-').unwrap_or(line);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], &unsigned[idx + 1..]),
        None => (unsigned, "0"),
    };
    let fraction_digits = mantissa.split_once('.').map_or(0, |(_, f)| f.len());

    let exponent = exponent
        .parse::<i64>()
        .ok()
        .filter(|exp| i32::try_from(*exp).is_ok())
        .ok_or_else(|| FilterError::invalid_number(line, "exponent out of range"))?;
    let scale = i64::try_from(fraction_digits)
        .unwrap_or(i64::MAX)
        .saturating_sub(exponent);
    if i32::try_from(scale).is_err() {
        return Err(FilterError::invalid_number(line, "scale out of range"));
    }
    Ok(())
}
