//! # Numeric Text Parsing
//!
//! Proposals carry amounts, fractions and factors as text so that no
//! precision is lost in transit. This module turns that text into checked
//! values.
//!
//! | Helper | Accepts | Notes |
//! |--------|---------|-------|
//! | [`parse_decimal`] | `"0.1"`, `"-3"`, `"1e-5"` | `rust_decimal`, 28 significant digits |
//! | [`parse_integer`] | `"-12"`, `"1000…"` | arbitrary length, sign only |
//! | [`parse_uint`] | `"0"`, `"1000…"` | arbitrary length, no sign |
//! | [`parse_float`] | `"0.99"` | finite `f64` only |
//!
//! Integer amounts may exceed any machine integer (token amounts are
//! 256-bit), so integer helpers validate syntax and report the sign rather
//! than returning a value.

use crate::error::Violation;
use crate::validation::Errors;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

/// Signed run of decimal amounts with units, as in `"1h30m0.5s"`
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+$")
        .expect("duration pattern is valid")
});

static DURATION_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)")
        .expect("duration segment pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("empty value")]
    Empty,

    #[error("malformed number: {0}")]
    Malformed(String),

    #[error("negative value where unsigned expected: {0}")]
    Negative(String),

    #[error("non-finite value: {0}")]
    NonFinite(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// Parse decimal text, plain or scientific.
pub fn parse_decimal(value: &str) -> Result<Decimal, NumberError> {
    if value.is_empty() {
        return Err(NumberError::Empty);
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| NumberError::Malformed(value.to_string()))
}

/// Check integer syntax and report the sign.
pub fn parse_integer(value: &str) -> Result<Sign, NumberError> {
    if value.is_empty() {
        return Err(NumberError::Empty);
    }
    if !INTEGER.is_match(value) {
        return Err(NumberError::Malformed(value.to_string()));
    }
    let (negative, digits) = match value.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, value),
    };
    if digits.bytes().all(|b| b == b'0') {
        Ok(Sign::Zero)
    } else if negative {
        Ok(Sign::Negative)
    } else {
        Ok(Sign::Positive)
    }
}

/// Check unsigned integer syntax. `"-0"` is rejected as signed.
pub fn parse_uint(value: &str) -> Result<Sign, NumberError> {
    if value.starts_with('-') {
        return match parse_integer(value) {
            Ok(_) => Err(NumberError::Negative(value.to_string())),
            Err(err) => Err(err),
        };
    }
    parse_integer(value)
}

/// Compare two unsigned integer texts by magnitude.
///
/// `None` unless both parse with [`parse_uint`].
pub fn cmp_uint(left: &str, right: &str) -> Option<Ordering> {
    parse_uint(left).ok()?;
    parse_uint(right).ok()?;
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    Some(left.len().cmp(&right.len()).then_with(|| left.cmp(right)))
}

/// Parse float text, rejecting NaN and infinities.
pub fn parse_float(value: &str) -> Result<f64, NumberError> {
    if value.is_empty() {
        return Err(NumberError::Empty);
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| NumberError::Malformed(value.to_string()))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(NumberError::NonFinite(value.to_string()))
    }
}

fn unit_nanos(unit: &str) -> f64 {
    match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        _ => 3600e9,
    }
}

/// True for duration text such as `"1h30m"`, `"1.5h"` or `"-300ms"`.
///
/// Every amount needs a unit except a bare zero, and the total must fit
/// in signed 64-bit nanoseconds.
pub fn is_valid_duration(value: &str) -> bool {
    if matches!(value, "0" | "+0" | "-0") {
        return true;
    }
    if !DURATION.is_match(value) {
        return false;
    }
    let nanos: f64 = DURATION_SEGMENT
        .captures_iter(value)
        .map(|segment| {
            let amount: f64 = segment[1].parse().unwrap_or(f64::INFINITY);
            amount * unit_nanos(&segment[2])
        })
        .sum();
    nanos <= i64::MAX as f64
}

/// Required decimal field: records `IsRequired` when empty and
/// `IsNotValidNumber` when malformed.
pub(crate) fn check_decimal(errs: &mut Errors, path: &str, value: &str) -> Option<Decimal> {
    match parse_decimal(value) {
        Ok(decimal) => Some(decimal),
        Err(NumberError::Empty) => {
            errs.add(path, Violation::IsRequired);
            None
        }
        Err(_) => {
            errs.add(path, Violation::IsNotValidNumber);
            None
        }
    }
}

/// Required strictly positive integer field.
pub(crate) fn check_positive_integer(errs: &mut Errors, path: &str, value: &str) {
    match parse_integer(value) {
        Ok(Sign::Positive) => {}
        Ok(_) => errs.add(path, Violation::MustBePositive),
        Err(NumberError::Empty) => errs.add(path, Violation::IsRequired),
        Err(_) => errs.add(path, Violation::IsNotValidNumber),
    }
}
