//! Arithmetic on operand pairs.
//!
//! Pure functions with no shared state. Only [`divide`] can fail.
//! [`parse_operand`] is the single place where text becomes a number, so it is
//! also where a non-numeric operand is rejected.

use crate::error::{CalcError, CalcResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is exactly zero
/// (`-0.0` included). No epsilon comparison is made.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Read an operand token as a number.
///
/// Strings are never coerced beyond what `f64::from_str` accepts, so `"two"` or
/// `"4x"` fail with [`CalcError::TypeMismatch`].
pub fn parse_operand(token: &str) -> CalcResult<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CalcError::TypeMismatch {
            value: token.to_string(),
        })
}
