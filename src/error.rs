//! Error types for calculations and the operation registry.

use thiserror::Error;

/// Errors raised by the operation library, calculations and the registry.
///
/// Every variant propagates synchronously to the immediate caller. Presenting
/// the message is left to whoever drives the core (the REPL or the CLI).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operand could not be read as a number.
    #[error("Unsupported operand '{value}': expected a number")]
    TypeMismatch { value: String },

    /// The divisor was exactly zero.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// A name was registered twice.
    #[error("Calculation type '{name}' is already registered.")]
    DuplicateRegistration { name: String },

    /// No calculation is registered under the requested name.
    #[error("Unsupported calculation type: '{name}'. Available types: {}", .available.join(", "))]
    UnknownOperation {
        name: String,
        available: Vec<String>,
    },
}

pub type CalcResult<T> = Result<T, CalcError>;
