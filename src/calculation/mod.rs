//! Calculations: an operand pair bound to one arithmetic operation.
//!
//! The set of operations is closed ([`CalculationKind`]). Each kind carries its
//! display name and operation word explicitly, so rendering never depends on
//! type names.
//!
//! ```
//! use tally::calculation::{Calculation, CalculationKind};
//!
//! let calc = Calculation::new(CalculationKind::Add, 2.0, 5.0);
//! assert_eq!(calc.execute().unwrap(), 7.0);
//! assert_eq!(calc.render().unwrap(), "AddCalculation: 2 Add 5 = 7");
//! assert_eq!(format!("{calc:?}"), "AddCalculation(a=2, b=5)");
//! ```

pub mod registry;

pub use registry::CalculationRegistry;

use std::fmt;

use crate::error::CalcResult;
use crate::operation;

/// The built-in arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalculationKind {
    /// Every built-in kind paired with the name it is registered under.
    pub const BUILTINS: [(&'static str, CalculationKind); 4] = [
        ("add", CalculationKind::Add),
        ("subtract", CalculationKind::Subtract),
        ("multiply", CalculationKind::Multiply),
        ("divide", CalculationKind::Divide),
    ];

    /// Identifier shown in renders, e.g. `AddCalculation`.
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationKind::Add => "AddCalculation",
            CalculationKind::Subtract => "SubtractCalculation",
            CalculationKind::Multiply => "MultiplyCalculation",
            CalculationKind::Divide => "DivideCalculation",
        }
    }

    /// Word placed between the operands, e.g. `Add`.
    pub fn operation_word(&self) -> &'static str {
        match self {
            CalculationKind::Add => "Add",
            CalculationKind::Subtract => "Subtract",
            CalculationKind::Multiply => "Multiply",
            CalculationKind::Divide => "Divide",
        }
    }

    /// One-line description used by the REPL help.
    pub fn description(&self) -> &'static str {
        match self {
            CalculationKind::Add => "Adds two numbers.",
            CalculationKind::Subtract => "Subtracts the second number from the first.",
            CalculationKind::Multiply => "Multiplies two numbers.",
            CalculationKind::Divide => "Divides the first number by the second.",
        }
    }

    /// Bind two operands to this kind. Never fails; operands are not validated.
    pub fn bind(self, a: f64, b: f64) -> Calculation {
        Calculation::new(self, a, b)
    }

    fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            CalculationKind::Add => Ok(operation::add(a, b)),
            CalculationKind::Subtract => Ok(operation::subtract(a, b)),
            CalculationKind::Multiply => Ok(operation::multiply(a, b)),
            CalculationKind::Divide => operation::divide(a, b),
        }
    }
}

/// An immutable operand pair bound to a [`CalculationKind`].
///
/// The result is never cached: [`Calculation::execute`] recomputes it from the
/// stored operands on every call.
#[derive(Clone, Copy, PartialEq)]
pub struct Calculation {
    kind: CalculationKind,
    a: f64,
    b: f64,
}

impl Calculation {
    pub fn new(kind: CalculationKind, a: f64, b: f64) -> Self {
        Self { kind, a, b }
    }

    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Compute the result, propagating any operation failure unchanged.
    pub fn execute(&self) -> CalcResult<f64> {
        self.kind.apply(self.a, self.b)
    }

    /// Human-readable label: `"<Name>: <a> <Word> <b> = <result>"`.
    ///
    /// Calls [`Calculation::execute`], so it fails whenever execution does.
    pub fn render(&self) -> CalcResult<String> {
        let result = self.execute()?;
        Ok(format!(
            "{}: {} {} {} = {}",
            self.kind.display_name(),
            self.a,
            self.kind.operation_word(),
            self.b,
            result
        ))
    }
}

/// Identity form `"<Name>(a=<a>, b=<b>)"`. Does not execute.
impl fmt::Debug for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(a={}, b={})",
            self.kind.display_name(),
            self.a,
            self.b
        )
    }
}
