//! One-shot evaluation and operation listing.

use anyhow::Result;

use crate::calculation::CalculationRegistry;
use crate::error::CalcResult;
use crate::{debug_event, operation};

/// Parse both operands, build the calculation and render it.
pub fn evaluate(registry: &CalculationRegistry, name: &str, a: &str, b: &str) -> CalcResult<String> {
    let a = operation::parse_operand(a)?;
    let b = operation::parse_operand(b)?;
    registry.create(name, a, b)?.render()
}

/// Run eval command - print the rendered calculation.
pub fn run_eval(registry: &CalculationRegistry, name: &str, a: &str, b: &str) -> Result<()> {
    debug_event!("cli", "eval", "{name} {a} {b}");
    let rendered = evaluate(registry, name, a, b)?;
    println!("{rendered}");
    Ok(())
}

/// Run list command - print registered operation names, one per line.
pub fn run_list(registry: &CalculationRegistry) -> Result<()> {
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
