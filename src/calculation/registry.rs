//! Registry mapping operation names to calculation kinds.
//!
//! Names are normalized to lowercase on both insert and lookup. The registry is
//! an ordinary value: callers construct it, populate it, and pass it to whatever
//! needs to create calculations. There is no process-wide instance.

use std::collections::BTreeMap;

use super::{Calculation, CalculationKind};
use crate::error::{CalcError, CalcResult};

/// Name-keyed registry of calculation constructors.
///
/// Two states: empty (fresh or after [`reset`](Self::reset)) and populated.
/// Mutation takes `&mut self`, so concurrent hosts must serialize writers
/// themselves.
#[derive(Debug, Default, Clone)]
pub struct CalculationRegistry {
    /// Sorted by name so error messages and listings come out ordered.
    calculations: BTreeMap<String, CalculationKind>,
}

impl CalculationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the four built-in operations.
    pub fn with_builtins() -> Self {
        Self {
            calculations: CalculationKind::BUILTINS
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind))
                .collect(),
        }
    }

    /// Register add, subtract, multiply and divide.
    ///
    /// Fails on the first name that is already present.
    pub fn register_builtins(&mut self) -> CalcResult<()> {
        for (name, kind) in CalculationKind::BUILTINS {
            self.register(name, kind)?;
        }
        Ok(())
    }

    /// Bind `name` (case-insensitive) to `kind`.
    pub fn register(&mut self, name: &str, kind: CalculationKind) -> CalcResult<()> {
        let key = name.to_lowercase();
        if self.calculations.contains_key(&key) {
            return Err(CalcError::DuplicateRegistration {
                name: name.to_string(),
            });
        }
        self.calculations.insert(key, kind);
        Ok(())
    }

    /// Build the calculation registered under `name`.
    ///
    /// Fails with [`CalcError::UnknownOperation`] listing every registered name.
    pub fn create(&self, name: &str, a: f64, b: f64) -> CalcResult<Calculation> {
        match self.calculations.get(&name.to_lowercase()) {
            Some(kind) => Ok(kind.bind(a, b)),
            None => Err(CalcError::UnknownOperation {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Remove every registration.
    pub fn reset(&mut self) {
        self.calculations.clear();
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.calculations.keys().map(String::as_str)
    }

    /// Registered names with their kinds, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, CalculationKind)> {
        self.calculations
            .iter()
            .map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.calculations.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }
}
