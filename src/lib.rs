pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod operation;
pub mod repl;

pub use calculation::{Calculation, CalculationKind, CalculationRegistry};
pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use repl::{History, Repl};
