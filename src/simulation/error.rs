//! Error kinds surfaced by the simulation core
//!
//! Two recoverable-vs-fatal categories:
//! - [`SimError::Validation`]: a spawn rejected at the boundary; nothing
//!   was appended to the collection
//! - [`SimError::DegenerateGeometry`]: two distinct bodies at zero
//!   separation during force computation; the tick is aborted before any
//!   NaN can enter `velocity` or `position`
//!
//! Everything else (overflow toward infinity for extreme mass/distance
//! ratios) is ordinary floating-point behavior, not an error.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Spawn rejected: empty label, empty/non-numeric mass text, or a
    /// non-positive mass value
    Validation(String),
    /// Two distinct bodies exactly coincident during force computation
    DegenerateGeometry { a: String, b: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Validation(msg) => write!(f, "invalid spawn request: {msg}"),
            SimError::DegenerateGeometry { a, b } => {
                write!(f, "bodies {a:?} and {b:?} are at zero distance")
            }
        }
    }
}

impl std::error::Error for SimError {}
