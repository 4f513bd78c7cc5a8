//! Error types for walk construction and configuration checks.
//!
//! None of the simulation operations fail: degenerate parameters simply
//! produce degenerate walks. These errors are only returned by explicit
//! constructors and by the opt-in [`AbsorbingConfig::validate`] check.
//!
//! [`AbsorbingConfig::validate`]: crate::absorbing::AbsorbingConfig::validate

use thiserror::Error;

/// Walk construction or configuration error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WalkError {
    /// A batch row does not match the length of the first row.
    #[error("Ragged batch: row {row} has {found} steps, expected {expected}")]
    RaggedBatch {
        /// Index of the offending row.
        row: usize,
        /// Step count of the first row.
        expected: usize,
        /// Step count of the offending row.
        found: usize,
    },

    /// Step bias outside [0, 1].
    #[error("Bias {0} is outside [0, 1]")]
    BiasOutOfRange(f64),

    /// Left boundary not strictly below the right boundary.
    #[error("Degenerate boundaries: left {left} must be below right {right}")]
    DegenerateBoundaries {
        /// Left absorbing boundary.
        left: i64,
        /// Right absorbing boundary.
        right: i64,
    },

    /// Start position not strictly inside the boundaries.
    #[error("Start {start} is not strictly inside ({left}, {right})")]
    StartOutsideInterval {
        /// Starting position.
        start: i64,
        /// Left absorbing boundary.
        left: i64,
        /// Right absorbing boundary.
        right: i64,
    },
}
