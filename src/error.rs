//! Error types for the Voltgrid circuit solver.
//!
//! This module provides a unified error type [`VoltgridError`] that covers
//! all error conditions that can occur during placement validation and
//! circuit solving.
//!
//! Expected electrical outcomes are deliberately NOT errors: an open circuit
//! is zero current, a short circuit is a distinct [`crate::solver::Verdict`],
//! and an out-of-tolerance target is an ordinary failure verdict.

use thiserror::Error;

use crate::circuit::GridPos;

/// Result type alias using [`VoltgridError`].
pub type Result<T> = std::result::Result<T, VoltgridError>;

/// Unified error type for all Voltgrid operations.
#[derive(Error, Debug)]
pub enum VoltgridError {
    // ============ Placement Validation Errors ============
    /// A pole lies outside the placement grid
    #[error("cell {cell} of '{name}' is outside the {size}x{size} grid")]
    CellOutOfBounds {
        name: String,
        cell: GridPos,
        size: usize,
    },

    /// A conductor spans cells that are not neighbors
    #[error("'{name}' spans non-adjacent cells {a} and {b}")]
    BadPoleSpan { name: String, a: GridPos, b: GridPos },

    /// A dipole placed diagonally (only wires may run diagonally)
    #[error("dipole '{name}' spans diagonal cells {a} and {b}; only wires may run diagonally")]
    DiagonalDipole { name: String, a: GridPos, b: GridPos },

    /// A cell pair already hosts another conductor
    #[error("cells {a} and {b} already host a conductor")]
    OccupiedCells { a: GridPos, b: GridPos },

    /// No dipole carries the target flag
    #[error("no dipole is flagged as the target")]
    NoTarget,

    /// Several dipoles carry the target flag
    #[error("{count} dipoles are flagged as the target (expected exactly one)")]
    MultipleTargets { count: usize },

    /// A dipole with a negative or non-finite resistance
    #[error("dipole '{name}' has invalid resistance {value} ohm (must be finite and >= 0)")]
    InvalidResistance { name: String, value: f64 },

    /// Malformed goal specification
    #[error("invalid goal: {message}")]
    InvalidGoal { message: String },

    /// Malformed supply specification
    #[error("invalid supply: {message}")]
    InvalidSupply { message: String },

    // ============ Internal Consistency Errors ============
    // These signal defects in the converter/enumerator, never bad user input.
    /// A path that does not begin and end on registered cut points
    #[error("malformed path: {message}")]
    InvalidPath { message: String },

    /// Reduction consumed every branch
    #[error("reduction left no branches; the entry-to-exit branch must always survive")]
    ReductionUnderflow,
}

impl VoltgridError {
    /// Create an invalid-path error
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Create an invalid-goal error
    pub fn invalid_goal(message: impl Into<String>) -> Self {
        Self::InvalidGoal {
            message: message.into(),
        }
    }

    /// Create an invalid-supply error
    pub fn invalid_supply(message: impl Into<String>) -> Self {
        Self::InvalidSupply {
            message: message.into(),
        }
    }
}
