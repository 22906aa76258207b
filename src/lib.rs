//! # Voltgrid
//!
//! A DC circuit solver for grid-placed electronics puzzles.
//!
//! This library provides:
//! - A placement model for wires and two-terminal components (dipoles) on an 8x8 grid
//! - A grid-to-graph converter that collapses wire runs and promotes junctions
//! - Exhaustive path enumeration and branch extraction
//! - Iterative series/parallel reduction down to one equivalent resistance
//! - Ohm's-law current computation and a pass/fail/short-circuit verdict
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Placement model, validation, and the vertex graph
//! - [`components`] - Persistent dipole models (resistors, lamps) and their hooks
//! - [`solver`] - Path enumeration, branch extraction, reduction, and the verdict
//!
//! ## Usage
//!
//! ```
//! use voltgrid::{solve, Board, Dipole, Goal, GridPos, Quantity, Supply, Verdict};
//!
//! let mut board = Board::new(
//!     GridPos::new(0, 0),
//!     GridPos::new(3, 0),
//!     Supply { tension: 230.0, max_intensity: 16.0 },
//!     Goal { quantity: Quantity::Tension, expected: 230.0, tolerance: 0.05 },
//! );
//! board.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
//! board.add_dipole(Dipole::lamp("L1", GridPos::new(1, 0), GridPos::new(2, 0), 230.0).target());
//! board.add_wire(GridPos::new(2, 0), GridPos::new(3, 0));
//!
//! let solution = solve(&mut board).unwrap();
//! assert_eq!(solution.verdict, Verdict::Success);
//! assert!((solution.current - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Solve Method
//!
//! One solve is a single synchronous pass, rebuilt from scratch every time:
//!
//! 1. Validate the placement (pole spans, occupancy, exactly one target)
//! 2. Convert the grid placement into a vertex graph
//! 3. Enumerate every simple path from the input terminal to the output terminal
//! 4. Cut the paths into deduplicated branches at junctions and terminals
//! 5. Collapse parallel groups and series runs until one resistance remains
//! 6. Apply Ohm's law and compare the target quantity against the goal
//!
//! An open circuit is zero current, a zero total resistance is the distinct
//! short-circuit outcome; neither is an error.

pub mod circuit;
pub mod components;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Board, Goal, Graph, GridPos, Quantity, Supply, WireSegment};
pub use components::{Dipole, DipoleKind};
pub use error::{Result, VoltgridError};
pub use solver::{solve, Solution, Verdict};

/// Width and height of the placement grid, in cells.
pub const GRID_SIZE: usize = 8;
