//! Circuit solving: enumeration, extraction, reduction, verdict.
//!
//! One [`solve`] call is a single synchronous batch pass over the board's
//! placement state:
//!
//! 1. Validate the placement and convert it into a fresh vertex graph
//! 2. Enumerate every simple path from the input terminal to the output
//! 3. Cut the paths into deduplicated branches at junctions and terminals
//! 4. Collapse parallel groups and series runs to one total resistance
//! 5. Compute the global current with Ohm's law and evaluate the goal
//!
//! Everything transient is rebuilt per call, so re-running a solve on an
//! unchanged board is idempotent. No path from input to output is an open
//! circuit (zero current); exactly zero total resistance is a short circuit,
//! reported through the current sentinel rather than an error.

pub(crate) mod branch;
pub(crate) mod paths;
mod reduce;
mod verdict;

pub use branch::{extract_branches, Branch};
pub use paths::enumerate_paths;
pub use reduce::{reduce, Reduction};
pub use verdict::{evaluate, Verdict};

use crate::circuit::{Board, Graph};
use crate::error::Result;

/// Sentinel current reported when the total resistance is exactly zero.
pub const SHORT_CIRCUIT_CURRENT: f64 = f64::INFINITY;

/// One surviving branch, named for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchReport {
    /// Name of the branch's start node
    pub start: String,
    /// Name of the branch's end node
    pub end: String,
    /// Aggregate resistance in ohms
    pub resistance: f64,
    /// Number of elements in the run
    pub elements: usize,
}

/// The result of one solve pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Pass/fail/short-circuit outcome
    pub verdict: Verdict,
    /// Global current in amperes; infinite for a short circuit
    pub current: f64,
    /// Total equivalent resistance in ohms; infinite for an open circuit
    pub total_resistance: f64,
    /// The final series branch decomposition
    pub branches: Vec<BranchReport>,
}

/// Solve the board once and, on success, energize the target dipole.
///
/// The board itself is only mutated through the target's success hook;
/// placement state is untouched, so a second call sees the same circuit.
pub fn solve(board: &mut Board) -> Result<Solution> {
    let mut graph = Graph::from_board(board)?;
    let target = graph.target_dipole;

    let paths = enumerate_paths(&graph);
    if paths.is_empty() {
        // Open circuit: nothing flows, but it is a legitimate outcome
        let verdict = evaluate(
            &board.goal,
            &board.supply,
            board.dipole(target).resistance,
            0.0,
        );
        return Ok(Solution {
            verdict,
            current: 0.0,
            total_resistance: f64::INFINITY,
            branches: Vec::new(),
        });
    }

    let branches = extract_branches(&graph, &paths)?;
    let reduction = reduce(&mut graph, branches)?;

    let current = if reduction.total_resistance == 0.0 {
        SHORT_CIRCUIT_CURRENT
    } else {
        board.supply.tension / reduction.total_resistance
    };

    let verdict = evaluate(
        &board.goal,
        &board.supply,
        board.dipole(target).resistance,
        current,
    );
    if verdict == Verdict::Success {
        board.dipole_mut(target).energize();
    }

    let branches = reduction
        .branches
        .iter()
        .map(|b| BranchReport {
            start: graph.vertex(b.start).name.clone(),
            end: graph.vertex(b.end).name.clone(),
            resistance: b.resistance,
            elements: b.elements.len(),
        })
        .collect();

    Ok(Solution {
        verdict,
        current,
        total_resistance: reduction.total_resistance,
        branches,
    })
}
