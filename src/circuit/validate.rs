//! Placement validation.
//!
//! All configuration errors are caught here, before any graph is built, so a
//! failed solve never leaves a partially constructed graph behind.

use std::collections::HashSet;

use unordered_pair::UnorderedPair;

use crate::circuit::board::Board;
use crate::circuit::types::{DipoleId, GridPos};
use crate::error::{Result, VoltgridError};
use crate::GRID_SIZE;

/// Validate a board for solving and return the single target dipole.
///
/// Checks:
/// - Every pole (and both terminal cells) lies on the grid
/// - Wires span Chebyshev-adjacent cells; dipoles must also be axis-aligned
/// - A cell pair hosts at most one conductor
/// - Exactly one dipole is flagged as the target
/// - Resistances are finite and non-negative
/// - The goal tolerance is a fraction in (0, 1); supply values are positive
pub fn validate_board(board: &Board) -> Result<DipoleId> {
    if !(board.supply.tension.is_finite() && board.supply.tension > 0.0) {
        return Err(VoltgridError::invalid_supply(
            "tension must be finite and positive",
        ));
    }
    if !(board.supply.max_intensity.is_finite() && board.supply.max_intensity > 0.0) {
        return Err(VoltgridError::invalid_supply(
            "max intensity must be finite and positive",
        ));
    }
    if !board.goal.expected.is_finite() {
        return Err(VoltgridError::invalid_goal("expected value must be finite"));
    }
    if !(board.goal.tolerance > 0.0 && board.goal.tolerance < 1.0) {
        return Err(VoltgridError::invalid_goal(
            "tolerance must be a fraction strictly between 0 and 1",
        ));
    }

    for (name, cell) in [("input terminal", board.input_cell), ("output terminal", board.output_cell)] {
        check_bounds(name, cell)?;
    }

    let mut occupied: HashSet<UnorderedPair<GridPos>> = HashSet::new();

    for (i, wire) in board.wires.iter().enumerate() {
        let name = format!("wire #{i}");
        let (a, b) = wire.poles;
        check_bounds(&name, a)?;
        check_bounds(&name, b)?;
        if a.chebyshev(&b) != 1 {
            return Err(VoltgridError::BadPoleSpan { name, a, b });
        }
        if !occupied.insert(UnorderedPair(a, b)) {
            return Err(VoltgridError::OccupiedCells { a, b });
        }
    }

    let mut target = None;
    let mut target_count = 0usize;

    for (i, dipole) in board.dipoles.iter().enumerate() {
        let (a, b) = dipole.poles;
        check_bounds(&dipole.name, a)?;
        check_bounds(&dipole.name, b)?;
        if a.chebyshev(&b) != 1 {
            return Err(VoltgridError::BadPoleSpan {
                name: dipole.name.clone(),
                a,
                b,
            });
        }
        // Diagonal spans are a wire-only privilege
        if !a.is_axis_neighbor(&b) {
            return Err(VoltgridError::DiagonalDipole {
                name: dipole.name.clone(),
                a,
                b,
            });
        }
        if !(dipole.resistance.is_finite() && dipole.resistance >= 0.0) {
            return Err(VoltgridError::InvalidResistance {
                name: dipole.name.clone(),
                value: dipole.resistance,
            });
        }
        if !occupied.insert(UnorderedPair(a, b)) {
            return Err(VoltgridError::OccupiedCells { a, b });
        }
        if dipole.is_target {
            target_count += 1;
            target = Some(DipoleId(i));
        }
    }

    if target_count > 1 {
        return Err(VoltgridError::MultipleTargets {
            count: target_count,
        });
    }
    target.ok_or(VoltgridError::NoTarget)
}

fn check_bounds(name: &str, cell: GridPos) -> Result<()> {
    if cell.in_bounds() {
        Ok(())
    } else {
        Err(VoltgridError::CellOutOfBounds {
            name: name.to_string(),
            cell,
            size: GRID_SIZE,
        })
    }
}
