//! Placement data model: wires, dipoles, supply, and goal.
//!
//! A [`Board`] is the persistent state produced by level loading or live
//! editing. It is never solved incrementally: every "execute" action rebuilds
//! a fresh [`crate::circuit::Graph`] from it and discards the graph after the
//! verdict.

use crate::circuit::types::{DipoleId, GridPos};
use crate::components::Dipole;

/// A plain wire occupying two adjacent grid cells (zero resistance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSegment {
    pub poles: (GridPos, GridPos),
}

impl WireSegment {
    /// Create a wire between two cells.
    pub fn new(a: GridPos, b: GridPos) -> Self {
        Self { poles: (a, b) }
    }
}

/// The electrical quantity checked at the target dipole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Voltage across the target, in volts
    Tension,
    /// Current through the circuit, in amperes
    Intensity,
}

/// The puzzle's success condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    /// Which quantity is checked
    pub quantity: Quantity,
    /// Expected value of that quantity
    pub expected: f64,
    /// Relative tolerance fraction, strictly between 0 and 1
    pub tolerance: f64,
}

/// The circuit's source: input tension and the breaker's current capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Supply {
    /// Input tension in volts
    pub tension: f64,
    /// Maximum current the source tolerates before tripping, in amperes
    pub max_intensity: f64,
}

/// The full placement state of one puzzle.
#[derive(Debug, Clone)]
pub struct Board {
    /// Placed wire segments
    pub wires: Vec<WireSegment>,
    /// Placed dipoles (persistent component state lives here)
    pub dipoles: Vec<Dipole>,
    /// Cell where the source's input terminal attaches
    pub input_cell: GridPos,
    /// Cell where the source's output terminal attaches
    pub output_cell: GridPos,
    /// Source characteristics
    pub supply: Supply,
    /// Success condition
    pub goal: Goal,
}

impl Board {
    /// Create an empty board with fixed terminal cells.
    pub fn new(input_cell: GridPos, output_cell: GridPos, supply: Supply, goal: Goal) -> Self {
        Self {
            wires: Vec::new(),
            dipoles: Vec::new(),
            input_cell,
            output_cell,
            supply,
            goal,
        }
    }

    /// Place a wire between two cells.
    pub fn add_wire(&mut self, a: GridPos, b: GridPos) {
        self.wires.push(WireSegment::new(a, b));
    }

    /// Place a dipole and return its id.
    pub fn add_dipole(&mut self, dipole: Dipole) -> DipoleId {
        self.dipoles.push(dipole);
        DipoleId(self.dipoles.len() - 1)
    }

    /// The dipole flagged as the target, if exactly the flag is set anywhere.
    pub fn target(&self) -> Option<DipoleId> {
        self.dipoles
            .iter()
            .position(|d| d.is_target)
            .map(DipoleId)
    }

    /// Look up a dipole by id.
    pub fn dipole(&self, id: DipoleId) -> &Dipole {
        &self.dipoles[id.0]
    }

    /// Look up a dipole by id, mutably.
    pub fn dipole_mut(&mut self, id: DipoleId) -> &mut Dipole {
        &mut self.dipoles[id.0]
    }
}
