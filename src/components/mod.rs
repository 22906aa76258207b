//! Persistent dipole models.
//!
//! A dipole is the durable half of a placed component: its poles, resistance,
//! target flag, and the side effect it carries. The transient half (graph
//! adjacency) lives in [`crate::circuit::Graph`] and is rebuilt from scratch
//! on every solve, so a dipole never holds stale adjacency between runs.

use crate::circuit::GridPos;

/// The kind of a dipole, with any kind-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum DipoleKind {
    /// A plain resistor; its hooks are no-ops.
    Resistor,
    /// A lamp that lights up when the solve succeeds on it.
    Lamp { lit: bool },
}

/// A two-terminal component occupying two adjacent grid cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Dipole {
    /// Name for diagnostics and error messages
    pub name: String,
    /// The two cells the dipole occupies
    pub poles: (GridPos, GridPos),
    /// Resistance in ohms (finite, >= 0; 0 is an ideal conductor)
    pub resistance: f64,
    /// Whether this dipole is the puzzle's checked target
    pub is_target: bool,
    /// Kind and kind-specific state
    pub kind: DipoleKind,
}

impl Dipole {
    /// Create a resistor.
    pub fn resistor(name: impl Into<String>, a: GridPos, b: GridPos, resistance: f64) -> Self {
        Self {
            name: name.into(),
            poles: (a, b),
            resistance,
            is_target: false,
            kind: DipoleKind::Resistor,
        }
    }

    /// Create a lamp, initially unlit.
    pub fn lamp(name: impl Into<String>, a: GridPos, b: GridPos, resistance: f64) -> Self {
        Self {
            name: name.into(),
            poles: (a, b),
            resistance,
            is_target: false,
            kind: DipoleKind::Lamp { lit: false },
        }
    }

    /// Flag this dipole as the target.
    pub fn target(mut self) -> Self {
        self.is_target = true;
        self
    }

    /// Voltage across the dipole at the given current (Ohm's law).
    pub fn tension_at(&self, current: f64) -> f64 {
        self.resistance * current
    }

    /// Success hook: a lamp lights up, a resistor has nothing to show.
    pub fn energize(&mut self) {
        if let DipoleKind::Lamp { lit } = &mut self.kind {
            *lit = true;
        }
    }

    /// Undo hook, invoked by the caller on explicit request. The solver
    /// never calls this on an ordinary failure.
    pub fn de_energize(&mut self) {
        if let DipoleKind::Lamp { lit } = &mut self.kind {
            *lit = false;
        }
    }

    /// Whether a lamp is currently lit. Always false for resistors.
    pub fn is_lit(&self) -> bool {
        matches!(self.kind, DipoleKind::Lamp { lit: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohms_law_query() {
        let lamp = Dipole::lamp("L1", GridPos::new(0, 0), GridPos::new(1, 0), 230.0);
        assert!((lamp.tension_at(1.0) - 230.0).abs() < 1e-12);
        assert!((lamp.tension_at(0.5) - 115.0).abs() < 1e-12);
    }

    #[test]
    fn test_lamp_hooks() {
        let mut lamp = Dipole::lamp("L1", GridPos::new(0, 0), GridPos::new(1, 0), 100.0);
        assert!(!lamp.is_lit());
        lamp.energize();
        assert!(lamp.is_lit());
        lamp.de_energize();
        assert!(!lamp.is_lit());
    }

    #[test]
    fn test_resistor_hooks_are_noops() {
        let mut r = Dipole::resistor("R1", GridPos::new(0, 0), GridPos::new(1, 0), 100.0);
        r.energize();
        assert!(!r.is_lit());
        assert_eq!(r.kind, DipoleKind::Resistor);
    }
}
