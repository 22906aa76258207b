//! Goal evaluation: compare the solved circuit against the puzzle's goal.

use std::fmt;

use crate::circuit::{Goal, Quantity, Supply};

/// The outcome of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The target quantity is within tolerance of the goal
    Success,
    /// The circuit works but the target quantity is out of tolerance
    Failure,
    /// Zero total resistance, or current beyond the breaker's capacity
    ShortCircuit,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "success"),
            Verdict::Failure => write!(f, "failure"),
            Verdict::ShortCircuit => write!(f, "short circuit"),
        }
    }
}

/// Evaluate the goal for a solved circuit.
///
/// `target_resistance` is the resistance of the target dipole; `current` is
/// the global current, possibly the short-circuit sentinel (infinity). A
/// finite current above the supply's capacity trips the breaker and counts
/// as a short circuit too.
///
/// Evaluation itself is side-effect free; the solve driver invokes the
/// target's hook on success.
pub fn evaluate(goal: &Goal, supply: &Supply, target_resistance: f64, current: f64) -> Verdict {
    if current.is_infinite() || current > supply.max_intensity {
        return Verdict::ShortCircuit;
    }

    let measured = match goal.quantity {
        Quantity::Tension => target_resistance * current,
        Quantity::Intensity => current,
    };

    if within_tolerance(measured, goal.expected, goal.tolerance) {
        Verdict::Success
    } else {
        Verdict::Failure
    }
}

/// Relative comparison with a strict bound: `|measured - expected| / |expected|
/// < tolerance`. An expected value of zero cannot anchor a relative check, so
/// it falls back to an absolute one.
fn within_tolerance(measured: f64, expected: f64, tolerance: f64) -> bool {
    if expected == 0.0 {
        measured.abs() < tolerance
    } else {
        ((measured - expected) / expected).abs() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(quantity: Quantity, expected: f64) -> Goal {
        Goal {
            quantity,
            expected,
            tolerance: 0.05,
        }
    }

    fn supply() -> Supply {
        Supply {
            tension: 230.0,
            max_intensity: 16.0,
        }
    }

    #[test]
    fn test_tension_within_tolerance() {
        // 230 ohm at 1 A reads 230 V
        let v = evaluate(&goal(Quantity::Tension, 230.0), &supply(), 230.0, 1.0);
        assert_eq!(v, Verdict::Success);
    }

    #[test]
    fn test_intensity_out_of_tolerance() {
        let v = evaluate(&goal(Quantity::Intensity, 1.0), &supply(), 230.0, 2.0);
        assert_eq!(v, Verdict::Failure);
    }

    #[test]
    fn test_tolerance_bound_is_strict() {
        // Expected 10, tolerance 5%: 10.51 is out, 10.49 is in
        assert!(!within_tolerance(10.51, 10.0, 0.05));
        assert!(within_tolerance(10.49, 10.0, 0.05));
        // Exactly on the bound fails the strict inequality
        assert!(!within_tolerance(10.5, 10.0, 0.05));
    }

    #[test]
    fn test_zero_expected_uses_absolute_comparison() {
        assert!(within_tolerance(0.01, 0.0, 0.05));
        assert!(!within_tolerance(0.06, 0.0, 0.05));
    }

    #[test]
    fn test_short_sentinel_preempts_goal_checks() {
        let v = evaluate(
            &goal(Quantity::Tension, 230.0),
            &supply(),
            230.0,
            f64::INFINITY,
        );
        assert_eq!(v, Verdict::ShortCircuit);
    }

    #[test]
    fn test_breaker_trips_on_overcurrent() {
        // 20 A through a 16 A supply, even if the goal would match
        let v = evaluate(&goal(Quantity::Intensity, 20.0), &supply(), 10.0, 20.0);
        assert_eq!(v, Verdict::ShortCircuit);
    }
}
