//! Core types for grid placement and the circuit graph.

use std::fmt;

use crate::GRID_SIZE;

/// A cell coordinate on the placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: u8,
    pub y: u8,
}

impl GridPos {
    /// Create a new grid position.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check that the cell lies on the placement grid.
    pub fn in_bounds(&self) -> bool {
        (self.x as usize) < GRID_SIZE && (self.y as usize) < GRID_SIZE
    }

    /// Chebyshev distance to another cell (diagonal steps count as 1).
    pub fn chebyshev(&self, other: &GridPos) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True when the two cells are orthogonal neighbors.
    pub fn is_axis_neighbor(&self, other: &GridPos) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A unique identifier for a vertex in the per-solve graph arena.
///
/// Identity IS the arena index: two vertices are the same vertex only if
/// their ids are equal. Vertex names are diagnostics and may collide, so
/// nothing ever compares vertices by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// A unique identifier for a persistent dipole on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DipoleId(pub usize);

impl fmt::Display for DipoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(GridPos::new(0, 0).in_bounds());
        assert!(GridPos::new(7, 7).in_bounds());
        assert!(!GridPos::new(8, 0).in_bounds());
        assert!(!GridPos::new(3, 8).in_bounds());
    }

    #[test]
    fn test_chebyshev_distance() {
        let origin = GridPos::new(2, 2);
        assert_eq!(origin.chebyshev(&GridPos::new(2, 2)), 0);
        assert_eq!(origin.chebyshev(&GridPos::new(3, 2)), 1);
        assert_eq!(origin.chebyshev(&GridPos::new(3, 3)), 1);
        assert_eq!(origin.chebyshev(&GridPos::new(4, 2)), 2);
    }

    #[test]
    fn test_axis_neighbor() {
        let origin = GridPos::new(2, 2);
        assert!(origin.is_axis_neighbor(&GridPos::new(1, 2)));
        assert!(origin.is_axis_neighbor(&GridPos::new(2, 3)));
        // Diagonal neighbors are Chebyshev-adjacent but not axis-aligned
        assert!(!origin.is_axis_neighbor(&GridPos::new(3, 3)));
        assert!(!origin.is_axis_neighbor(&GridPos::new(2, 2)));
    }
}
