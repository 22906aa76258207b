//! Branches: maximal series runs between cut points.

use unordered_pair::UnorderedPair;

use crate::circuit::{Graph, VertexId};
use crate::error::{Result, VoltgridError};

/// A maximal run of series-connected elements between two cut points.
///
/// `elements` holds only element vertices, in traversal order; junctions are
/// never members. The run's resistance is the sum of its elements' (series
/// rule). The two endpoints are always distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub start: VertexId,
    pub end: VertexId,
    pub elements: Vec<VertexId>,
    pub resistance: f64,
}

impl Branch {
    /// Build a branch, summing its elements' resistances.
    pub fn new(graph: &Graph, start: VertexId, end: VertexId, elements: Vec<VertexId>) -> Self {
        debug_assert_ne!(start, end, "zero-length branch");
        let resistance = elements
            .iter()
            .filter_map(|&e| graph.vertex(e).resistance())
            .sum();
        Self {
            start,
            end,
            elements,
            resistance,
        }
    }

    /// The endpoint pair, orientation-free. Two branches are parallel iff
    /// their endpoint pairs are equal.
    pub fn endpoints(&self) -> UnorderedPair<VertexId> {
        UnorderedPair(self.start, self.end)
    }

    /// True when `node` is one of the branch's endpoints.
    pub fn touches(&self, node: VertexId) -> bool {
        self.start == node || self.end == node
    }
}

/// Cut the enumerated paths into a deduplicated list of branches.
///
/// Each path is walked in order, accumulating element vertices; every
/// registered cut point (terminal or promoted junction) closes the current
/// branch. Pass-through cells are skipped: they are neither accumulated nor
/// cut at. Multiple paths routinely traverse the same physical branch, so
/// the result is deduplicated by structural equality.
pub fn extract_branches(graph: &Graph, paths: &[Vec<VertexId>]) -> Result<Vec<Branch>> {
    let mut branches: Vec<Branch> = Vec::new();

    for path in paths {
        if path.len() < 2 {
            return Err(VoltgridError::invalid_path(format!(
                "path has {} vertices, expected at least 2",
                path.len()
            )));
        }
        if !graph.is_node(path[0]) {
            return Err(VoltgridError::invalid_path(format!(
                "path begins at '{}', which is not a cut point",
                graph.vertex(path[0]).name
            )));
        }

        let mut cut = path[0];
        let mut elements = Vec::new();
        for &vertex in &path[1..] {
            if graph.is_node(vertex) {
                let branch = Branch::new(graph, cut, vertex, std::mem::take(&mut elements));
                if !branches.contains(&branch) {
                    branches.push(branch);
                }
                cut = vertex;
            } else if graph.vertex(vertex).is_element() {
                elements.push(vertex);
            }
        }
        if !elements.is_empty() {
            let last = path[path.len() - 1];
            return Err(VoltgridError::invalid_path(format!(
                "path ends at '{}', which is not a cut point",
                graph.vertex(last).name
            )));
        }
    }

    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Board, Goal, GridPos, Quantity, Supply};
    use crate::components::Dipole;
    use crate::solver::paths::enumerate_paths;

    fn board(output: GridPos) -> Board {
        Board::new(
            GridPos::new(0, 0),
            output,
            Supply {
                tension: 100.0,
                max_intensity: 16.0,
            },
            Goal {
                quantity: Quantity::Tension,
                expected: 50.0,
                tolerance: 0.05,
            },
        )
    }

    fn parallel_board() -> Board {
        let mut b = board(GridPos::new(4, 0));
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
        b.add_dipole(Dipole::resistor(
            "R1",
            GridPos::new(1, 0),
            GridPos::new(2, 0),
            100.0,
        ));
        b.add_wire(GridPos::new(1, 0), GridPos::new(1, 1));
        b.add_dipole(Dipole::resistor(
            "R2",
            GridPos::new(1, 1),
            GridPos::new(2, 1),
            100.0,
        ));
        b.add_wire(GridPos::new(2, 1), GridPos::new(2, 0));
        b.add_dipole(
            Dipole::resistor("R3", GridPos::new(2, 0), GridPos::new(3, 0), 50.0).target(),
        );
        b.add_wire(GridPos::new(3, 0), GridPos::new(4, 0));
        b
    }

    #[test]
    fn test_series_path_is_one_branch() {
        let mut b = board(GridPos::new(4, 0));
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
        b.add_dipole(Dipole::resistor(
            "R1",
            GridPos::new(1, 0),
            GridPos::new(2, 0),
            30.0,
        ));
        b.add_dipole(
            Dipole::resistor("R2", GridPos::new(2, 0), GridPos::new(3, 0), 70.0).target(),
        );
        b.add_wire(GridPos::new(3, 0), GridPos::new(4, 0));

        let graph = Graph::from_board(&b).unwrap();
        let paths = enumerate_paths(&graph);
        let branches = extract_branches(&graph, &paths).unwrap();

        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].start, graph.entry);
        assert_eq!(branches[0].end, graph.exit);
        assert_eq!(branches[0].elements.len(), 2);
        assert!((branches[0].resistance - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_branches_deduplicated() {
        let graph = Graph::from_board(&parallel_board()).unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 2);

        let branches = extract_branches(&graph, &paths).unwrap();
        // IN~fork (wire), fork~join via R1, fork~join via R2, join~OUT via R3;
        // the shared segments appear once despite two paths crossing them.
        assert_eq!(branches.len(), 4);

        let fork = graph.find_vertex("J(1,0)").unwrap();
        let join = graph.find_vertex("J(2,0)").unwrap();
        let parallel: Vec<_> = branches
            .iter()
            .filter(|b| b.endpoints() == UnorderedPair(fork, join))
            .collect();
        assert_eq!(parallel.len(), 2);
        assert!(parallel.iter().all(|b| (b.resistance - 100.0).abs() < 1e-12));
    }

    #[test]
    fn test_wire_only_branch_has_zero_resistance() {
        let graph = Graph::from_board(&parallel_board()).unwrap();
        let paths = enumerate_paths(&graph);
        let branches = extract_branches(&graph, &paths).unwrap();

        let fork = graph.find_vertex("J(1,0)").unwrap();
        let lead = branches
            .iter()
            .find(|b| b.endpoints() == UnorderedPair(graph.entry, fork))
            .unwrap();
        assert!(lead.elements.is_empty());
        assert_eq!(lead.resistance, 0.0);
    }

    #[test]
    fn test_malformed_path_rejected() {
        let graph = Graph::from_board(&parallel_board()).unwrap();

        // A one-vertex path can never reach a closing cut point
        let err = extract_branches(&graph, &[vec![graph.entry]]).unwrap_err();
        assert!(matches!(err, VoltgridError::InvalidPath { .. }));

        // A path ending mid-branch leaves a non-empty accumulator
        let r1 = graph.find_vertex("R1").unwrap();
        let fork = graph.find_vertex("J(1,0)").unwrap();
        let err = extract_branches(&graph, &[vec![graph.entry, fork, r1]]).unwrap_err();
        assert!(matches!(err, VoltgridError::InvalidPath { .. }));
    }
}
