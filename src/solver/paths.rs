//! Exhaustive simple-path enumeration.

use crate::circuit::{Graph, VertexId};

/// Enumerate every simple path from the graph's entry to its exit.
///
/// Depth-first search with an on-path marker, not a global visited set: a
/// vertex consumed by one completed path is still explorable from a sibling
/// branch of the search. Dead ends are pruned silently. A disconnected
/// entry/exit pair yields an empty list, which downstream treats as an open
/// circuit (zero current), never as an error.
pub fn enumerate_paths(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut paths = Vec::new();
    let mut on_path = vec![false; graph.vertex_count()];
    let mut trail = Vec::new();
    visit(graph, graph.entry, &mut on_path, &mut trail, &mut paths);
    paths
}

fn visit(
    graph: &Graph,
    vertex: VertexId,
    on_path: &mut [bool],
    trail: &mut Vec<VertexId>,
    paths: &mut Vec<Vec<VertexId>>,
) {
    on_path[vertex.0] = true;
    trail.push(vertex);

    if vertex == graph.exit {
        paths.push(trail.clone());
    } else {
        for &next in graph.adjacent(vertex) {
            if !on_path[next.0] {
                visit(graph, next, on_path, trail, paths);
            }
        }
    }

    // Backtrack so the vertex can serve an unrelated branch of the search
    trail.pop();
    on_path[vertex.0] = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Board, Goal, GridPos, Quantity, Supply};
    use crate::components::Dipole;

    fn board(output: GridPos) -> Board {
        Board::new(
            GridPos::new(0, 0),
            output,
            Supply {
                tension: 230.0,
                max_intensity: 16.0,
            },
            Goal {
                quantity: Quantity::Intensity,
                expected: 1.0,
                tolerance: 0.05,
            },
        )
    }

    #[test]
    fn test_single_series_path() {
        let mut b = board(GridPos::new(3, 0));
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
        b.add_dipole(
            Dipole::resistor("R1", GridPos::new(1, 0), GridPos::new(2, 0), 230.0).target(),
        );
        b.add_wire(GridPos::new(2, 0), GridPos::new(3, 0));

        let graph = Graph::from_board(&b).unwrap();
        let paths = enumerate_paths(&graph);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].first(), Some(&graph.entry));
        assert_eq!(paths[0].last(), Some(&graph.exit));
        // IN, J(0,0), J(1,0), R1, J(2,0), J(3,0), OUT
        assert_eq!(paths[0].len(), 7);
    }

    #[test]
    fn test_two_parallel_paths() {
        let mut b = board(GridPos::new(3, 0));
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
        b.add_dipole(
            Dipole::resistor("R1", GridPos::new(1, 0), GridPos::new(2, 0), 100.0).target(),
        );
        b.add_wire(GridPos::new(1, 0), GridPos::new(1, 1));
        b.add_dipole(Dipole::resistor(
            "R2",
            GridPos::new(1, 1),
            GridPos::new(2, 1),
            100.0,
        ));
        b.add_wire(GridPos::new(2, 1), GridPos::new(2, 0));
        b.add_wire(GridPos::new(2, 0), GridPos::new(3, 0));

        let graph = Graph::from_board(&b).unwrap();
        assert_eq!(enumerate_paths(&graph).len(), 2);
    }

    #[test]
    fn test_dead_end_pruned() {
        let mut b = board(GridPos::new(3, 0));
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
        b.add_dipole(
            Dipole::resistor("R1", GridPos::new(1, 0), GridPos::new(2, 0), 230.0).target(),
        );
        b.add_wire(GridPos::new(2, 0), GridPos::new(3, 0));
        // A stub hanging off the path that leads nowhere
        b.add_wire(GridPos::new(1, 0), GridPos::new(1, 1));

        let graph = Graph::from_board(&b).unwrap();
        assert_eq!(enumerate_paths(&graph).len(), 1);
    }

    #[test]
    fn test_disconnected_yields_empty_list() {
        let mut b = board(GridPos::new(7, 7));
        b.add_dipole(
            Dipole::resistor("R1", GridPos::new(1, 0), GridPos::new(2, 0), 230.0).target(),
        );
        b.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));

        let graph = Graph::from_board(&b).unwrap();
        assert!(enumerate_paths(&graph).is_empty());
    }
}
