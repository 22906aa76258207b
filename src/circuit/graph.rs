//! Vertex arena and the grid-to-graph converter.
//!
//! The graph is transient: one is built per solve and thrown away with the
//! verdict. Vertices live in an arena and are addressed by [`VertexId`], so
//! adjacency and deduplication rest on identity, never on (collidable) names.
//!
//! Grid cells become `Junction` vertices lazily, the first time a conductor
//! touches them. A cell touched by one or two conductors stays a pass-through:
//! it keeps its adjacency (its neighbors are linked through it, never around
//! it) but is not registered as a cut point. Only cells with more than two
//! incident conductors, plus the two terminals, are registered — the
//! registered set is exactly the set of branch endpoints.

use std::collections::HashSet;

use crate::circuit::board::{Board, Supply};
use crate::circuit::types::{DipoleId, GridPos, VertexId};
use crate::circuit::validate::validate_board;
use crate::error::Result;
use crate::GRID_SIZE;

/// What a vertex is, with any kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexKind {
    /// A bare connection point at a grid cell
    Junction,
    /// The source's input terminal
    Input { supply: Supply },
    /// The source's output terminal
    Output,
    /// A resistance-carrying element. `dipole` is `None` for the synthetic
    /// equivalent resistances minted during reduction.
    Element {
        dipole: Option<DipoleId>,
        resistance: f64,
    },
}

/// One vertex of the circuit graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Name for diagnostics only; names may collide
    pub name: String,
    pub kind: VertexKind,
    /// Adjacent vertices; always maintained reciprocally
    pub adjacent: Vec<VertexId>,
}

impl Vertex {
    fn new(name: impl Into<String>, kind: VertexKind) -> Self {
        Self {
            name: name.into(),
            kind,
            adjacent: Vec::new(),
        }
    }

    fn junction(name: impl Into<String>) -> Self {
        Self::new(name, VertexKind::Junction)
    }

    /// Number of incident conductors.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// True for resistance-carrying vertices.
    pub fn is_element(&self) -> bool {
        matches!(self.kind, VertexKind::Element { .. })
    }

    /// Resistance for element vertices, `None` otherwise.
    pub fn resistance(&self) -> Option<f64> {
        match self.kind {
            VertexKind::Element { resistance, .. } => Some(resistance),
            _ => None,
        }
    }
}

/// The per-solve circuit graph.
#[derive(Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    /// The input terminal
    pub entry: VertexId,
    /// The output terminal
    pub exit: VertexId,
    /// The board dipole whose quantity the goal checks
    pub target_dipole: DipoleId,
    /// Registered cut points: terminals and promoted junctions
    nodes: HashSet<VertexId>,
}

impl Graph {
    /// Build a graph from a board's placement state.
    ///
    /// Validates the board first; on error nothing is built.
    pub fn from_board(board: &Board) -> Result<Self> {
        let target_dipole = validate_board(board)?;

        let mut graph = Graph {
            vertices: Vec::new(),
            entry: VertexId(0),
            exit: VertexId(0),
            target_dipole,
            nodes: HashSet::new(),
        };
        // Lazily-created junction vertex per touched cell
        let mut cells: Vec<Option<VertexId>> = vec![None; GRID_SIZE * GRID_SIZE];

        for wire in &board.wires {
            let a = graph.cell_vertex(&mut cells, wire.poles.0);
            let b = graph.cell_vertex(&mut cells, wire.poles.1);
            graph.link(a, b);
        }

        for (idx, dipole) in board.dipoles.iter().enumerate() {
            let element = graph.add_vertex(Vertex::new(
                dipole.name.clone(),
                VertexKind::Element {
                    dipole: Some(DipoleId(idx)),
                    resistance: dipole.resistance,
                },
            ));
            let a = graph.cell_vertex(&mut cells, dipole.poles.0);
            let b = graph.cell_vertex(&mut cells, dipole.poles.1);
            graph.link(element, a);
            graph.link(element, b);
        }

        let entry = graph.add_vertex(Vertex::new(
            "IN",
            VertexKind::Input {
                supply: board.supply,
            },
        ));
        let at = graph.cell_vertex(&mut cells, board.input_cell);
        graph.link(entry, at);
        graph.entry = entry;

        let exit = graph.add_vertex(Vertex::new("OUT", VertexKind::Output));
        let at = graph.cell_vertex(&mut cells, board.output_cell);
        graph.link(exit, at);
        graph.exit = exit;

        // Register cut points: terminals, and cells where more than two
        // conductors meet. Degree-2 cells stay unregistered pass-throughs.
        graph.nodes.insert(entry);
        graph.nodes.insert(exit);
        for id in cells.iter().flatten() {
            if graph.vertex(*id).degree() > 2 {
                graph.nodes.insert(*id);
            }
        }

        Ok(graph)
    }

    fn cell_vertex(&mut self, cells: &mut [Option<VertexId>], pos: GridPos) -> VertexId {
        let idx = pos.y as usize * GRID_SIZE + pos.x as usize;
        match cells[idx] {
            Some(id) => id,
            None => {
                let id = self.add_vertex(Vertex::junction(format!("J{pos}")));
                cells[idx] = Some(id);
                id
            }
        }
    }

    pub(crate) fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        self.vertices.push(vertex);
        VertexId(self.vertices.len() - 1)
    }

    /// Reciprocally connect two vertices.
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a.0].adjacent.push(b);
        self.vertices[b.0].adjacent.push(a);
    }

    /// Mint an equivalent-resistance element between two nodes.
    ///
    /// Used by the reduction engine when a parallel group collapses.
    pub(crate) fn add_equivalent(&mut self, resistance: f64, a: VertexId, b: VertexId) -> VertexId {
        let name = format!("Req({}~{})", self.vertex(a).name, self.vertex(b).name);
        let id = self.add_vertex(Vertex::new(
            name,
            VertexKind::Element {
                dipole: None,
                resistance,
            },
        ));
        self.link(id, a);
        self.link(id, b);
        id
    }

    /// Register a vertex as a cut point (used in tests building graphs by hand).
    #[cfg(test)]
    pub(crate) fn register_node(&mut self, id: VertexId) {
        self.nodes.insert(id);
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    /// Number of vertices in the arena, synthetic elements included.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adjacency of a vertex.
    pub fn adjacent(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id.0].adjacent
    }

    /// True for registered cut points (terminals and promoted junctions).
    pub fn is_node(&self, id: VertexId) -> bool {
        self.nodes.contains(&id)
    }

    /// Iterate over the registered cut points.
    pub fn nodes(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    /// Find a vertex id by name (diagnostics and tests; first match wins).
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .map(VertexId)
    }
}
