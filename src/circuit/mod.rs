//! Placement model, validation, and the grid-to-graph converter.

mod board;
mod graph;
mod types;
mod validate;

pub use board::{Board, Goal, Quantity, Supply, WireSegment};
pub use graph::{Graph, Vertex, VertexKind};
pub use types::{DipoleId, GridPos, VertexId};
pub use validate::validate_board;
