//! Series/parallel reduction to a single equivalent resistance.
//!
//! The engine runs a fixed-point loop over the branch list. Each round picks
//! one parallel group (branches sharing an unordered endpoint pair), collapses
//! it with the reciprocal-sum rule, then greedily series-merges the
//! replacement into its neighbors wherever the merge is unambiguous. The loop
//! ends when no parallel group remains; the survivors are in series by
//! construction and their resistances sum to the total.
//!
//! Degrees are computed from the working branch list, never by rewriting
//! vertex adjacency mid-loop: the branch list IS the active edge set, which
//! keeps each round easy to reason about and to test in isolation.

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::circuit::{Graph, VertexId};
use crate::error::{Result, VoltgridError};

use super::branch::Branch;

/// Outcome of collapsing the branch network.
#[derive(Debug)]
pub struct Reduction {
    /// Total equivalent resistance in ohms; exactly zero for a short circuit
    pub total_resistance: f64,
    /// The surviving branches, all in series
    pub branches: Vec<Branch>,
}

/// Collapse parallel groups and series runs until only a series chain from
/// entry to exit remains, and sum it into the total resistance.
pub fn reduce(graph: &mut Graph, mut branches: Vec<Branch>) -> Result<Reduction> {
    while let Some(endpoints) = parallel_endpoints(&branches) {
        let (members, rest): (Vec<_>, Vec<_>) = branches
            .into_iter()
            .partition(|b| b.endpoints() == endpoints);
        branches = rest;

        let collapsed = collapse_parallel(graph, endpoints, &members);
        let merged = merge_series(graph, &mut branches, collapsed);
        branches.push(merged);
    }

    if branches.is_empty() {
        // The entry-to-exit branch can never be consumed; reaching this is a
        // defect in extraction or merging, not a property of the circuit.
        return Err(VoltgridError::ReductionUnderflow);
    }

    let total_resistance = branches.iter().map(|b| b.resistance).sum();
    Ok(Reduction {
        total_resistance,
        branches,
    })
}

/// Pick the next parallel group, smallest endpoint pair first so reduction
/// order (and diagnostics) stay deterministic.
fn parallel_endpoints(branches: &[Branch]) -> Option<UnorderedPair<VertexId>> {
    branches
        .iter()
        .map(Branch::endpoints)
        .counts()
        .into_iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(pair, _)| pair)
        .min_by_key(|pair| (pair.0.min(pair.1), pair.0.max(pair.1)))
}

/// Replace a parallel group with one equivalent-resistance branch.
fn collapse_parallel(
    graph: &mut Graph,
    endpoints: UnorderedPair<VertexId>,
    members: &[Branch],
) -> Branch {
    // A zero here is a constructed literal (a wire run or 0-ohm element), so
    // exact comparison is intended: resistor sums cannot round down to 0.
    let resistance = if members.iter().any(|b| b.resistance == 0.0) {
        0.0
    } else {
        1.0 / members.iter().map(|b| 1.0 / b.resistance).sum::<f64>()
    };

    let UnorderedPair(a, b) = endpoints;
    let element = graph.add_equivalent(resistance, a, b);
    Branch {
        start: a,
        end: b,
        elements: vec![element],
        resistance,
    }
}

/// Fold the freshly collapsed branch into series neighbors while a shared
/// endpoint makes the merge unambiguous: the endpoint must carry exactly two
/// branches (this one and the neighbor) and must not be a terminal.
fn merge_series(graph: &Graph, branches: &mut Vec<Branch>, mut merged: Branch) -> Branch {
    while let Some((idx, shared)) = series_partner(graph, branches, &merged) {
        let other = branches.remove(idx);
        merged = join(merged, other, shared);
    }
    merged
}

fn series_partner(
    graph: &Graph,
    branches: &[Branch],
    merged: &Branch,
) -> Option<(usize, VertexId)> {
    for node in [merged.start, merged.end] {
        // Current through a terminal is never unambiguous to reroute
        if node == graph.entry || node == graph.exit {
            continue;
        }
        let incident = branches.iter().positions(|b| b.touches(node)).collect_vec();
        if incident.len() == 1 {
            return Some((incident[0], node));
        }
    }
    None
}

/// Concatenate two branches through their shared endpoint, orienting the
/// element lists so they chain start-to-end.
fn join(a: Branch, b: Branch, shared: VertexId) -> Branch {
    let start = if a.start == shared { a.end } else { a.start };
    let end = if b.start == shared { b.end } else { b.start };

    let mut elements = a.elements;
    if a.start == shared {
        elements.reverse();
    }
    if b.start == shared {
        elements.extend(b.elements);
    } else {
        elements.extend(b.elements.into_iter().rev());
    }

    Branch {
        start,
        end,
        elements,
        resistance: a.resistance + b.resistance,
    }
}
