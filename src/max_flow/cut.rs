//!
//! Minimum cut of a solved network
//!
use super::error::MaxFlowError;
use super::flow_rate::FlowRateLike;
use super::network::{EdgeId, FlowNetwork};
use super::path::residual_reachable;

///
/// An s-t cut `(S, V \ S)`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<F: FlowRateLike> {
    /// `source_side[v]` is true iff `v` is in `S`
    pub source_side: Vec<bool>,
    /// forward edges from `S` to `V \ S`
    pub edges: Vec<EdgeId>,
    /// sum of the capacities of `edges`
    pub capacity: F,
}

///
/// Minimum cut read off the residual graph of a maximum flow.
///
/// `S` is the set of vertices reachable from `source`. If the flow in
/// `network` is maximum, every edge leaving `S` is saturated and `capacity`
/// equals the flow value.
///
/// `source` must be a valid vertex. Fails with `FlowOverflow` if the cut
/// capacity does not fit in `F`.
///
pub fn min_cut<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    source: usize,
) -> Result<MinCut<F>, MaxFlowError> {
    let source_side = residual_reachable(network, source);
    let edges: Vec<EdgeId> = network
        .forward_edges()
        .filter(|&(_, u, v)| source_side[u] && !source_side[v])
        .map(|(e, _, _)| e)
        .collect();
    let capacity = edges
        .iter()
        .try_fold(F::zero(), |acc, &e| acc.checked_add(network.edge(e).capacity()))
        .ok_or(MaxFlowError::FlowOverflow)?;
    Ok(MinCut {
        source_side,
        edges,
        capacity,
    })
}
