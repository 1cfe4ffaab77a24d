//!
//! Flow update along an augmenting path
//!
use super::flow_rate::FlowRateLike;
use super::network::{EdgeId, FlowNetwork};
use super::path::Predecessors;
use itertools::Itertools; // for join
use log::trace;

///
/// Bottleneck of the path, i.e. the minimum residual capacity of its edges.
///
/// Zero for an empty path.
///
pub fn bottleneck<F: FlowRateLike>(network: &FlowNetwork<F>, path: &[EdgeId]) -> F {
    path.iter()
        .map(|&e| network.residual_capacity(e))
        .min()
        .unwrap_or_else(F::zero)
}

///
/// Push `amount` along every edge of `path` and the opposite amount along the
/// paired reverse edges.
///
pub fn change_flow_along_edges<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    path: &[EdgeId],
    amount: F,
) {
    for &e in path {
        network.push_flow(e, amount);
    }
}

///
/// Augment the flow along the path `source -> sink` recorded in `pred`.
///
/// Returns the amount pushed, which is the bottleneck of the path.
///
pub fn augment<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    pred: &Predecessors,
    source: usize,
    sink: usize,
) -> F {
    let path = pred.path_to(network, source, sink);
    let amount = bottleneck(network, &path);
    trace!(
        "augment by {} along [{}]",
        amount,
        path.iter().map(|e| e.index()).join(",")
    );
    change_flow_along_edges(network, &path, amount);
    amount
}
