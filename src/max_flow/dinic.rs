//!
//! Blocking flow phases (Dinic)
//!
//! Each phase assigns BFS levels from the source on the residual graph, then
//! saturates every source-sink path of the level graph using one current-arc
//! pointer per vertex. The search is iterative, so long paths do not grow the
//! call stack.
//!
use super::augment::{bottleneck, change_flow_along_edges};
use super::error::MaxFlowError;
use super::flow_rate::FlowRateLike;
use super::network::{EdgeId, FlowNetwork};
use log::trace;
use std::collections::VecDeque;

///
/// BFS distance (in edges) from `source` over residual edges.
/// `None` for unreachable vertices.
///
pub fn levels<F: FlowRateLike>(network: &FlowNetwork<F>, source: usize) -> Vec<Option<usize>> {
    let mut level = vec![None; network.vertex_count()];
    let mut queue = VecDeque::new();
    level[source] = Some(0);
    queue.push_back((source, 0));

    while let Some((u, lu)) = queue.pop_front() {
        for &e in network.incident_edges(u) {
            let ew = network.edge(e);
            if level[ew.target()].is_none() && ew.residual_capacity() > F::zero() {
                level[ew.target()] = Some(lu + 1);
                queue.push_back((ew.target(), lu + 1));
            }
        }
    }
    level
}

///
/// Saturate the level graph described by `level` and return the amount pushed.
///
/// `level` is consumed as scratch space: vertices found to be dead ends are
/// removed from the level graph. Nothing is pushed if `source == sink`.
///
pub fn blocking_flow<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    mut level: Vec<Option<usize>>,
    source: usize,
    sink: usize,
) -> Result<F, MaxFlowError> {
    if source == sink {
        return Ok(F::zero());
    }
    let mut current = vec![0usize; network.vertex_count()];
    let mut stack: Vec<EdgeId> = Vec::new();
    let mut total = F::zero();

    loop {
        let u = match stack.last() {
            Some(&e) => network.edge(e).target(),
            None => source,
        };

        if u == sink {
            let amount = bottleneck(network, &stack);
            change_flow_along_edges(network, &stack, amount);
            trace!("blocking flow: {} along {} edges", amount, stack.len());
            total = total
                .checked_add(amount)
                .ok_or(MaxFlowError::FlowOverflow)?;
            // resume from the tail of the first saturated edge
            let saturated = stack
                .iter()
                .position(|&e| network.residual_capacity(e) <= F::zero())
                .unwrap_or(stack.len());
            stack.truncate(saturated);
            continue;
        }

        // advance along the current arc of u
        let next_level = level[u].map(|l| l + 1);
        let edges = network.incident_edges(u);
        let mut next = None;
        while current[u] < edges.len() {
            let e = edges[current[u]];
            let ew = network.edge(e);
            if ew.residual_capacity() > F::zero() && level[ew.target()] == next_level {
                next = Some(e);
                break;
            }
            current[u] += 1;
        }

        match next {
            Some(e) => stack.push(e),
            None => {
                // retreat: u is a dead end
                level[u] = None;
                match stack.pop() {
                    Some(e) => current[network.source_of(e)] += 1,
                    None => break,
                }
            }
        }
    }
    Ok(total)
}
