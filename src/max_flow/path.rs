//!
//! Shortest augmenting path search on the residual graph
//!
//! An edge is traversable iff its residual capacity is positive.
//! The search is breadth-first, so the first time the sink is reached
//! the path has the minimum number of edges.
//!
use super::flow_rate::FlowRateLike;
use super::network::{EdgeId, FlowNetwork};
use std::collections::VecDeque;

///
/// Predecessor edges found by one search.
///
/// `pred[v]` is the edge through which `v` was first discovered.
/// It is `None` for the source and for unvisited vertices.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    pred: Vec<Option<EdgeId>>,
}

impl Predecessors {
    /// edge used to first reach `v`
    pub fn get(&self, v: usize) -> Option<EdgeId> {
        self.pred.get(v).copied().flatten()
    }

    ///
    /// Edges of the path `source -> ... -> sink`, in order from the source.
    ///
    /// Empty if `sink == source` or `sink` was not reached.
    ///
    pub fn path_to<F: FlowRateLike>(
        &self,
        network: &FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> Vec<EdgeId> {
        let mut edges = Vec::new();
        let mut v = sink;
        while v != source {
            match self.get(v) {
                Some(e) => {
                    edges.push(e);
                    v = network.source_of(e);
                }
                None => return Vec::new(),
            }
        }
        edges.reverse();
        edges
    }
}

///
/// Find a shortest augmenting path from `source` to `sink`.
///
/// Returns the predecessor edges of the visited vertices if the sink was
/// reached, otherwise `None`. `source == sink` never has an augmenting path.
///
/// Both vertices must be valid indices of `network`.
///
pub fn find_augmenting_path<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Option<Predecessors> {
    if source == sink {
        return None;
    }
    let n = network.vertex_count();
    let mut visited = vec![false; n];
    let mut pred = vec![None; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &e in network.incident_edges(u) {
            let ew = network.edge(e);
            let v = ew.target();
            if visited[v] || ew.residual_capacity() <= F::zero() {
                continue;
            }
            visited[v] = true;
            pred[v] = Some(e);
            if v == sink {
                return Some(Predecessors { pred });
            }
            queue.push_back(v);
        }
    }
    None
}

///
/// Vertices reachable from `source` in the residual graph.
///
pub fn residual_reachable<F: FlowRateLike>(network: &FlowNetwork<F>, source: usize) -> Vec<bool> {
    let mut visited = vec![false; network.vertex_count()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &e in network.incident_edges(u) {
            let ew = network.edge(e);
            if !visited[ew.target()] && ew.residual_capacity() > F::zero() {
                visited[ew.target()] = true;
                queue.push_back(ew.target());
            }
        }
    }
    visited
}
