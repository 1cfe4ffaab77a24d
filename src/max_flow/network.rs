//! # `FlowNetwork` and `FlowEdge`
//!
//! Flow network with paired reverse edges.
//!
//! Every call of `add_directed_edge(u, v, c)` creates two `FlowEdge`s
//! * forward  `u -> v` with capacity `c`
//! * backward `v -> u` with capacity `0`
//!
//! Both records live in the edge list of a single `DiGraph` and refer to each
//! other by `EdgeId`. Forward edges always have even ids, and the backward edge
//! of forward edge `2k` is `2k + 1`.
//!
use super::error::MaxFlowError;
use super::flow_rate::FlowRateLike;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()

/// Edge identifier in the network
pub type EdgeId = EdgeIndex<usize>;

/// Underlying graph: vertices carry nothing, edges carry `FlowEdge`
pub type NetworkGraph<F> = DiGraph<(), FlowEdge<F>, usize>;

/// Edge attributes used in FlowNetwork.
///
/// It has
/// * target vertex
/// * capacity u(e)
/// * current flow f(e)
/// * id of the paired reverse edge
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FlowEdge<F: FlowRateLike> {
    /// copy of the petgraph endpoint, so the BFS reads it without a graph lookup
    target: usize,
    capacity: F,
    flow: F,
    reverse: EdgeId,
}

impl<F: FlowRateLike> FlowEdge<F> {
    fn new(target: usize, capacity: F, reverse: EdgeId) -> FlowEdge<F> {
        FlowEdge {
            target,
            capacity,
            flow: F::zero(),
            reverse,
        }
    }
    pub fn target(&self) -> usize {
        self.target
    }
    pub fn capacity(&self) -> F {
        self.capacity
    }
    pub fn flow(&self) -> F {
        self.flow
    }
    /// id of the paired edge in the opposite direction
    pub fn reverse(&self) -> EdgeId {
        self.reverse
    }
    /// `capacity - flow`, the amount of flow that can still be pushed
    pub fn residual_capacity(&self) -> F {
        self.capacity - self.flow
    }
}

impl<F: FlowRateLike> std::fmt::Display for FlowEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.flow, self.capacity)
    }
}

/// true if `e` was created as the forward half of a caller's edge
pub fn is_forward(e: EdgeId) -> bool {
    e.index() % 2 == 0
}

///
/// Flow network of one max-flow problem instance.
///
/// Topology and capacities are fixed once the edges are added;
/// afterwards only the flow values change.
///
#[derive(Debug, Clone)]
pub struct FlowNetwork<F: FlowRateLike = i64> {
    graph: NetworkGraph<F>,
    /// incident edges of each vertex, in creation order
    incidence: Vec<Vec<EdgeId>>,
}

impl<F: FlowRateLike> FlowNetwork<F> {
    /// Create a network of `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> FlowNetwork<F> {
        let mut graph = NetworkGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        FlowNetwork {
            graph,
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    ///
    /// Create a network from a list of `(u, v, capacity)`.
    ///
    pub fn from_edges<'a, I>(vertex_count: usize, edges: I) -> Result<FlowNetwork<F>, MaxFlowError>
    where
        I: IntoIterator<Item = &'a (usize, usize, F)>,
        F: 'a,
    {
        let mut network = FlowNetwork::new(vertex_count);
        for &(u, v, capacity) in edges {
            network.add_directed_edge(u, v, capacity)?;
        }
        Ok(network)
    }

    ///
    /// Add an edge `u -> v` of capacity `capacity` together with its backward edge.
    ///
    /// Returns the id of the forward edge. On error the network is unchanged.
    ///
    pub fn add_directed_edge(
        &mut self,
        u: usize,
        v: usize,
        capacity: F,
    ) -> Result<EdgeId, MaxFlowError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if capacity < F::zero() {
            return Err(MaxFlowError::InvalidCapacity {
                capacity: capacity.to_i128(),
            });
        }

        let forward = EdgeId::new(self.graph.edge_count());
        let backward = EdgeId::new(self.graph.edge_count() + 1);
        self.graph.add_edge(
            NodeIndex::new(u),
            NodeIndex::new(v),
            FlowEdge::new(v, capacity, backward),
        );
        self.graph.add_edge(
            NodeIndex::new(v),
            NodeIndex::new(u),
            FlowEdge::new(u, F::zero(), forward),
        );
        self.incidence[u].push(forward);
        self.incidence[v].push(backward);
        Ok(forward)
    }

    /// Ok if `v` is a vertex of this network
    pub fn check_vertex(&self, v: usize) -> Result<(), MaxFlowError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(MaxFlowError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// number of edges added by the caller (backward edges are not counted)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    /// Panics if `e` is not an edge of this network.
    pub fn edge(&self, e: EdgeId) -> &FlowEdge<F> {
        &self.graph[e]
    }

    pub fn residual_capacity(&self, e: EdgeId) -> F {
        self.graph[e].residual_capacity()
    }

    /// Source vertex of `e`, i.e. the target of its reverse edge
    pub fn source_of(&self, e: EdgeId) -> usize {
        self.graph[self.graph[e].reverse].target
    }

    /// Edges leaving `v` (forward and backward), in creation order.
    /// Panics if `v` is out of range.
    pub fn incident_edges(&self, v: usize) -> &[EdgeId] {
        &self.incidence[v]
    }

    ///
    /// Iterate over the caller's edges as `(id, source, target)`.
    ///
    pub fn forward_edges(&self) -> impl Iterator<Item = (EdgeId, usize, usize)> + '_ {
        self.graph
            .edge_references()
            .filter(|er| is_forward(er.id()))
            .map(|er| (er.id(), er.source().index(), er.target().index()))
    }

    ///
    /// Out-going flow minus in-coming flow of `v`.
    ///
    /// Flow on a backward edge is the negated flow of its forward edge, so
    /// summing over the incidence list is enough. The sum is taken in `i128`;
    /// `None` if the result does not fit in `F`.
    ///
    pub fn net_outflow(&self, v: usize) -> Option<F> {
        let net: i128 = self.incidence[v]
            .iter()
            .map(|&e| self.graph[e].flow.to_i128())
            .sum();
        F::try_from(net).ok()
    }

    /// Set the flow of every edge back to zero.
    pub fn reset_flows(&mut self) {
        for ew in self.graph.edge_weights_mut() {
            ew.flow = F::zero();
        }
    }

    /// The underlying petgraph graph, e.g. for rendering
    pub fn graph(&self) -> &NetworkGraph<F> {
        &self.graph
    }

    ///
    /// Push `amount` along `e`: `f(e) += amount` and `f(reverse(e)) -= amount`.
    ///
    pub(crate) fn push_flow(&mut self, e: EdgeId, amount: F) {
        let reverse = {
            let ew = &mut self.graph[e];
            ew.flow += amount;
            ew.reverse
        };
        self.graph[reverse].flow -= amount;
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_creates_reverse_pair() {
        let mut n: FlowNetwork = FlowNetwork::new(3);
        let e0 = n.add_directed_edge(0, 1, 5).unwrap();
        let e1 = n.add_directed_edge(1, 2, 3).unwrap();
        assert_eq!(e0, EdgeId::new(0));
        assert_eq!(e1, EdgeId::new(2));
        assert_eq!(n.edge_count(), 2);

        let fwd = n.edge(e0);
        assert_eq!(fwd.target(), 1);
        assert_eq!(fwd.capacity(), 5);
        assert_eq!(fwd.flow(), 0);

        let bwd = n.edge(fwd.reverse());
        assert_eq!(bwd.target(), 0);
        assert_eq!(bwd.capacity(), 0);
        assert_eq!(bwd.reverse(), e0);
        assert!(is_forward(e0));
        assert!(!is_forward(fwd.reverse()));

        assert_eq!(n.source_of(e0), 0);
        assert_eq!(n.source_of(fwd.reverse()), 1);

        // incidence lists keep creation order
        assert_eq!(n.incident_edges(0), &[e0]);
        assert_eq!(n.incident_edges(1), &[EdgeId::new(1), e1]);
        assert_eq!(n.incident_edges(2), &[EdgeId::new(3)]);
    }

    #[test]
    fn invalid_edges_leave_network_untouched() {
        let mut n: FlowNetwork = FlowNetwork::new(2);
        n.add_directed_edge(0, 1, 1).unwrap();
        assert_eq!(
            n.add_directed_edge(0, 2, 1),
            Err(MaxFlowError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            n.add_directed_edge(1, 0, -4),
            Err(MaxFlowError::InvalidCapacity { capacity: -4 })
        );
        assert_eq!(n.edge_count(), 1);
        assert_eq!(n.graph().edge_count(), 2);
        assert_eq!(n.incident_edges(1).len(), 1);
    }

    #[test]
    fn empty_network() {
        let mut n: FlowNetwork<i32> = FlowNetwork::new(0);
        assert_eq!(n.vertex_count(), 0);
        assert!(n.check_vertex(0).is_err());
        assert!(n.add_directed_edge(0, 0, 1).is_err());
    }

    #[test]
    fn push_flow_keeps_antisymmetry() {
        let mut n: FlowNetwork = FlowNetwork::new(2);
        let e = n.add_directed_edge(0, 1, 10).unwrap();
        n.push_flow(e, 4);
        assert_eq!(n.edge(e).flow(), 4);
        assert_eq!(n.residual_capacity(e), 6);
        let r = n.edge(e).reverse();
        assert_eq!(n.edge(r).flow(), -4);
        assert_eq!(n.residual_capacity(r), 4);
        assert_eq!(n.net_outflow(0), Some(4));
        assert_eq!(n.net_outflow(1), Some(-4));
        assert_eq!(n.edge(e).to_string(), "4/10");

        n.reset_flows();
        assert_eq!(n.edge(e).flow(), 0);
        assert_eq!(n.edge(r).flow(), 0);
    }

    #[test]
    fn self_loop_has_no_net_flow() {
        let mut n: FlowNetwork = FlowNetwork::new(1);
        let e = n.add_directed_edge(0, 0, 3).unwrap();
        n.push_flow(e, 2);
        assert_eq!(n.net_outflow(0), Some(0));
    }

    #[test]
    fn net_outflow_of_large_flows() {
        let mut n: FlowNetwork<i32> = FlowNetwork::new(3);
        let a = n.add_directed_edge(0, 1, i32::MAX).unwrap();
        let b = n.add_directed_edge(0, 1, i32::MAX).unwrap();
        let c = n.add_directed_edge(1, 2, i32::MAX).unwrap();
        let d = n.add_directed_edge(1, 2, i32::MAX).unwrap();
        for e in [a, b, c, d] {
            n.push_flow(e, i32::MAX);
        }
        // partial sums leave i32, the total does not
        assert_eq!(n.net_outflow(1), Some(0));
        assert_eq!(n.net_outflow(0), None);
        assert_eq!(n.net_outflow(2), None);
    }

    #[test]
    fn forward_edges_lists_caller_edges() {
        let mut n: FlowNetwork = FlowNetwork::new(3);
        n.add_directed_edge(0, 1, 1).unwrap();
        n.add_directed_edge(2, 1, 2).unwrap();
        let edges: Vec<_> = n.forward_edges().collect();
        assert_eq!(
            edges,
            vec![(EdgeId::new(0), 0, 1), (EdgeId::new(2), 2, 1)]
        );
    }
}
