//!
//! utils
//!
use super::flow_rate::FlowRateLike;
use super::network::{is_forward, FlowEdge, FlowNetwork};
use log::trace;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;

///
/// Render the caller's edges of `network` in Graphviz dot format.
///
/// Vertices are labeled by index, edges by `flow/capacity`.
/// Backward edges are omitted.
///
pub fn to_dot<F: FlowRateLike>(network: &FlowNetwork<F>) -> String {
    let graph: DiGraph<usize, FlowEdge<F>, usize> = network.graph().filter_map(
        |v, _| Some(v.index()),
        |e, ew| if is_forward(e) { Some(*ew) } else { None },
    );
    format!("{}", Dot::new(&graph))
}

pub fn draw<F: FlowRateLike>(network: &FlowNetwork<F>) {
    trace!("{}", to_dot(network));
}

#[cfg(test)]
mod tests {
    use super::super::max_flow;
    use super::super::mocks::mock_diamond;
    use super::*;

    #[test]
    fn dot_shows_flow_over_capacity() {
        let mut n = mock_diamond();
        max_flow(&mut n, 0, 3).unwrap();
        draw(&n);
        let dot = to_dot(&n);
        assert!(dot.starts_with("digraph"));
        assert_eq!(dot.matches("->").count(), 4);
        assert!(dot.contains("\"2/3\""));
        assert!(dot.contains("\"2/2\""));
        assert!(!dot.contains("\"0/0\""));
    }
}
