//!
//! Flow validity checks
//! - capacity constraint
//! - antisymmetry of paired edges
//! - flow conservation
//!
use super::flow_rate::FlowRateLike;
use super::network::{is_forward, FlowNetwork};

///
/// Check if the current flow is valid, i.e. it satisfies
/// - capacity constraint on every edge
/// - antisymmetry between every edge and its reverse
/// - flow conservation at every vertex other than `source` and `sink`
///
pub fn is_valid_flow<F: FlowRateLike>(network: &FlowNetwork<F>, source: usize, sink: usize) -> bool {
    is_within_capacity(network) && is_antisymmetric(network) && is_conserving(network, source, sink)
}

///
/// For each forward edge, the flow must satisfy `0 <= flow <= capacity`.
/// For each backward edge `flow <= 0` follows from antisymmetry.
///
pub fn is_within_capacity<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    network.graph().edge_indices().all(|e| {
        let ew = network.edge(e);
        let lower = if is_forward(e) { F::zero() } else { -network.edge(ew.reverse()).capacity() };
        lower <= ew.flow() && ew.flow() <= ew.capacity()
    })
}

///
/// For each edge, `flow(e) == -flow(reverse(e))`.
///
pub fn is_antisymmetric<F: FlowRateLike>(network: &FlowNetwork<F>) -> bool {
    network.graph().edge_indices().all(|e| {
        let ew = network.edge(e);
        ew.flow() == -network.edge(ew.reverse()).flow()
    })
}

///
/// For each vertex except `source` and `sink`,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_conserving<F: FlowRateLike>(network: &FlowNetwork<F>, source: usize, sink: usize) -> bool {
    (0..network.vertex_count())
        .filter(|&v| v != source && v != sink)
        .all(|v| network.net_outflow(v) == Some(F::zero()))
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_diamond;
    use super::super::network::EdgeId;
    use super::*;

    #[test]
    fn flow_valid_tests() {
        let mut n = mock_diamond();
        assert!(is_valid_flow(&n, 0, 3));

        // 0 -> 1 -> 3 by 2: valid
        n.push_flow(EdgeId::new(0), 2);
        n.push_flow(EdgeId::new(2), 2);
        assert!(is_within_capacity(&n));
        assert!(is_antisymmetric(&n));
        assert!(is_conserving(&n, 0, 3));
        assert!(is_valid_flow(&n, 0, 3));
        // but not if the flow is regarded as 1 -> 3
        assert!(!is_conserving(&n, 1, 3));

        // this flow overs the capacity of 1 -> 3
        n.push_flow(EdgeId::new(0), 1);
        n.push_flow(EdgeId::new(2), 1);
        assert!(!is_within_capacity(&n));
        assert!(is_conserving(&n, 0, 3));
        assert!(!is_valid_flow(&n, 0, 3));
    }

    #[test]
    fn partial_path_breaks_conservation() {
        let mut n = mock_diamond();
        n.push_flow(EdgeId::new(4), 1);
        assert!(is_within_capacity(&n));
        assert!(is_antisymmetric(&n));
        assert!(!is_conserving(&n, 0, 3));
    }
}
