use super::network::{EdgeId, FlowNetwork};

/// mock network generation functions
fn build(vertex_count: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork {
    FlowNetwork::from_edges(vertex_count, edges).unwrap()
}

/// 0 -> {1, 2} -> 3, max flow 4
pub fn mock_diamond() -> FlowNetwork {
    build(4, &[(0, 1, 3), (1, 3, 2), (0, 2, 2), (2, 3, 3)])
}

/// two edges 0 -> 1 of capacity 4 and 6
pub fn mock_parallel_edges() -> (FlowNetwork, [EdgeId; 2]) {
    let mut n = FlowNetwork::new(2);
    let e0 = n.add_directed_edge(0, 1, 4).unwrap();
    let e1 = n.add_directed_edge(0, 1, 6).unwrap();
    (n, [e0, e1])
}

/// mock network cited from Introduction to Algorithms (Figure 26.1), max flow 23
pub fn mock_clrs() -> FlowNetwork {
    build(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )
}

/// layered network with dead ends (5 and 6), source 0, sink 7, max flow 19
pub fn mock_layered() -> FlowNetwork {
    build(
        8,
        &[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (3, 7, 10),
            (4, 3, 6),
            (4, 7, 10),
            (1, 5, 5),
            (2, 6, 3),
            (6, 5, 3),
        ],
    )
}

/// {0, 1} and {2, 3} are not connected
pub fn mock_disconnected() -> FlowNetwork {
    build(4, &[(0, 1, 5), (2, 3, 5), (3, 2, 1)])
}
