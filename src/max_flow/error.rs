//!
//! Errors reported by network construction and solving
//!
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaxFlowError {
    /// vertex index outside `[0, vertex_count)`
    #[error("vertex {vertex} is out of range (network has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },
    /// negative capacity supplied to `add_directed_edge`
    #[error("capacity must be non-negative, got {capacity}")]
    InvalidCapacity { capacity: i128 },
    /// solve was stopped by the configured phase limit before termination.
    /// `flow` has already been pushed into the network.
    #[error("phase limit reached after {phases} phases (flow so far: {flow})")]
    PhaseLimitReached { phases: usize, flow: i128 },
    /// total flow does not fit in the flow rate type
    #[error("total flow overflows the flow rate type")]
    FlowOverflow,
}
