//!
//! augflow solves [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! of integer capacity/flow by shortest augmenting paths,
//! and reports the corresponding minimum cut.
//!
pub mod max_flow;
pub mod reader;

pub use max_flow::{max_flow, Algorithm, FlowNetwork, MaxFlowError, MaxFlowSolver};
