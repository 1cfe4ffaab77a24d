//!
//! Reader of flow network descriptions
//!
//! The input is a sequence of instances. Each instance is
//! ```text
//! V E
//! u v capacity   (E lines)
//! ```
//! Values are separated by arbitrary whitespace.
//!
use crate::max_flow::{FlowNetwork, MaxFlowError};
use itertools::Itertools; // for next_tuple
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("invalid integer `{token}`")]
    InvalidToken { token: String },
    #[error("negative {what}: {value}")]
    NegativeCount { what: &'static str, value: i64 },
    #[error("instance {instance}: expected {expected} edges but input ended after {found}")]
    Truncated {
        instance: usize,
        expected: usize,
        found: usize,
    },
}

/// One parsed network description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub vertex_count: usize,
    /// `(u, v, capacity)` in input order
    pub edges: Vec<(usize, usize, i64)>,
}

impl Instance {
    /// Create the flow network. Fails on out of range vertices or negative capacities.
    pub fn build(&self) -> Result<FlowNetwork, MaxFlowError> {
        FlowNetwork::from_edges(self.vertex_count, &self.edges)
    }
}

fn parse_int(token: &str) -> Result<i64, ReadError> {
    token.parse().map_err(|_| ReadError::InvalidToken {
        token: token.to_string(),
    })
}

fn non_negative(value: i64, what: &'static str) -> Result<usize, ReadError> {
    usize::try_from(value).map_err(|_| ReadError::NegativeCount { what, value })
}

///
/// Parse all instances of `text`.
///
/// An incomplete header at the end of the input ends it silently.
/// Capacities are passed through unchecked; `Instance::build` validates them.
///
pub fn parse_instances(text: &str) -> Result<Vec<Instance>, ReadError> {
    let mut tokens = text.split_whitespace().map(parse_int);
    let mut instances = Vec::new();

    while let Some((v, e)) = tokens.next_tuple() {
        let vertex_count = non_negative(v?, "vertex count")?;
        let edge_count = non_negative(e?, "edge count")?;

        let mut edges = Vec::with_capacity(edge_count);
        for found in 0..edge_count {
            let (u, v, capacity) = tokens.next_tuple().ok_or(ReadError::Truncated {
                instance: instances.len(),
                expected: edge_count,
                found,
            })?;
            edges.push((
                non_negative(u?, "vertex index")?,
                non_negative(v?, "vertex index")?,
                capacity?,
            ));
        }
        instances.push(Instance {
            vertex_count,
            edges,
        });
    }
    Ok(instances)
}
