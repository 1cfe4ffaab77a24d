pub mod augment;
pub mod cut;
pub mod dinic;
pub mod error;
pub mod flow;
pub mod flow_rate;
#[cfg(test)]
mod mocks;
pub mod network;
pub mod path;
pub mod utils;

pub use cut::{min_cut, MinCut};
pub use error::MaxFlowError;
pub use flow_rate::FlowRateLike;
pub use network::{EdgeId, FlowEdge, FlowNetwork};

use augment::augment;
use dinic::{blocking_flow, levels};
use flow::is_valid_flow;
use log::{debug, warn};
use path::{find_augmenting_path, Predecessors};

///
/// How the flow of one phase is found
///
#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// one shortest augmenting path per phase (BFS), parsed from `sap` or `edmonds-karp`
    #[default]
    ShortestAugmentingPath,
    /// a blocking flow of the BFS level graph per phase
    Dinic,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Algorithm::ShortestAugmentingPath => write!(f, "sap"),
            Algorithm::Dinic => write!(f, "dinic"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sap" | "edmonds-karp" => Ok(Algorithm::ShortestAugmentingPath),
            "dinic" => Ok(Algorithm::Dinic),
            _ => Err(format!(
                "unknown algorithm `{}` (expected sap, edmonds-karp or dinic)",
                s
            )),
        }
    }
}

/// Work found for one phase, before any flow is changed
enum Phase {
    Path(Predecessors),
    Levels(Vec<Option<usize>>),
}

///
/// Max flow solver configuration
///
/// ```
/// use augflow::max_flow::{Algorithm, FlowNetwork, MaxFlowSolver};
///
/// let mut network: FlowNetwork = FlowNetwork::new(2);
/// network.add_directed_edge(0, 1, 7).unwrap();
/// let solver = MaxFlowSolver::new().algorithm(Algorithm::Dinic);
/// assert_eq!(solver.solve(&mut network, 0, 1), Ok(7));
/// ```
///
#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub struct MaxFlowSolver {
    algorithm: Algorithm,
    phase_limit: Option<usize>,
}

impl MaxFlowSolver {
    pub fn new() -> MaxFlowSolver {
        MaxFlowSolver::default()
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> MaxFlowSolver {
        self.algorithm = algorithm;
        self
    }

    ///
    /// Stop with `MaxFlowError::PhaseLimitReached` instead of running more than
    /// `limit` phases. `None` means no limit.
    ///
    pub fn phase_limit(mut self, limit: Option<usize>) -> MaxFlowSolver {
        self.phase_limit = limit;
        self
    }

    ///
    /// Push the maximum flow from `source` to `sink` and return the amount added.
    ///
    /// The network keeps the flow, so solving a solved network again adds `0`.
    /// Invalid vertices are rejected before the network is touched.
    ///
    pub fn solve<F: FlowRateLike>(
        &self,
        network: &mut FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> Result<F, MaxFlowError> {
        network.check_vertex(source)?;
        network.check_vertex(sink)?;
        if source == sink {
            debug!("source and sink are both {}, flow is zero", source);
            return Ok(F::zero());
        }
        debug!(
            "solving {} -> {} on V={} E={} with {}",
            source,
            sink,
            network.vertex_count(),
            network.edge_count(),
            self.algorithm
        );

        let mut total = F::zero();
        let mut phases = 0;

        loop {
            let phase = match self.algorithm {
                Algorithm::ShortestAugmentingPath => {
                    find_augmenting_path(network, source, sink).map(Phase::Path)
                }
                Algorithm::Dinic => {
                    let level = levels(network, source);
                    if level[sink].is_some() {
                        Some(Phase::Levels(level))
                    } else {
                        None
                    }
                }
            };
            let phase = match phase {
                Some(phase) => phase,
                None => break,
            };

            if let Some(limit) = self.phase_limit {
                if phases >= limit {
                    warn!("phase limit {} reached, flow so far {}", limit, total);
                    return Err(MaxFlowError::PhaseLimitReached {
                        phases,
                        flow: total.to_i128(),
                    });
                }
            }

            let pushed = match phase {
                Phase::Path(pred) => augment(network, &pred, source, sink),
                Phase::Levels(level) => blocking_flow(network, level, source, sink)?,
            };
            total = total
                .checked_add(pushed)
                .ok_or(MaxFlowError::FlowOverflow)?;
            phases += 1;
            debug_assert!(is_valid_flow(network, source, sink));
        }

        debug!("max flow {} after {} phases", total, phases);
        utils::draw(network);
        Ok(total)
    }
}

///
/// Find the maximum flow from `source` to `sink` with the default solver.
///
pub fn max_flow<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Result<F, MaxFlowError> {
    MaxFlowSolver::new().solve(network, source, sink)
}
