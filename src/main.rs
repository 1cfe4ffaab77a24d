use anyhow::{Context, Result};
use augflow::max_flow::utils::to_dot;
use augflow::max_flow::{Algorithm, MaxFlowSolver};
use augflow::reader::{parse_instances, Instance};
use clap::Parser;
use log::error;
use std::path::PathBuf;

/// Maximum flow from vertex 0 to vertex V-1 of every network in a file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// network descriptions (`V E` followed by E lines of `u v capacity`)
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// sap (shortest augmenting path, alias edmonds-karp) or dinic
    #[arg(short, long, default_value_t = Algorithm::ShortestAugmentingPath)]
    algorithm: Algorithm,

    /// print each solved network in dot format
    #[arg(long)]
    dot: bool,
}

fn run_instance(solver: &MaxFlowSolver, instance: &Instance, dot: bool) -> Result<i64> {
    let mut network = instance.build().context("invalid network")?;
    let sink = instance.vertex_count.saturating_sub(1);
    let flow = solver.solve(&mut network, 0, sink)?;
    if dot {
        println!("{}", to_dot(&network));
    }
    Ok(flow)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let instances = parse_instances(&text)
        .with_context(|| format!("could not read {}", args.input.display()))?;
    let solver = MaxFlowSolver::new().algorithm(args.algorithm);

    for (i, instance) in instances.iter().enumerate() {
        println!(
            "Graph with {} vertices and {} edges:",
            instance.vertex_count,
            instance.edges.len()
        );
        match run_instance(&solver, instance, args.dot) {
            Ok(flow) => println!("Maximum flow: {}", flow),
            Err(err) => error!("graph {}: {:#}", i, err),
        }
    }
    Ok(())
}
