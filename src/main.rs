use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use run_graph::balance::{run_survey, SurveyConfig};
use run_graph::constants::DEFAULT_RUN_SEED;
use run_graph::logging::{init_tracing, LogLevel, TracingConfig};
use run_graph::visualization::to_dot;
use run_graph::{GraphValidator, PathConfig, PathGenerator, RunGraph, RunSeed};

/// Generate and validate a procedural dungeon run
#[derive(Parser, Debug)]
#[command(name = "run-graph", version)]
struct Args {
    /// Base seed for the run family
    #[arg(long, default_value_t = DEFAULT_RUN_SEED)]
    seed: u64,

    /// Path config file (.ron or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    min_rooms: Option<u32>,

    #[arg(long)]
    max_rooms: Option<u32>,

    /// Runs to try before giving up on a valid graph
    #[arg(long, default_value_t = 5)]
    attempts: u64,

    /// Print the run as Graphviz DOT
    #[arg(long)]
    dot: bool,

    /// Survey this many runs and print the report as JSON
    #[arg(long)]
    survey: Option<u64>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<PathConfig> {
    let mut config = match &args.config {
        Some(path) => PathConfig::load(path)
            .with_context(|| format!("loading path config from {}", path.display()))?,
        None => PathConfig::default(),
    };
    if let Some(min) = args.min_rooms {
        config.min_rooms = min;
    }
    if let Some(max) = args.max_rooms {
        config.max_rooms = max;
    }
    config.validate().context("invalid path config")?;
    Ok(config)
}

/// Regenerate with the next run index until a graph validates
fn generate_valid_run(seed: RunSeed, config: &PathConfig, attempts: u64) -> Result<RunGraph> {
    let validator = GraphValidator::new();
    for attempt in 0..attempts {
        let mut rng = seed.rng_for_run(attempt);
        let graph = PathGenerator::with_config(&mut rng, config.clone())?.generate_path();
        let result = validator.validate(&graph);
        if result.is_valid() {
            tracing::info!(attempt, rooms = graph.node_count(), "valid run generated");
            return Ok(graph);
        }
        tracing::warn!(attempt, errors = ?result.error_messages(), "run failed validation");
    }
    bail!("no valid run after {attempts} attempts (seed {})", seed.seed)
}

fn print_run(graph: &RunGraph) {
    for node in graph.nodes() {
        let next: Vec<&str> = node
            .next_rooms()
            .iter()
            .filter_map(|id| graph.node(*id))
            .map(|n| n.room().id())
            .collect();
        println!(
            "{:>3}  {:<10} {:<9} -> {}",
            node.depth(),
            node.room().id(),
            node.room_type().as_str(),
            if next.is_empty() {
                "(end)".to_string()
            } else {
                next.join(", ")
            }
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&TracingConfig::with_level(LogLevel::from_verbosity(args.verbose)));

    let config = load_config(&args)?;

    if let Some(run_count) = args.survey {
        let report = run_survey(&SurveyConfig {
            run_count,
            base_seed: args.seed,
            path: config,
        })?;
        println!("{}", report.to_json());
        return Ok(());
    }

    let graph = generate_valid_run(RunSeed::new(args.seed), &config, args.attempts)?;
    if args.dot {
        println!("{}", to_dot(&graph));
    } else {
        print_run(&graph);
    }
    Ok(())
}
