use clap::Parser;
use log::info;
use matcore::prelude::DEFAULT_MAX_WORKERS;
use matcore::Granularity;
use report::model::RunReport;
use report::writer::append_report;
use std::path::PathBuf;
use workflow::config::{ElementKind, WorkflowConfig};
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compares sequential and concurrent matrix multiplication"
)]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Side length of a random square operand pair; repeat for several runs
    #[arg(long = "size")]
    sizes: Vec<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_MAX_WORKERS)]
    max_workers: usize,
    /// Work unit size: cell or row
    #[arg(long, default_value_t = Granularity::Row)]
    granularity: Granularity,
    #[arg(long, value_enum, default_value_t = ElementKind::Int)]
    element: ElementKind,
    /// Multiply this matrix file by --rhs and print the product
    #[arg(long, requires = "rhs")]
    lhs: Option<PathBuf>,
    #[arg(long, requires = "lhs")]
    rhs: Option<PathBuf>,
    /// Print the transpose of this matrix file
    #[arg(long, conflicts_with = "lhs")]
    transpose: Option<PathBuf>,
    /// Skip the built-in edge-case table
    #[arg(long, default_value_t = false)]
    skip_edge_cases: bool,
    /// Append a JSON summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.sizes.clone(),
            args.seed,
            args.element,
            args.max_workers,
            args.granularity,
        )
    };
    if args.skip_edge_cases {
        config.edge_cases = false;
    }
    if args.report.is_some() {
        config.report = args.report.clone();
    }

    let runner = Runner::new(config.clone())?;

    if let Some(path) = &args.transpose {
        println!("{}", runner.transpose_file(path)?);
        return Ok(());
    }
    if let (Some(lhs), Some(rhs)) = (&args.lhs, &args.rhs) {
        println!("{}", runner.multiply_files(lhs, rhs)?);
        return Ok(());
    }

    info!(
        "running workflow: sizes {:?}, {} workers, {} granularity",
        config.sizes, config.engine.max_workers, config.engine.granularity
    );
    let result = runner.execute()?;

    for outcome in &result.edge_cases {
        let marker = if outcome.passed { "ok  " } else { "FAIL" };
        println!("[{}] {}: {}", marker, outcome.name, outcome.detail);
    }
    for comparison in &result.comparisons {
        println!(
            "size {0}x{0}: sequential {1:.3}s, concurrent {2:.3}s, results match: {3}",
            comparison.size,
            comparison.sequential_secs,
            comparison.concurrent_secs,
            comparison.matches
        );
    }

    let report = RunReport::new(&config, &result);
    if let Some(path) = &config.report {
        append_report(path, &report)?;
    }
    if !report.all_passed() {
        anyhow::bail!("workflow finished with failures");
    }

    Ok(())
}
