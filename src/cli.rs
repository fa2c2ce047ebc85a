use std::fmt::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::{ExpressionSolver, NodeRef, SolveReport, SolverConfig, Value, validate_numbers};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the numbers game exhaustively
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every combination of the given numbers that reaches the target")]
#[command(version)]
pub struct CliArgs {
    /// Numbers available to combine, each usable once
    #[arg(default_values_t = [100, 50, 9, 5, 2, 4], allow_negative_numbers = true)]
    pub numbers: Vec<Value>,

    /// Target value to reach
    #[arg(short, long, default_value_t = 784, allow_negative_numbers = true)]
    pub target: Value,

    /// Run the search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<Value>,
    pub target: Value,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            numbers: args.numbers,
            target: args.target,
            solver: SolverConfig {
                parallel: !args.sequential,
            },
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_numbers(&args.numbers).context("Invalid numbers")?;

    Ok(args.into())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn format_nodes(nodes: &[NodeRef]) -> String {
    nodes
        .iter()
        .map(|node| format!("{}[{}]  ", node, node.evaluate()))
        .collect()
}

/// Render the report the way it is printed to stdout
pub fn format_report(report: &SolveReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Numbers:")?;
    writeln!(out, "{}", format_nodes(&report.numbers))?;
    writeln!(out)?;

    writeln!(out, "Solutions:")?;
    for solution in &report.solutions {
        writeln!(out, "{} [{}]", solution, solution.evaluate())?;
    }
    writeln!(
        out,
        "There are {} 'distinct' solutions",
        report.solutions.len()
    )?;
    writeln!(out)?;

    writeln!(out, "Time to solution: {}ms", report.search_time.as_millis())?;
    writeln!(out, "Time to clean up: {}ms", report.dedup_time.as_millis())?;

    Ok(out)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);

    info!(
        "Searching for expressions over {:?} that equal {}",
        config.numbers, config.target
    );

    let report = solver
        .find_solutions(&config.numbers, config.target)
        .context("Search failed")?;

    if !report.is_solved() {
        warn!("No matching expression found");
    }

    print!("{}", format_report(&report)?);
    Ok(())
}
