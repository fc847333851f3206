//! Compat CLI - maximum similarity to an ideal ranking, from TREC files.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::eval::Measure;
use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "compat")]
#[command(author, version, about = "Compatibility - similarity of a run to an ideal ranking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Graded compatibility of a run
    Eval(EvalArgs),

    /// Diversity compatibility of a run, using subtopic judgments
    Diversity(EvalArgs),

    /// Write a default compat.toml
    Init {
        /// Target directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
}

#[derive(Args)]
struct EvalArgs {
    /// Persistence, in [0.01, 0.99] (default: 0.95)
    #[arg(short, allow_negative_numbers = true)]
    p: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// TREC-style qrels
    qrels: PathBuf,

    /// TREC-style run
    run: PathBuf,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Eval(args) => evaluate(Measure::Graded, args),
        Commands::Diversity(args) => evaluate(Measure::Diversity, args),
        Commands::Init { path } => commands::init::run(path),
    }
}

fn evaluate(measure: Measure, args: EvalArgs) -> Result<()> {
    let config = Config::load()?;
    let options = commands::eval::Options {
        persistence: args.p.unwrap_or(config.evaluation.persistence),
        format: args.format.unwrap_or(config.output.format),
    };
    commands::eval::run(measure, &args.qrels, &args.run, &options)
}
