//! Score a run against qrels.

use anyhow::{Context, Result};
use compat_core::prelude::*;
use std::path::Path;

use crate::config::OutputFormat;
use crate::output;

/// Which compatibility measure to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Graded judgments, `topic iteration docno grade`.
    Graded,
    /// Subtopic judgments, `topic subtopic docno grade`.
    Diversity,
}

pub struct Options {
    pub persistence: f64,
    pub format: OutputFormat,
}

pub fn run(measure: Measure, qrels_path: &Path, run_path: &Path, options: &Options) -> Result<()> {
    // An out-of-range p is a diagnostic, not a failure: report it and stop.
    let persistence = match Persistence::new(options.persistence) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("{err}");
            return Ok(());
        }
    };

    let report = score_files(measure, qrels_path, run_path, persistence)?;
    output::emit(&report, options.format)
}

/// Read both files and evaluate the run.
pub fn score_files(
    measure: Measure,
    qrels_path: &Path,
    run_path: &Path,
    persistence: Persistence,
) -> Result<Report> {
    let report = match measure {
        Measure::Graded => {
            let qrels = GradedQrels::from_path(qrels_path).with_context(|| {
                format!("Failed to read qrels: {}", qrels_path.display())
            })?;
            let run = read_run(run_path)?;
            evaluate_graded(&qrels, &run, persistence)
        }
        Measure::Diversity => {
            let qrels = SubtopicQrels::from_path(qrels_path).with_context(|| {
                format!("Failed to read qrels: {}", qrels_path.display())
            })?;
            let run = read_run(run_path)?;
            evaluate_diversity(&qrels, &run, persistence)
        }
    };
    Ok(report)
}

fn read_run(path: &Path) -> Result<Run> {
    Run::from_path(path).with_context(|| format!("Failed to read run: {}", path.display()))
}
