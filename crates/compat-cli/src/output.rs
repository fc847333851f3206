//! Rendering of evaluation reports to stdout.

use anyhow::Result;
use compat_core::Report;
use std::io::{self, BufWriter, Write};

use crate::config::OutputFormat;

pub fn emit(report: &Report, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(report, format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(report: &Report, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Csv => report.write_csv(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}
