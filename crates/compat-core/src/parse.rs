//! Line splitting shared by the TREC-style readers.

use crate::error::{CompatError, Result};
use std::io::BufRead;

/// Visit every line of `reader` split on whitespace, requiring exactly
/// `expected` fields per line. Line numbers passed to `visit` are 1-based.
pub(crate) fn for_each_record<R, F>(
    reader: R,
    source_name: &str,
    expected: usize,
    mut visit: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != expected {
            return Err(CompatError::field_count(
                source_name,
                line_no,
                expected,
                fields.len(),
            ));
        }
        visit(line_no, &fields)?;
    }
    Ok(())
}

pub(crate) fn parse_number(
    value: &str,
    source_name: &str,
    line_no: usize,
    field: &'static str,
) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| CompatError::invalid_number(source_name, line_no, field, value))
}
