//! Construction of the ideal ranking a run is compared against.
//!
//! Both builders share one tie-break discipline: among equally preferred
//! documents, the one the run placed higher comes first, and documents the
//! run never retrieved come after every retrieved one.

mod diversity;
mod graded;

pub use diversity::{idealize_diverse, prioritize};
pub use graded::{idealize_graded, idealize_judgments};

use std::collections::HashMap;

/// Zero-based position of each document in a run.
#[derive(Debug, Clone)]
pub struct RankMap<'a> {
    ranks: HashMap<&'a str, usize>,
    absent: usize,
}

impl<'a> RankMap<'a> {
    pub fn new(run: &'a [String]) -> Self {
        let mut ranks = HashMap::with_capacity(run.len());
        for (i, docno) in run.iter().enumerate() {
            ranks.insert(docno.as_str(), i);
        }
        Self {
            ranks,
            absent: run.len(),
        }
    }

    /// Position of `docno`, or the run length when it was not retrieved.
    pub fn rank(&self, docno: &str) -> usize {
        self.ranks.get(docno).copied().unwrap_or(self.absent)
    }
}
