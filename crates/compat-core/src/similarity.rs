//! Rank-biased overlap between two ranked lists.
//!
//! At every depth `i` both prefixes are compared as sets and the overlap
//! ratio `|run[..=i] ∩ ideal[..=i]| / (i + 1)` is added with weight `p^i`.
//! The result is the weighted mean of those ratios over the evaluated depths.

use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Validated persistence parameter for RBO.
///
/// Low values concentrate weight on the top ranks, high values look deeper.
/// 0.95 is roughly comparable to NSCG@20.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Persistence(f64);

impl Persistence {
    pub const MIN: f64 = 0.01;
    pub const MAX: f64 = 0.99;
    pub const DEFAULT: Persistence = Persistence(0.95);

    /// Accept `p` only when it lies in `[0.01, 0.99]`.
    pub fn new(p: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&p) {
            Ok(Persistence(p))
        } else {
            Err(CompatError::PersistenceOutOfRange(p))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Persistence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Persistence {
    type Error = CompatError;

    fn try_from(p: f64) -> Result<Self> {
        Persistence::new(p)
    }
}

impl From<Persistence> for f64 {
    fn from(p: Persistence) -> f64 {
        p.0
    }
}

/// How many depths the RBO sum runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RboDepth {
    /// Always evaluate exactly this many depths.
    Fixed(usize),
    /// Evaluate `min(cap, max(len(run), len(ideal)))` depths.
    Capped(usize),
}

impl RboDepth {
    fn resolve(self, run_len: usize, ideal_len: usize) -> usize {
        match self {
            RboDepth::Fixed(depth) => depth,
            RboDepth::Capped(cap) => cap.min(run_len.max(ideal_len)),
        }
    }
}

/// Rank-biased overlap of `run` against `ideal` with persistence `p`.
///
/// Neither input is modified. Returns 0.0 when no depth is evaluated.
pub fn rbo<T: Eq + Hash>(run: &[T], ideal: &[T], p: f64, depth: RboDepth) -> f64 {
    let depth = depth.resolve(run.len(), ideal.len());

    let mut run_set: HashSet<&T> = HashSet::new();
    let mut ideal_set: HashSet<&T> = HashSet::new();
    // Size of run_set ∩ ideal_set, maintained as items arrive.
    let mut overlap = 0usize;

    let mut score = 0.0;
    let mut normalizer = 0.0;
    let mut weight = 1.0;
    for i in 0..depth {
        if let Some(item) = run.get(i) {
            if run_set.insert(item) && ideal_set.contains(item) {
                overlap += 1;
            }
        }
        if let Some(item) = ideal.get(i) {
            if ideal_set.insert(item) && run_set.contains(item) {
                overlap += 1;
            }
        }
        score += weight * overlap as f64 / (i as f64 + 1.0);
        normalizer += weight;
        weight *= p;
    }

    if normalizer > 0.0 {
        score / normalizer
    } else {
        0.0
    }
}
