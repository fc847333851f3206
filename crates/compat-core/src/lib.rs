//! # Compat Core
//!
//! Offline evaluation by maximum similarity to an ideal ranking.
//!
//! A run is scored per topic by its rank-biased overlap (RBO) with the best
//! ranking the relevance judgments allow. Two measures are provided:
//!
//! - **Graded compatibility** — the ideal orders relevant documents by grade,
//!   and each score is normalized by the ideal's similarity to itself.
//! - **Diversity compatibility** — the ideal greedily interleaves documents so
//!   that every subtopic is covered as early as possible.
//!
//! In both cases the run's own order breaks ties among equally good documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use compat_core::prelude::*;
//!
//! let qrels = GradedQrels::from_reader("q1 0 d1 2\nq1 0 d2 1\n".as_bytes(), "qrels").unwrap();
//! let run = Run::from_reader(
//!     "q1 Q0 d1 1 5.0 sys\nq1 Q0 d2 2 3.0 sys\n".as_bytes(),
//!     "run",
//! )
//! .unwrap();
//!
//! let report = evaluate_graded(&qrels, &run, Persistence::DEFAULT);
//! assert_eq!(report.average, 1.0);
//! ```

pub mod error;
pub mod evaluate;
pub mod ideal;
mod parse;
pub mod prelude;
pub mod qrels;
pub mod report;
pub mod run;
pub mod similarity;

pub use error::{CompatError, Result};
pub use evaluate::{evaluate, evaluate_diversity, evaluate_graded, Idealize, ScoringConfig};
pub use report::{Report, TopicScore};
pub use similarity::{rbo, Persistence, RboDepth};
