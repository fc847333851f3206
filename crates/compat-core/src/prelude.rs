//! Compat Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use compat_core::prelude::*;
//! ```

pub use crate::qrels::{GradedJudgments, GradedQrels, SubtopicJudgments, SubtopicQrels};
pub use crate::run::{Run, TopicRun};

pub use crate::ideal::{idealize_diverse, idealize_graded, idealize_judgments, RankMap};
pub use crate::similarity::{rbo, Persistence, RboDepth};

pub use crate::evaluate::{evaluate, evaluate_diversity, evaluate_graded, Idealize, ScoringConfig};
pub use crate::report::{Report, TopicScore};

// Re-export error types
pub use crate::error::{CompatError, Result};
