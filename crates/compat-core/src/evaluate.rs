//! Per-topic scoring of a run against its ideal ranking.
//!
//! Topics are visited in run order. A topic with no judgments is skipped and
//! does not count towards the average; judged topics the run never mentions
//! are never visited.

use crate::ideal::{idealize_diverse, idealize_judgments};
use crate::qrels::{GradedQrels, SubtopicQrels};
use crate::report::{Report, TopicScore};
use crate::run::Run;
use crate::similarity::{rbo, Persistence, RboDepth};

/// Parameters for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub persistence: Persistence,
    pub depth: RboDepth,
    /// Divide each topic score by the ideal ranking's self-similarity.
    pub normalize: bool,
}

impl ScoringConfig {
    pub const GRADED_DEPTH: usize = 1000;
    pub const DIVERSITY_DEPTH: usize = 100;

    /// Single-relevance compatibility: fixed depth, self-normalized.
    pub fn graded(persistence: Persistence) -> Self {
        Self {
            persistence,
            depth: RboDepth::Fixed(Self::GRADED_DEPTH),
            normalize: true,
        }
    }

    /// Diversity compatibility: depth capped by list length, unnormalized.
    pub fn diversity(persistence: Persistence) -> Self {
        Self {
            persistence,
            depth: RboDepth::Capped(Self::DIVERSITY_DEPTH),
            normalize: false,
        }
    }

    /// Compatibility of `run` with `ideal`.
    pub fn score(&self, run: &[String], ideal: &[String]) -> f64 {
        let p = self.persistence.value();
        let score = rbo(run, ideal, p, self.depth);
        if !self.normalize {
            return score;
        }
        let best = rbo(ideal, ideal, p, self.depth);
        if best > 0.0 {
            score / best
        } else {
            best
        }
    }
}

/// Judgment tables that can build an ideal ranking for a topic.
pub trait Idealize {
    /// Ideal ranking for `topic` given the run's ordering, or `None` when the
    /// topic has no judgments.
    fn idealize(&self, topic: &str, ranked: &[String]) -> Option<Vec<String>>;
}

impl Idealize for GradedQrels {
    fn idealize(&self, topic: &str, ranked: &[String]) -> Option<Vec<String>> {
        self.get(topic).map(|judgments| idealize_judgments(ranked, judgments))
    }
}

impl Idealize for SubtopicQrels {
    fn idealize(&self, topic: &str, ranked: &[String]) -> Option<Vec<String>> {
        self.get(topic).map(|judgments| idealize_diverse(judgments, ranked))
    }
}

/// Score every judged topic of `run` and average the results.
pub fn evaluate<Q: Idealize + ?Sized>(qrels: &Q, run: &Run, config: &ScoringConfig) -> Report {
    let mut topics = Vec::new();

    for (topic, topic_run) in run.topics() {
        let ranked = topic_run.ranked();
        let Some(ideal) = qrels.idealize(topic, &ranked) else {
            tracing::debug!(topic, "no judgments, skipping");
            continue;
        };
        let compatibility = config.score(&ranked, &ideal);
        tracing::debug!(
            topic,
            retrieved = ranked.len(),
            ideal = ideal.len(),
            compatibility,
            "scored topic"
        );
        topics.push(TopicScore {
            topic: topic.to_string(),
            compatibility,
        });
    }

    let report = Report::new(run.runid(), topics);
    tracing::info!(
        runid = %report.runid,
        scored = report.scored,
        average = report.average,
        "evaluation complete"
    );
    report
}

/// Single-relevance compatibility of `run`.
pub fn evaluate_graded(qrels: &GradedQrels, run: &Run, persistence: Persistence) -> Report {
    evaluate(qrels, run, &ScoringConfig::graded(persistence))
}

/// Diversity compatibility of `run`.
pub fn evaluate_diversity(qrels: &SubtopicQrels, run: &Run, persistence: Persistence) -> Report {
    evaluate(qrels, run, &ScoringConfig::diversity(persistence))
}
