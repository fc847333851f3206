use super::RankMap;
use crate::qrels::GradedJudgments;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Order `candidates` by descending grade, breaking ties by run position.
///
/// Candidates the run never retrieved keep their relative order after the
/// retrieved ones of the same grade.
pub fn idealize_graded(
    run: &[String],
    candidates: &[String],
    grades: &HashMap<String, f64>,
) -> Vec<String> {
    let ranks = RankMap::new(run);
    let grade = |docno: &str| grades.get(docno).copied().unwrap_or(0.0);

    let mut ideal = candidates.to_vec();
    ideal.sort_by_key(|docno| ranks.rank(docno));
    ideal.sort_by(|a, b| {
        grade(b.as_str())
            .partial_cmp(&grade(a.as_str()))
            .unwrap_or(Ordering::Equal)
    });
    ideal
}

/// [`idealize_graded`] over one topic's judgments.
pub fn idealize_judgments(run: &[String], judgments: &GradedJudgments) -> Vec<String> {
    idealize_graded(run, judgments.candidates(), judgments.grades())
}
