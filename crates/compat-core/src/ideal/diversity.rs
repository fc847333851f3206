use super::RankMap;
use crate::qrels::SubtopicJudgments;
use std::collections::{HashMap, HashSet};

/// Subtopics that get a boost on the next pick.
///
/// Among subtopics that still have uncovered documents, the ones placed the
/// fewest times so far are prioritized. Once every subtopic is exhausted the
/// result is empty.
pub fn prioritize<'a>(
    count: &HashMap<&'a str, usize>,
    available: &HashMap<&'a str, usize>,
) -> HashSet<&'a str> {
    let open: Vec<(&'a str, usize)> = count
        .iter()
        .filter(|&(subtopic, &placed)| placed < available.get(subtopic).copied().unwrap_or(0))
        .map(|(&subtopic, &placed)| (subtopic, placed))
        .collect();
    let top = open.iter().map(|&(_, placed)| placed).min();

    open.into_iter()
        .filter(|&(_, placed)| Some(placed) == top)
        .map(|(subtopic, _)| subtopic)
        .collect()
}

/// Greedy subtopic-balanced ordering of every judged document.
///
/// Each step scores the remaining documents by how many prioritized
/// subtopics they cover, picks the best one (run position breaks ties) and
/// credits its subtopics. The pool starts in judgment order and is re-sorted
/// in place every step, so earlier steps carry into later tie-breaks.
pub fn idealize_diverse(judgments: &SubtopicJudgments, run: &[String]) -> Vec<String> {
    let ranks = RankMap::new(run);
    let coverage = move |docno: &str| judgments.subtopics(docno).into_iter().flatten();

    let mut count: HashMap<&str, usize> = HashMap::new();
    let mut available: HashMap<&str, usize> = HashMap::new();
    for docno in judgments.documents() {
        for subtopic in coverage(docno.as_str()) {
            count.entry(subtopic.as_str()).or_insert(0);
            *available.entry(subtopic.as_str()).or_insert(0) += 1;
        }
    }

    let mut remaining: Vec<&str> = judgments.documents().iter().map(String::as_str).collect();
    let mut ideal = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let priorities = prioritize(&count, &available);
        let score = |docno: &str| {
            coverage(docno)
                .filter(|subtopic| priorities.contains(subtopic.as_str()))
                .count()
        };

        remaining.sort_by_key(|docno| ranks.rank(*docno));
        remaining.sort_by_key(|docno| std::cmp::Reverse(score(*docno)));

        let best = remaining.remove(0);
        for subtopic in coverage(best) {
            if let Some(placed) = count.get_mut(subtopic.as_str()) {
                *placed += 1;
            }
        }
        ideal.push(best.to_string());
    }

    tracing::trace!(
        documents = ideal.len(),
        subtopics = available.len(),
        "built diversified ideal"
    );
    ideal
}
