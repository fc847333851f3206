//! End-to-end diversity compatibility tests.

use compat_core::prelude::*;

fn qrels(text: &str) -> SubtopicQrels {
    SubtopicQrels::from_reader(text.as_bytes(), "qrels").expect("qrels should parse")
}

fn run(text: &str) -> Run {
    Run::from_reader(text.as_bytes(), "run").expect("run should parse")
}

#[test]
fn ideal_alternates_between_subtopics() {
    let q = qrels("q1 1 a1 1\nq1 1 a2 1\nq1 2 b1 1\nq1 2 b2 1\n");
    let r = run("q1 0 a1 1 4.0 r\nq1 0 a2 2 3.0 r\nq1 0 b1 3 2.0 r\nq1 0 b2 4 1.0 r\n");
    let ranked = r.get("q1").unwrap().ranked();
    assert_eq!(q.idealize("q1", &ranked).unwrap(), vec!["a1", "b1", "a2", "b2"]);
}

#[test]
fn unretrieved_judged_documents_still_join_the_ideal() {
    let q = qrels("q1 1 a 1\nq1 2 b 1\nq1 3 c 1\n");
    let r = run("q1 0 c 1 1.0 r\n");
    let ranked = r.get("q1").unwrap().ranked();
    assert_eq!(q.idealize("q1", &ranked).unwrap(), vec!["c", "a", "b"]);
}

#[test]
fn diversified_run_beats_redundant_run() {
    let q = qrels("q1 1 a1 1\nq1 1 a2 1\nq1 2 b1 1\n");
    let diverse = run("q1 0 a1 1 3.0 r\nq1 0 b1 2 2.0 r\nq1 0 a2 3 1.0 r\n");
    let redundant = run("q1 0 a1 1 3.0 r\nq1 0 a2 2 2.0 r\nq1 0 b1 3 1.0 r\n");

    let p = Persistence::DEFAULT;
    let good = evaluate_diversity(&q, &diverse, p).average;
    let worse = evaluate_diversity(&q, &redundant, p).average;
    assert!((good - 1.0).abs() < 1e-10);
    assert!(worse < good);
}

#[test]
fn diversity_scores_are_not_self_normalized() {
    // The run retrieves only one of two judged documents, so the raw
    // overlap never reaches the full ideal.
    let q = qrels("q1 1 a 1\nq1 2 b 1\n");
    let r = run("q1 0 a 1 1.0 r\n");
    let report = evaluate_diversity(&q, &r, Persistence::DEFAULT);
    let expected = rbo(&["a".to_string()], &["a".to_string(), "b".to_string()], 0.95, RboDepth::Capped(100));
    assert!((report.average - expected).abs() < 1e-10);
    assert!(report.average < 1.0);
}

#[test]
fn zero_grade_lines_do_not_add_documents_or_subtopics() {
    let r = run("q1 0 x 1 2.0 r\nq1 0 a 2 1.0 r\n");
    let with_zero = qrels("q1 1 a 1\nq1 2 x 0\nq1 3 a 0\n");
    let without = qrels("q1 1 a 1\n");
    assert_eq!(
        evaluate_diversity(&with_zero, &r, Persistence::DEFAULT),
        evaluate_diversity(&without, &r, Persistence::DEFAULT)
    );
}

#[test]
fn malformed_qrels_fail_fast() {
    let err = SubtopicQrels::from_reader("q1 1 a 1\nq1 1 a 1 extra\n".as_bytes(), "qrels")
        .unwrap_err();
    assert_eq!(err, CompatError::field_count("qrels", 2, 4, 5));
}
