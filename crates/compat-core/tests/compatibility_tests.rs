//! End-to-end graded compatibility tests.

use compat_core::prelude::*;
use std::io::Write;

fn qrels(text: &str) -> GradedQrels {
    GradedQrels::from_reader(text.as_bytes(), "qrels").expect("qrels should parse")
}

fn run(text: &str) -> Run {
    Run::from_reader(text.as_bytes(), "run").expect("run should parse")
}

#[test]
fn run_matching_ideal_scores_one() {
    let q = qrels("q1 0 d1 2\nq1 0 d2 1\n");
    let r = run("q1 0 d1 1 5.0 run1\nq1 0 d2 2 3.0 run1\n");

    assert_eq!(q.idealize("q1", &r.get("q1").unwrap().ranked()).unwrap(), vec!["d1", "d2"]);

    let report = evaluate_graded(&q, &r, Persistence::new(0.95).unwrap());
    assert_eq!(report.runid, "run1");
    assert_eq!(report.scored, 1);
    assert!((report.topics[0].compatibility - 1.0).abs() < 1e-10);
    assert!((report.average - 1.0).abs() < 1e-10);
    assert_eq!(
        report.to_csv(),
        "runid,topic,compatibility\nrun1,q1,1.0\nrun1,average,1.0\n"
    );
}

#[test]
fn inverted_run_scores_below_one() {
    let q = qrels("q1 0 d1 2\nq1 0 d2 1\n");
    let r = run("q1 0 d1 1 1.0 r\nq1 0 d2 2 3.0 r\n");
    let report = evaluate_graded(&q, &r, Persistence::DEFAULT);
    let score = report.topics[0].compatibility;
    assert!(score > 0.0 && score < 1.0, "score = {score}");
}

#[test]
fn zero_grade_judgment_has_no_effect() {
    let r = run("q1 0 d9 1 9.0 r\nq1 0 d1 2 5.0 r\nq1 0 d2 3 3.0 r\n");
    let with_zero = qrels("q1 0 d1 2\nq1 0 d9 0\nq1 0 d2 1\n");
    let without = qrels("q1 0 d1 2\nq1 0 d2 1\n");

    let ranked = r.get("q1").unwrap().ranked();
    let ideal = with_zero.idealize("q1", &ranked).unwrap();
    assert!(!ideal.contains(&"d9".to_string()));

    let a = evaluate_graded(&with_zero, &r, Persistence::DEFAULT);
    let b = evaluate_graded(&without, &r, Persistence::DEFAULT);
    assert_eq!(a, b);
}

#[test]
fn only_topics_in_both_tables_are_averaged() {
    let q = qrels("q1 0 a 1\nq3 0 z 1\n");
    let r = run("q2 0 a 1 1.0 r\nq1 0 a 1 1.0 r\nq1 0 b 2 0.5 r\n");
    let report = evaluate_graded(&q, &r, Persistence::DEFAULT);
    let topics: Vec<&str> = report.topics.iter().map(|t| t.topic.as_str()).collect();
    assert_eq!(topics, vec!["q1"]);
    assert_eq!(report.average, report.topics[0].compatibility);
}

#[test]
fn no_overlap_reports_zero_average() {
    let q = qrels("q9 0 a 1\n");
    let r = run("q1 0 a 1 1.0 r\n");
    let report = evaluate_graded(&q, &r, Persistence::DEFAULT);
    assert_eq!(report.scored, 0);
    assert_eq!(report.average, 0.0);
    assert_eq!(report.to_csv(), "runid,topic,compatibility\nr,average,0.0\n");
}

#[test]
fn lower_persistence_punishes_top_mistakes_more() {
    let q = qrels("q1 0 a 1\nq1 0 b 1\nq1 0 c 1\n");
    // one non-relevant document ahead of the three relevant ones
    let r = run("q1 0 x 1 4.0 r\nq1 0 a 2 3.0 r\nq1 0 b 3 2.0 r\nq1 0 c 4 1.0 r\n");
    let shallow = evaluate_graded(&q, &r, Persistence::new(0.5).unwrap()).average;
    let deep = evaluate_graded(&q, &r, Persistence::new(0.99).unwrap()).average;
    assert!(shallow < deep, "shallow = {shallow}, deep = {deep}");
}

#[test]
fn reads_tables_from_files() {
    let mut qrels_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(qrels_file, "q1 0 d1 1").unwrap();
    let mut run_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(run_file, "q1 Q0 d1 1 1.5 sys").unwrap();

    let q = GradedQrels::from_path(qrels_file.path()).unwrap();
    let r = Run::from_path(run_file.path()).unwrap();
    let report = evaluate_graded(&q, &r, Persistence::DEFAULT);
    assert_eq!(report.runid, "sys");
    assert!((report.average - 1.0).abs() < 1e-10);
}

#[test]
fn malformed_run_line_names_file_and_line() {
    let mut run_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(run_file, "q1 Q0 d1 1 1.5 sys").unwrap();
    writeln!(run_file, "q1 Q0 d2 2 sys").unwrap();

    let err = Run::from_path(run_file.path()).unwrap_err();
    match err {
        CompatError::FieldCount { line, expected, found, .. } => {
            assert_eq!((line, expected, found), (2, 6, 5));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = GradedQrels::from_path("/nonexistent/compat/qrels.txt").unwrap_err();
    assert!(matches!(err, CompatError::Io(_)));
}
