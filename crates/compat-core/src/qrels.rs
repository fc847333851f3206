//! Relevance judgments in TREC qrels format.
//!
//! Two readings of the same 4-field line layout are supported:
//!
//! - graded: `topic iteration docno grade`, one grade per document
//! - subtopic: `topic subtopic docno grade`, a set of covered subtopics per document
//!
//! Lines with a grade of zero or below are dropped as they are read.

use crate::error::Result;
use crate::parse::{for_each_record, parse_number};
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const QRELS_FIELDS: usize = 4;

/// Relevant documents for one topic with their grades.
#[derive(Debug, Clone, Default)]
pub struct GradedJudgments {
    /// Documents in the order they were first judged relevant.
    candidates: Vec<String>,
    grades: HashMap<String, f64>,
}

impl GradedJudgments {
    /// Record a positive grade. A repeated document keeps its first position
    /// and the highest grade seen.
    pub fn insert(&mut self, docno: impl Into<String>, grade: f64) {
        let docno = docno.into();
        match self.grades.get_mut(&docno) {
            Some(existing) => {
                if grade > *existing {
                    *existing = grade;
                }
            }
            None => {
                self.candidates.push(docno.clone());
                self.grades.insert(docno, grade);
            }
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn grades(&self) -> &HashMap<String, f64> {
        &self.grades
    }

    pub fn grade(&self, docno: &str) -> Option<f64> {
        self.grades.get(docno).copied()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Graded judgments for every topic.
#[derive(Debug, Clone, Default)]
pub struct GradedQrels {
    topics: HashMap<String, GradedJudgments>,
}

impl GradedQrels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `topic iteration docno grade` lines. The iteration column is ignored.
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut qrels = GradedQrels::new();
        for_each_record(reader, source_name, QRELS_FIELDS, |line_no, fields| {
            let grade = parse_number(fields[3], source_name, line_no, "grade")?;
            qrels.insert(fields[0], fields[2], grade);
            Ok(())
        })?;
        tracing::debug!(source = source_name, topics = qrels.len(), "read graded qrels");
        Ok(qrels)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Record one judgment; grades of zero or below are discarded.
    pub fn insert(&mut self, topic: &str, docno: &str, grade: f64) {
        if grade > 0.0 {
            self.topics
                .entry(topic.to_string())
                .or_default()
                .insert(docno, grade);
        }
    }

    pub fn get(&self, topic: &str) -> Option<&GradedJudgments> {
        self.topics.get(topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Judged documents for one topic with the subtopics each one covers.
#[derive(Debug, Clone, Default)]
pub struct SubtopicJudgments {
    /// Documents in the order they were first judged relevant.
    documents: Vec<String>,
    coverage: HashMap<String, BTreeSet<String>>,
}

impl SubtopicJudgments {
    /// Add `subtopic` to the coverage of `docno`.
    pub fn insert(&mut self, docno: impl Into<String>, subtopic: impl Into<String>) {
        let docno = docno.into();
        if !self.coverage.contains_key(&docno) {
            self.documents.push(docno.clone());
        }
        self.coverage.entry(docno).or_default().insert(subtopic.into());
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn subtopics(&self, docno: &str) -> Option<&BTreeSet<String>> {
        self.coverage.get(docno)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Subtopic judgments for every topic.
#[derive(Debug, Clone, Default)]
pub struct SubtopicQrels {
    topics: HashMap<String, SubtopicJudgments>,
}

impl SubtopicQrels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `topic subtopic docno grade` lines.
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut qrels = SubtopicQrels::new();
        for_each_record(reader, source_name, QRELS_FIELDS, |line_no, fields| {
            let grade = parse_number(fields[3], source_name, line_no, "grade")?;
            qrels.insert(fields[0], fields[1], fields[2], grade);
            Ok(())
        })?;
        tracing::debug!(source = source_name, topics = qrels.len(), "read subtopic qrels");
        Ok(qrels)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Record one judgment; grades of zero or below are discarded.
    pub fn insert(&mut self, topic: &str, subtopic: &str, docno: &str, grade: f64) {
        if grade > 0.0 {
            self.topics
                .entry(topic.to_string())
                .or_default()
                .insert(docno, subtopic);
        }
    }

    pub fn get(&self, topic: &str) -> Option<&SubtopicJudgments> {
        self.topics.get(topic)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
