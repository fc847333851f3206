//! Retrieval runs in TREC format: `topic iteration docno rank score runid`.
//!
//! The rank column is ignored; documents are re-ranked from their scores.

use crate::error::Result;
use crate::parse::{for_each_record, parse_number};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const RUN_FIELDS: usize = 6;

/// Retrieved documents and their scores for one topic.
#[derive(Debug, Clone, Default)]
pub struct TopicRun {
    documents: Vec<String>,
    scores: HashMap<String, f64>,
}

impl TopicRun {
    /// Record a retrieved document. A repeated document keeps its first
    /// position and takes the latest score.
    pub fn insert(&mut self, docno: impl Into<String>, score: f64) {
        let docno = docno.into();
        if self.scores.insert(docno.clone(), score).is_none() {
            self.documents.push(docno);
        }
    }

    /// Documents by descending score, ties broken by ascending docno.
    ///
    /// Scores use IEEE total order, so a NaN score sorts above every number.
    pub fn ranked(&self) -> Vec<String> {
        let mut ranked = self.documents.clone();
        ranked.sort_by(|a, b| {
            let sa = self.scores.get(a).copied().unwrap_or(f64::NEG_INFINITY);
            let sb = self.scores.get(b).copied().unwrap_or(f64::NEG_INFINITY);
            sb.total_cmp(&sa).then_with(|| a.cmp(b))
        });
        ranked
    }

    pub fn score(&self, docno: &str) -> Option<f64> {
        self.scores.get(docno).copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// A complete run: every topic in order of first appearance, plus the run tag.
#[derive(Debug, Clone, Default)]
pub struct Run {
    runid: String,
    order: Vec<String>,
    topics: HashMap<String, TopicRun>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut run = Run::new();
        for_each_record(reader, source_name, RUN_FIELDS, |line_no, fields| {
            let score = parse_number(fields[4], source_name, line_no, "score")?;
            run.insert(fields[0], fields[2], score, fields[5]);
            Ok(())
        })?;
        tracing::debug!(
            source = source_name,
            topics = run.len(),
            runid = %run.runid,
            "read run"
        );
        Ok(run)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Record one retrieved document. The run tag of the latest line wins.
    pub fn insert(&mut self, topic: &str, docno: &str, score: f64, runid: &str) {
        if !self.topics.contains_key(topic) {
            self.order.push(topic.to_string());
        }
        self.topics
            .entry(topic.to_string())
            .or_default()
            .insert(docno, score);
        self.runid = runid.to_string();
    }

    pub fn runid(&self) -> &str {
        &self.runid
    }

    /// Topics in order of first appearance.
    pub fn topics(&self) -> impl Iterator<Item = (&str, &TopicRun)> {
        self.order
            .iter()
            .filter_map(|topic| self.topics.get(topic).map(|run| (topic.as_str(), run)))
    }

    pub fn get(&self, topic: &str) -> Option<&TopicRun> {
        self.topics.get(topic)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
