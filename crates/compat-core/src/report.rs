//! Evaluation results and their CSV rendering.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Compatibility of one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub compatibility: f64,
}

/// Per-topic scores for one run and their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub runid: String,
    pub topics: Vec<TopicScore>,
    /// Mean over scored topics; 0.0 when none were scored.
    pub average: f64,
    pub scored: usize,
}

impl Report {
    pub fn new(runid: impl Into<String>, topics: Vec<TopicScore>) -> Self {
        let scored = topics.len();
        let average = if scored > 0 {
            topics.iter().map(|t| t.compatibility).sum::<f64>() / scored as f64
        } else {
            0.0
        };
        Self {
            runid: runid.into(),
            topics,
            average,
            scored,
        }
    }

    /// Write `runid,topic,compatibility` rows followed by the average row.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.to_csv().as_bytes())
    }

    pub fn to_csv(&self) -> String {
        let mut csv = String::from("runid,topic,compatibility\n");
        for t in &self.topics {
            csv.push_str(&format!(
                "{},{},{}\n",
                self.runid,
                t.topic,
                format_score(t.compatibility)
            ));
        }
        csv.push_str(&format!(
            "{},average,{}\n",
            self.runid,
            format_score(self.average)
        ));
        csv
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Shortest round-trip form, always with a decimal point or exponent.
pub fn format_score(value: f64) -> String {
    format!("{:?}", value)
}
