use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One multiple-choice question as it appears in the question file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: String,
    pub incorrect: String,
}

/// Chapter name → ordered question list, the question file's top-level shape.
pub type ChapterMap = BTreeMap<String, Vec<Question>>;

/// One finished quiz, as persisted in the results file. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub user: String,
    pub chapters: Vec<String>,
    pub score: u32,
    pub answered: u32,
    pub pct: f64,
    pub timestamp: String,
}

impl ResultRecord {
    /// Stamps the record with the current local time.
    pub fn new(user: String, chapters: Vec<String>, score: u32, answered: u32, pct: f64) -> Self {
        Self {
            user,
            chapters,
            score,
            answered,
            pct,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
