use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{ChapterMap, Question};

/// Read-only question store. Loaded once at startup and borrowed for the
/// process lifetime; invalidation is a process restart.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    chapters: ChapterMap,
}

impl QuestionBank {
    /// Parses the chapter→questions JSON document at `path`.
    ///
    /// A malformed document fails with the parser's line and column so the
    /// operator can fix the source file; there is no partial load.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let content =
            fs::read_to_string(path).map_err(|e| QuizError::storage("read", path, e))?;
        let chapters: ChapterMap =
            serde_json::from_str(&content).map_err(|e| QuizError::parse(path, &e))?;
        let bank = Self { chapters };
        bank.check_questions(path)?;
        Ok(bank)
    }

    pub fn from_chapters(chapters: ChapterMap) -> Self {
        Self { chapters }
    }

    // Structurally valid JSON can still be an unusable bank.
    fn check_questions(&self, path: &Path) -> Result<(), QuizError> {
        for (chapter, questions) in &self.chapters {
            for (i, q) in questions.iter().enumerate() {
                if q.options.len() < 2 {
                    return Err(QuizError::validation(format!(
                        "{}: chapter {:?}, question {}: needs at least 2 options",
                        path.display(),
                        chapter,
                        i + 1,
                    )));
                }
                if q.answer_index >= q.options.len() {
                    return Err(QuizError::validation(format!(
                        "{}: chapter {:?}, question {}: answer_index {} out of range ({} options)",
                        path.display(),
                        chapter,
                        i + 1,
                        q.answer_index,
                        q.options.len(),
                    )));
                }
            }
        }
        Ok(())
    }

    /// Chapter names in listing order.
    pub fn chapter_names(&self) -> Vec<&str> {
        self.chapters.keys().map(String::as_str).collect()
    }

    pub fn question_count(&self, chapter: &str) -> usize {
        self.chapters.get(chapter).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Concatenation of the selected chapters' question lists, unshuffled.
    /// Chapters absent from the bank contribute nothing.
    pub fn pool(&self, selected: &BTreeSet<String>) -> Vec<Question> {
        let mut pooled = Vec::new();
        for chapter in selected {
            if let Some(questions) = self.chapters.get(chapter) {
                pooled.extend(questions.iter().cloned());
            }
        }
        pooled
    }
}
