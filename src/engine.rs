use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::model::Question;

/// Qualitative score category derived from the percentage correct.
/// Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Excellent,
    Good,
    Encouraging,
    NeedsImprovement,
}

impl Band {
    pub fn from_pct(pct: f64) -> Self {
        if pct >= 75.0 {
            Band::Excellent
        } else if pct >= 50.0 {
            Band::Good
        } else if pct >= 25.0 {
            Band::Encouraging
        } else {
            Band::NeedsImprovement
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Band::Excellent => "Bravo!",
            Band::Good => "Good work, keep it up!",
            Band::Encouraging => "Keep at it, you're getting there.",
            Band::NeedsImprovement => "Persevere and review the chapters.",
        }
    }
}

/// Final tally of a completed quiz. `pct` is computed over `answered`, not
/// over the queue length, and rounded to one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub score: u32,
    pub answered: u32,
    pub pct: f64,
    pub band: Band,
}

/// What `answer` observed, handed to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Answered {
    pub correct: bool,
    pub feedback: String,
    /// Present exactly when this answer completed the quiz.
    pub summary: Option<Summary>,
}

/// One quiz run over a shuffled question queue. Created by `start`, mutated
/// only through `answer` and `restart`, discarded by `reselect`.
///
/// Invariant: `score <= answered == index <= queue.len()`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    selected_chapters: BTreeSet<String>,
    queue: Vec<Question>,
    index: usize,
    score: u32,
    answered: u32,
}

impl QuizSession {
    /// Builds the queue from the selected chapters and applies a uniform
    /// random permutation. Rejects an empty selection, and a selection whose
    /// pooled question list is empty.
    pub fn start(bank: &QuestionBank, selected: &BTreeSet<String>) -> Result<Self, QuizError> {
        if selected.is_empty() {
            return Err(QuizError::validation(
                "Select at least one chapter to start the quiz.",
            ));
        }
        let mut queue = bank.pool(selected);
        if queue.is_empty() {
            return Err(QuizError::validation(
                "The selected chapters contain no questions.",
            ));
        }
        queue.shuffle(&mut thread_rng());
        Ok(Self {
            selected_chapters: selected.clone(),
            queue,
            index: 0,
            score: 0,
            answered: 0,
        })
    }

    /// Scores `choice` against the current question and advances the queue.
    ///
    /// `choice` must match one of the current question's options; anything
    /// else is a validation error and leaves the session untouched. Calling
    /// after the last question is an error, not a crash.
    pub fn answer(&mut self, choice: &str) -> Result<Answered, QuizError> {
        let question = self.queue.get(self.index).ok_or_else(|| {
            QuizError::validation("The quiz is already finished.")
        })?;

        let position = question
            .options
            .iter()
            .position(|opt| opt == choice)
            .ok_or_else(|| {
                QuizError::validation(format!("{:?} is not one of the options.", choice))
            })?;

        let correct = position == question.answer_index;
        let feedback = if correct {
            question.feedback.correct.clone()
        } else {
            question.feedback.incorrect.clone()
        };

        self.answered += 1;
        if correct {
            self.score += 1;
        }
        self.index += 1;

        let summary = self.is_finished().then(|| self.summary());
        Ok(Answered {
            correct,
            feedback,
            summary,
        })
    }

    /// Reshuffles the same question pool and zeroes the counters. Only valid
    /// once the quiz is finished.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        if !self.is_finished() {
            return Err(QuizError::validation("The quiz is still in progress."));
        }
        // A fresh permutation draw, not the previous order.
        self.queue.shuffle(&mut thread_rng());
        self.index = 0;
        self.score = 0;
        self.answered = 0;
        Ok(())
    }

    /// Discards the session, handing back the chapter set so the selection
    /// screen can re-tick it.
    pub fn reselect(self) -> BTreeSet<String> {
        self.selected_chapters
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.queue.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.queue.get(self.index)
    }

    /// (0-based index of the current question, queue length).
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.queue.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn selected_chapters(&self) -> &BTreeSet<String> {
        &self.selected_chapters
    }

    /// Tally over what was actually answered. `answered` is always > 0 when
    /// the quiz finishes, since finishing requires at least one answer.
    pub fn summary(&self) -> Summary {
        let pct = if self.answered == 0 {
            0.0
        } else {
            let raw = f64::from(self.score) / f64::from(self.answered) * 100.0;
            (raw * 10.0).round() / 10.0
        };
        Summary {
            score: self.score,
            answered: self.answered,
            pct,
            band: Band::from_pct(pct),
        }
    }
}
