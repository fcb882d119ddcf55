use std::collections::BTreeSet;
use std::fs;

use chapquiz::bank::QuestionBank;
use chapquiz::engine::{Band, QuizSession};
use chapquiz::error::QuizError;
use chapquiz::model::{ChapterMap, Feedback, Question, ResultRecord};
use chapquiz::results::ResultsStore;

fn question(text: &str, options: &[&str], answer_index: usize) -> Question {
    Question {
        question: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer_index,
        feedback: Feedback {
            correct: format!("{} correct", text),
            incorrect: format!("{} incorrect", text),
        },
    }
}

fn sample_bank() -> QuestionBank {
    let mut chapters = ChapterMap::new();
    chapters.insert(
        "loops".to_string(),
        vec![
            question("L1", &["while", "do-while"], 1),
            question("L2", &["break", "continue", "pass"], 0),
        ],
    );
    chapters.insert(
        "strings".to_string(),
        vec![
            question("S1", &["lower", "upper"], 0),
            question("S2", &["2", "3", "4"], 1),
            question("S3", &["yes", "no"], 1),
        ],
    );
    QuestionBank::from_chapters(chapters)
}

fn selection(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn texts(session: &QuizSession) -> Vec<String> {
    // Drains a clone of the session to observe the queue contents.
    let mut session = session.clone();
    let mut seen = Vec::new();
    while let Some(q) = session.current().cloned() {
        seen.push(q.question.clone());
        session.answer(&q.options[0]).unwrap();
    }
    seen.sort();
    seen
}

#[test]
fn test_start_pools_selected_chapters() {
    let bank = sample_bank();
    let session = QuizSession::start(&bank, &selection(&["loops", "strings"])).unwrap();

    let (index, total) = session.position();
    assert_eq!(index, 0);
    assert_eq!(total, 5);

    // Same multiset of questions as the source chapters, order aside.
    assert_eq!(texts(&session), vec!["L1", "L2", "S1", "S2", "S3"]);
}

#[test]
fn test_start_rejects_empty_selection() {
    let bank = sample_bank();
    let err = QuizSession::start(&bank, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
}

#[test]
fn test_start_rejects_selection_without_questions() {
    let mut chapters = ChapterMap::new();
    chapters.insert("empty".to_string(), Vec::new());
    let bank = QuestionBank::from_chapters(chapters);

    let err = QuizSession::start(&bank, &selection(&["empty"])).unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
}

#[test]
fn test_counter_invariants_through_a_run() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops", "strings"])).unwrap();

    loop {
        let (index, total) = session.position();
        assert!(session.score() <= session.answered());
        assert_eq!(session.answered() as usize, index);
        assert!(index <= total);

        let Some(q) = session.current().cloned() else {
            break;
        };
        session.answer(&q.options[0]).unwrap();
    }

    assert!(session.is_finished());
    assert_eq!(session.answered(), 5);
}

#[test]
fn test_unknown_choice_rejected_without_advancing() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops"])).unwrap();

    let err = session.answer("not an option").unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
    assert_eq!(session.answered(), 0);
    assert_eq!(session.position().0, 0);
}

#[test]
fn test_answer_after_completion_rejected() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops"])).unwrap();

    while let Some(q) = session.current().cloned() {
        session.answer(&q.options[0]).unwrap();
    }
    assert!(session.is_finished());

    let err = session.answer("while").unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
    assert_eq!(session.answered(), 2);
}

#[test]
fn test_band_boundaries_inclusive() {
    assert_eq!(Band::from_pct(80.0), Band::Excellent);
    assert_eq!(Band::from_pct(75.0), Band::Excellent);
    assert_eq!(Band::from_pct(60.0), Band::Good);
    assert_eq!(Band::from_pct(50.0), Band::Good);
    assert_eq!(Band::from_pct(30.0), Band::Encouraging);
    assert_eq!(Band::from_pct(25.0), Band::Encouraging);
    assert_eq!(Band::from_pct(10.0), Band::NeedsImprovement);
    assert_eq!(Band::from_pct(0.0), Band::NeedsImprovement);
}

#[test]
fn test_pct_rounds_to_one_decimal() {
    let mut chapters = ChapterMap::new();
    chapters.insert(
        "c".to_string(),
        vec![
            question("Q1", &["a", "b"], 0),
            question("Q2", &["a", "b"], 0),
            question("Q3", &["a", "b"], 0),
        ],
    );
    let bank = QuestionBank::from_chapters(chapters);
    let mut session = QuizSession::start(&bank, &selection(&["c"])).unwrap();

    // One right, two wrong: 1/3 = 33.333... → 33.3
    session.answer("a").unwrap();
    session.answer("b").unwrap();
    let outcome = session.answer("b").unwrap();

    let summary = outcome.summary.unwrap();
    assert_eq!(summary.score, 1);
    assert_eq!(summary.answered, 3);
    assert_eq!(summary.pct, 33.3);
}

#[test]
fn test_loops_scenario_one_right_one_wrong() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops"])).unwrap();

    // Correct answer for whichever question came up first
    let q1 = session.current().cloned().unwrap();
    let outcome = session.answer(&q1.options[q1.answer_index]).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.feedback, q1.feedback.correct);
    assert!(outcome.summary.is_none());

    // Wrong answer for the second
    let q2 = session.current().cloned().unwrap();
    let wrong = q2
        .options
        .iter()
        .enumerate()
        .find(|(i, _)| *i != q2.answer_index)
        .map(|(_, opt)| opt.clone())
        .unwrap();
    let outcome = session.answer(&wrong).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.feedback, q2.feedback.incorrect);

    let summary = outcome.summary.unwrap();
    assert_eq!(summary.score, 1);
    assert_eq!(summary.answered, 2);
    assert_eq!(summary.pct, 50.0);
    assert_eq!(summary.band, Band::Good);

    // The finished run is recorded in the history file
    let tmp_dir = std::env::temp_dir().join("chapquiz_test_scenario");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let store = ResultsStore::new(tmp_dir.join("results.json"));

    let chapters: Vec<String> = session.selected_chapters().iter().cloned().collect();
    store
        .append(ResultRecord::new(
            "Invité".to_string(),
            chapters,
            summary.score,
            summary.answered,
            summary.pct,
        ))
        .unwrap();

    let records = store.list_all().unwrap();
    let last = records.last().unwrap();
    assert_eq!(last.chapters, vec!["loops".to_string()]);
    assert_eq!(last.score, 1);
    assert_eq!(last.answered, 2);
    assert_eq!(last.pct, 50.0);

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_restart_resets_counters_over_same_pool() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops", "strings"])).unwrap();
    let before = texts(&session);

    while let Some(q) = session.current().cloned() {
        session.answer(&q.options[q.answer_index]).unwrap();
    }
    assert!(session.is_finished());
    assert_eq!(session.score(), 5);

    session.restart().unwrap();
    assert!(!session.is_finished());
    assert_eq!(session.score(), 0);
    assert_eq!(session.answered(), 0);
    assert_eq!(session.position(), (0, 5));
    assert_eq!(texts(&session), before);
}

#[test]
fn test_restart_rejected_while_in_progress() {
    let bank = sample_bank();
    let mut session = QuizSession::start(&bank, &selection(&["loops"])).unwrap();

    let err = session.restart().unwrap_err();
    assert!(matches!(err, QuizError::Validation(_)));
    assert_eq!(session.position().0, 0);
}

#[test]
fn test_reselect_hands_back_the_selection() {
    let bank = sample_bank();
    let selected = selection(&["loops", "strings"]);
    let mut session = QuizSession::start(&bank, &selected).unwrap();

    while let Some(q) = session.current().cloned() {
        session.answer(&q.options[0]).unwrap();
    }

    assert_eq!(session.reselect(), selected);
}
