use std::fs;
use std::path::Path;

use chapquiz::bank::QuestionBank;
use chapquiz::error::QuizError;

#[test]
fn test_load_fixture() {
    let bank = QuestionBank::load(Path::new("tests/fixtures/questions.json")).unwrap();

    assert_eq!(bank.chapter_names(), vec!["Boucles", "Chaînes", "Fonctions"]);
    assert_eq!(bank.question_count("Boucles"), 2);
    assert_eq!(bank.question_count("Chaînes"), 3);
    assert_eq!(bank.question_count("Fonctions"), 1);
    assert_eq!(bank.question_count("Inconnu"), 0);
    assert!(!bank.is_empty());
}

#[test]
fn test_malformed_json_reports_location() {
    let tmp_dir = std::env::temp_dir().join("chapquiz_test_malformed");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let path = tmp_dir.join("questions.json");

    fs::write(&path, "{\n  \"Boucles\": [\n    { broken\n").unwrap();

    let err = QuestionBank::load(&path).unwrap_err();
    match err {
        QuizError::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert!(column > 0);
        }
        other => panic!("Expected Parse error, got {:?}", other),
    }

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_answer_index_out_of_range_rejected() {
    let tmp_dir = std::env::temp_dir().join("chapquiz_test_bad_index");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let path = tmp_dir.join("questions.json");

    fs::write(
        &path,
        r#"{
            "Boucles": [
                {
                    "question": "Q?",
                    "options": ["a", "b"],
                    "answer_index": 2,
                    "feedback": { "correct": "oui", "incorrect": "non" }
                }
            ]
        }"#,
    )
    .unwrap();

    let err = QuestionBank::load(&path).unwrap_err();
    match err {
        QuizError::Validation(msg) => {
            assert!(msg.contains("answer_index"));
            assert!(msg.contains("Boucles"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_missing_file_is_storage_error() {
    let err = QuestionBank::load(Path::new("tests/fixtures/nonexistent.json")).unwrap_err();
    assert!(matches!(err, QuizError::Storage { .. }));
}
