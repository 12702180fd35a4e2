use std::fs;
use std::path::PathBuf;

use quiz_core::model::Letter;
use quiz_core::time::fixed_clock;
use services::{LoadError, QuestionBank, QuizError, QuizService, SessionError};

fn write_bank(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quiz-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn letter(label: &str) -> Letter {
    label.parse().unwrap()
}

#[test]
fn full_run_from_file() {
    let path = write_bank(
        "full-run",
        r#"[
            {
                "subject": "Cardiology",
                "topic": "Arrhythmia",
                "question": "65-year-old with an irregularly irregular pulse. Most likely rhythm?",
                "options": ["Sinus rhythm", "Atrial fibrillation", "Ventricular tachycardia"],
                "answer": "B",
                "explanation": "Irregularly irregular pulse with absent P waves is AF.",
                "educational_objective": "Recognize atrial fibrillation clinically."
            },
            {
                "question": "Is aspirin an NSAID?",
                "options": ["Yes", "No"],
                "answer": "A"
            }
        ]"#,
    );

    let mut session = QuizService::new(fixed_clock()).start(&path).unwrap();
    assert_eq!(session.total(), 2);

    let first = session.current_question().unwrap();
    assert_eq!(first.subject(), "Cardiology");
    assert_eq!(first.choices().count(), 3);

    session.select_answer(letter("B"));
    assert_eq!(session.last_was_correct(), Some(true));
    session.advance();

    // Second record exercised the defaults.
    let second = session.current_question().unwrap();
    assert_eq!(second.subject(), "General Medicine");
    assert_eq!(second.explanation(), "No explanation available.");

    session.select_answer(letter("B"));
    assert_eq!(session.last_was_correct(), Some(false));
    session.advance();

    assert!(session.is_complete());
    assert_eq!(session.score(), 1);
    let summary = session.summary().unwrap();
    assert_eq!(summary.percent(), 50.0);

    fs::remove_file(path).unwrap();
}

#[test]
fn restart_runs_the_same_bank_again() {
    let path = write_bank(
        "restart",
        r#"[{"question": "Q", "options": ["a", "b"], "answer": "A"}]"#,
    );

    let mut session = QuizService::new(fixed_clock()).start(&path).unwrap();
    session.select_answer(letter("A"));
    session.advance();
    assert!(session.is_complete());

    session.restart();
    assert!(!session.is_complete());
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_question().unwrap().text(), "Q");

    fs::remove_file(path).unwrap();
}

#[test]
fn missing_bank_stops_the_session_from_starting() {
    let path = std::env::temp_dir().join("quiz-no-such-bank.json");
    let err = QuizService::new(fixed_clock()).start(&path).unwrap_err();
    assert!(matches!(err, QuizError::Load(LoadError::Missing { .. })));
}

#[test]
fn malformed_bank_is_a_parse_error() {
    let path = write_bank("malformed", "{ not json");
    let err = QuestionBank::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    fs::remove_file(path).unwrap();
}

#[test]
fn empty_bank_is_a_session_error() {
    let path = write_bank("empty", "[]");
    let err = QuizService::new(fixed_clock()).start(&path).unwrap_err();
    assert!(matches!(err, QuizError::Session(SessionError::Empty)));
    fs::remove_file(path).unwrap();
}
