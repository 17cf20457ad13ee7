#![allow(dead_code)]

use quizfunnel::db::{Db, NewLead, NewQuestion, NewQuiz};
use quizfunnel::models::{parse_answer_labels, QuestionType};

/// A fresh SQLite file URL, unique per call.
pub fn test_db_url() -> String {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizfunnel_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    format!("sqlite://{}", path.display())
}

pub async fn create_test_db() -> Db {
    Db::new(&test_db_url()).await.expect("failed to create test database")
}

pub fn email_lead(email: &str) -> NewLead {
    NewLead {
        email: email.to_string(),
        first_name: None,
        last_name: None,
    }
}

/// Creates an active quiz with `questions` multiple choice questions at
/// orders 1..=questions. Returns the quiz id.
pub async fn create_quiz_with_questions(db: &Db, slug: &str, questions: i64) -> i64 {
    let quiz_id = db
        .create_quiz(NewQuiz {
            name: &format!("Quiz {slug}"),
            slug,
            description: None,
            is_active: true,
        })
        .await
        .expect("create quiz");

    let answers = parse_answer_labels("Yes, No");
    for order in 1..=questions {
        db.create_question(NewQuestion {
            quiz_id,
            question_text: &format!("Question {order}"),
            question_type: QuestionType::MultipleChoice,
            question_order: order,
            answers: &answers,
        })
        .await
        .expect("create question");
    }

    quiz_id
}
