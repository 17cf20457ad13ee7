mod common;

use common::{create_quiz_with_questions, create_test_db};
use quizfunnel::db::{is_unique_violation, Db, NewLead, NewQuestion, NewQuiz, QuizUpdate};
use quizfunnel::models::{Answer, QuestionType};

#[tokio::test]
async fn reopening_a_database_keeps_its_rows() {
    let url = common::test_db_url();
    let db = Db::new(&url).await.unwrap();
    create_quiz_with_questions(&db, "kept", 2).await;

    let reopened = Db::new(&url).await.unwrap();

    let quiz = reopened.quiz_by_slug("kept").await.unwrap().unwrap();
    assert_eq!(reopened.questions_count(quiz.id).await.unwrap(), 2);
}

#[tokio::test]
async fn create_and_find_quiz_by_slug() {
    let db = create_test_db().await;

    let id = db
        .create_quiz(NewQuiz {
            name: "Product Fit Quiz",
            slug: "product-fit",
            description: Some("Find the right product for you."),
            is_active: true,
        })
        .await
        .unwrap();

    let quiz = db.quiz_by_slug("product-fit").await.unwrap().unwrap();
    assert_eq!(quiz.id, id);
    assert_eq!(quiz.name, "Product Fit Quiz");
    assert_eq!(quiz.description.as_deref(), Some("Find the right product for you."));
    assert!(quiz.is_active);

    assert!(db.quiz_by_slug("nope").await.unwrap().is_none());
    assert!(db.slug_exists("product-fit").await.unwrap());
    assert!(!db.slug_exists("nope").await.unwrap());
}

#[tokio::test]
async fn duplicate_slug_is_refused_by_the_store() {
    let db = create_test_db().await;
    create_quiz_with_questions(&db, "dup", 0).await;

    let res = db
        .create_quiz(NewQuiz {
            name: "Other",
            slug: "dup",
            description: None,
            is_active: true,
        })
        .await;

    assert!(is_unique_violation(&res.unwrap_err()));
    assert_eq!(db.quizzes_count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_quiz_is_last_write_wins() {
    let db = create_test_db().await;
    create_quiz_with_questions(&db, "edit-me", 0).await;

    let updated = db
        .update_quiz(
            "edit-me",
            QuizUpdate {
                name: "First",
                description: Some("one"),
                is_active: true,
            },
        )
        .await
        .unwrap();
    assert!(updated);

    db.update_quiz(
        "edit-me",
        QuizUpdate {
            name: "Second",
            description: None,
            is_active: false,
        },
    )
    .await
    .unwrap();

    let quiz = db.quiz_by_slug("edit-me").await.unwrap().unwrap();
    assert_eq!(quiz.name, "Second");
    assert_eq!(quiz.description, None);
    assert!(!quiz.is_active);
}

#[tokio::test]
async fn update_unknown_quiz_changes_nothing() {
    let db = create_test_db().await;

    let updated = db
        .update_quiz(
            "ghost",
            QuizUpdate {
                name: "Ghost",
                description: None,
                is_active: true,
            },
        )
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(db.quizzes_count().await.unwrap(), 0);
}

#[tokio::test]
async fn deactivating_a_quiz_does_not_cascade() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "inactive", 2).await;
    db.create_lead(quiz_id, &common::email_lead("a@b.com"))
        .await
        .unwrap();

    db.update_quiz(
        "inactive",
        QuizUpdate {
            name: "Quiz inactive",
            description: None,
            is_active: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(db.questions(quiz_id).await.unwrap().len(), 2);
    assert!(db.questions(quiz_id).await.unwrap().iter().all(|q| q.is_active));
    assert_eq!(db.leads_for_quiz(quiz_id).await.unwrap().len(), 1);
    assert_eq!(db.quizzes().await.unwrap().len(), 1);
    assert_eq!(db.quiz_overviews().await.unwrap().len(), 1);
}

#[tokio::test]
async fn questions_are_listed_by_order_then_id() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "ordered", 0).await;

    for order in [3, 1, 2] {
        db.create_question(NewQuestion {
            quiz_id,
            question_text: &format!("Q{order}"),
            question_type: QuestionType::Text,
            question_order: order,
            answers: &[],
        })
        .await
        .unwrap();
    }

    let texts: Vec<String> = db
        .questions(quiz_id)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.question_text)
        .collect();
    assert_eq!(texts, ["Q1", "Q2", "Q3"]);
    assert_eq!(db.questions_count(quiz_id).await.unwrap(), 3);
}

#[tokio::test]
async fn question_by_order_is_an_exact_match() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "gaps", 0).await;

    for order in [1, 3] {
        db.create_question(NewQuestion {
            quiz_id,
            question_text: &format!("Q{order}"),
            question_type: QuestionType::MultipleChoice,
            question_order: order,
            answers: &[Answer::from_label("Yes")],
        })
        .await
        .unwrap();
    }

    let first = db.question_by_order(quiz_id, 1).await.unwrap().unwrap();
    assert_eq!(first.question_text, "Q1");
    assert_eq!(first.answers.0, vec![Answer::from_label("Yes")]);
    assert!(db.question_by_order(quiz_id, 2).await.unwrap().is_none());
    assert!(db.question_by_order(quiz_id, 3).await.unwrap().is_some());
    assert!(db.question_by_order(quiz_id, 4).await.unwrap().is_none());
}

#[tokio::test]
async fn question_order_is_unique_per_quiz() {
    let db = create_test_db().await;
    let first = create_quiz_with_questions(&db, "first", 1).await;
    let second = create_quiz_with_questions(&db, "second", 0).await;

    assert!(db.question_order_taken(first, 1).await.unwrap());
    assert!(!db.question_order_taken(second, 1).await.unwrap());

    let duplicate = db
        .create_question(NewQuestion {
            quiz_id: first,
            question_text: "Again",
            question_type: QuestionType::Text,
            question_order: 1,
            answers: &[],
        })
        .await;
    assert!(is_unique_violation(&duplicate.unwrap_err()));
    assert_eq!(db.questions_count(first).await.unwrap(), 1);

    // Same order in another quiz is fine
    db.create_question(NewQuestion {
        quiz_id: second,
        question_text: "Other quiz",
        question_type: QuestionType::Text,
        question_order: 1,
        answers: &[],
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn lead_without_names_stores_nulls() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "leads", 0).await;

    db.create_lead(quiz_id, &common::email_lead("a@b.com"))
        .await
        .unwrap();

    let leads = db.leads_for_quiz(quiz_id).await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "a@b.com");
    assert_eq!(leads[0].first_name, None);
    assert_eq!(leads[0].last_name, None);
}

#[tokio::test]
async fn identical_lead_submissions_make_separate_rows() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "twice", 0).await;
    let lead = NewLead {
        email: "a@b.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
    };

    let first = db.create_lead(quiz_id, &lead).await.unwrap();
    let second = db.create_lead(quiz_id, &lead).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(db.leads_for_quiz(quiz_id).await.unwrap().len(), 2);
    assert_eq!(db.leads_count().await.unwrap(), 2);
}

#[tokio::test]
async fn lead_for_unknown_quiz_is_refused() {
    let db = create_test_db().await;

    let res = db.create_lead(4242, &common::email_lead("a@b.com")).await;

    // Foreign key failure, not a uniqueness one
    assert!(!is_unique_violation(&res.unwrap_err()));
    assert_eq!(db.leads_count().await.unwrap(), 0);
}

#[tokio::test]
async fn lead_listings_are_newest_first_with_quiz_name() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "listing", 0).await;

    db.create_lead(quiz_id, &common::email_lead("old@b.com"))
        .await
        .unwrap();
    db.create_lead(quiz_id, &common::email_lead("new@b.com"))
        .await
        .unwrap();

    let listings = db.lead_listings().await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].email, "new@b.com");
    assert_eq!(listings[1].email, "old@b.com");
    assert_eq!(listings[0].quiz_name, "Quiz listing");
    assert_eq!(listings[0].quiz_slug, "listing");
}

#[tokio::test]
async fn quiz_lead_counts_include_quizzes_without_leads() {
    let db = create_test_db().await;
    let empty = create_quiz_with_questions(&db, "empty", 0).await;
    let busy = create_quiz_with_questions(&db, "busy", 0).await;
    for email in ["a@b.com", "c@d.com"] {
        db.create_lead(busy, &common::email_lead(email)).await.unwrap();
    }

    let counts = db.quiz_lead_counts().await.unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!((counts[0].id, counts[0].lead_count), (empty, 0));
    assert_eq!((counts[1].id, counts[1].lead_count), (busy, 2));
}

#[tokio::test]
async fn quiz_overviews_count_questions_and_leads() {
    let db = create_test_db().await;
    let quiz_id = create_quiz_with_questions(&db, "overview", 3).await;
    db.create_lead(quiz_id, &common::email_lead("a@b.com"))
        .await
        .unwrap();

    let overviews = db.quiz_overviews().await.unwrap();

    assert_eq!(overviews.len(), 1);
    assert_eq!(overviews[0].slug, "overview");
    assert_eq!(overviews[0].question_count, 3);
    assert_eq!(overviews[0].lead_count, 1);
}

#[tokio::test]
async fn seed_inserts_demo_quizzes_once() {
    let db = create_test_db().await;

    assert!(db.ensure_seed_data().await.unwrap());
    assert!(!db.ensure_seed_data().await.unwrap());

    let quizzes = db.quizzes().await.unwrap();
    let slugs: Vec<&str> = quizzes.iter().map(|q| q.slug.as_str()).collect();
    assert_eq!(slugs, ["marketing-strategy", "product-fit"]);

    for quiz in &quizzes {
        let questions = db.questions(quiz.id).await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question_order, 1);
        assert_eq!(questions[1].question_order, 2);
        assert!(questions
            .iter()
            .all(|q| q.question_type == QuestionType::MultipleChoice));
        assert_eq!(questions[0].answers.len(), 3);
    }
}

#[tokio::test]
async fn seed_skips_a_store_that_already_has_quizzes() {
    let db = create_test_db().await;
    create_quiz_with_questions(&db, "mine", 1).await;

    assert!(!db.ensure_seed_data().await.unwrap());

    assert_eq!(db.quizzes_count().await.unwrap(), 1);
    assert!(db.quiz_by_slug("product-fit").await.unwrap().is_none());
}
