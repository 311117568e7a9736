use std::sync::Arc;

use learn_core::model::{Catalog, DayNumber};
use learn_core::{SessionState, evaluate};

#[test]
fn history_is_chronological_with_non_decreasing_scores() {
    let mut state = SessionState::new(Arc::new(Catalog::english_survival()));
    let answers = [
        "I wake up, work hard, and drink coffee.",
        "I washed the floor.",
        "",
        "I am cooking, she is reading.",
        "I have fixed it, she has gone.",
        "I get up early.",
        "finished cleaned",
    ];

    for answer in answers {
        state.edit_draft(answer);
        state.submit();
        state.advance();
    }

    let history = state.history();
    assert_eq!(history.len(), answers.len());
    let days: Vec<u32> = history.iter().map(|entry| entry.day().value()).collect();
    assert_eq!(days, [1, 2, 3, 4, 5, 1, 2]);
    assert!(
        history
            .windows(2)
            .all(|pair| pair[0].score_after() <= pair[1].score_after())
    );
    assert_eq!(history.last().map(|entry| entry.score_after()), Some(state.score()));
    assert_eq!(state.streak(), 2);
    // 10 + 5 + 5 + 5 + 10 + 5 + 10
    assert_eq!(state.score(), 50);
    assert_eq!(state.current_rank().title(), "Grammar Warrior");
}

#[test]
fn resubmitting_the_same_draft_keeps_adding_points() {
    let mut state = SessionState::new(Arc::new(Catalog::english_survival()));
    state.edit_draft("wake work drink");
    state.submit();
    state.submit();
    assert_eq!(state.score(), 20);
    assert_eq!(state.history().len(), 2);
    assert!(state.history().iter().all(|entry| entry.day() == DayNumber::new(1)));
}

#[test]
fn evaluation_matches_session_feedback() {
    let catalog = Arc::new(Catalog::english_survival());
    let mut state = SessionState::new(Arc::clone(&catalog));
    state.edit_draft("I will inspect it.");
    state.advance();
    state.advance();
    state.edit_draft("I will inspect it.");
    let entry = state.submit().clone();

    let result = evaluate("I will inspect it.", &catalog.tasks()[2]);
    assert_eq!(result.missing_keywords(), ["finish"]);
    assert_eq!(entry.feedback(), result.feedback(&catalog.tasks()[2]));
}

#[test]
fn catalog_serializes_for_export() {
    let catalog = Catalog::english_survival();
    let json = serde_json::to_value(&catalog).unwrap();
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[1]["acceptable_synonyms"]["cleaned"][0], "washed");
    assert_eq!(json["ranks"][1]["threshold"], 50);
}
