use std::sync::Arc;

use learn_core::SessionState;
use learn_core::model::Catalog;

use super::test_harness::{setup_view_harness, setup_view_harness_with_state};
use crate::vm::SessionIntent;

#[test]
fn practice_view_smoke_renders_first_task() {
    let harness = setup_view_harness();
    let html = harness.render();
    for expected in [
        "English Survival – Day 1",
        "Present Simple – daily routine",
        "I wake up at 6 AM.",
        "Survival Student",
        "Check Answer",
        "Next Task",
        "No answers yet.",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("class=\"feedback\""), "unexpected feedback in {html}");
}

#[test]
fn practice_view_smoke_submit_shows_feedback_and_history() {
    let mut harness = setup_view_harness();
    harness.dispatch(SessionIntent::Advance);
    harness.dispatch(SessionIntent::Edit("I washed the floor.".to_string()));
    harness.dispatch(SessionIntent::Submit);

    let html = harness.render();
    let feedback = "Missing: finished. You should include: finished, cleaned.";
    assert!(html.contains(feedback), "missing {feedback} in {html}");
    assert!(html.contains("Day 2 (Past Simple):"), "missing history in {html}");
    assert!(html.contains("i washed the floor."), "missing input in {html}");
    assert!(html.contains("English Survival – Day 2"), "missing heading in {html}");
}

#[test]
fn practice_view_smoke_edit_clears_feedback() {
    let mut harness = setup_view_harness();
    harness.dispatch(SessionIntent::Submit);
    assert!(harness.render().contains("class=\"feedback\""));

    harness.dispatch(SessionIntent::Edit("wake".to_string()));
    let html = harness.render();
    assert!(!html.contains("class=\"feedback\""), "feedback should be cleared in {html}");
    assert!(html.contains("Day 1 (Present Simple):"), "history should remain in {html}");
}

#[test]
fn practice_view_smoke_listen_narrates_example() {
    let mut harness = setup_view_harness();
    harness.dispatch(SessionIntent::Listen(2));

    let spoken = harness.narrator.utterances();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "We drink coffee in the morning.");
    assert_eq!(spoken[0].locale, "en-US");
}

#[test]
fn practice_view_smoke_renders_seeded_rank() {
    let mut state = SessionState::new(Arc::new(Catalog::english_survival()));
    state.edit_draft("wake work drink");
    for _ in 0..5 {
        state.submit();
    }
    let harness = setup_view_harness_with_state(Some(state));
    let html = harness.render();
    assert!(html.contains("Grammar Warrior"), "missing rank in {html}");
    assert!(html.contains("wake work drink"), "missing draft in {html}");
}
