//! End-to-end protocol walks against a canned LLM provider.
//!
//! These drive the engine the way a client would: call, fold the returned
//! patch and question back into the snapshot, answer, call again.

use std::sync::Arc;

use async_trait::async_trait;

use interview_assist::error::LlmError;
use interview_assist::interview::presets::{BACKGROUND_PRESETS, THEMES};
use interview_assist::interview::{Engine, InterviewState, NextQuestion, Track, Turn};
use interview_assist::llm::LlmProvider;

/// Provider that always returns the same text, or always fails.
struct Canned(Option<String>);

#[async_trait]
impl LlmProvider for Canned {
    fn model_name(&self) -> &str {
        "canned"
    }

    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        self.0.clone().ok_or_else(|| LlmError::Network {
            provider: "canned".into(),
            reason: "unavailable".into(),
        })
    }
}

fn engine(reply: &str) -> Engine {
    Engine::new(Arc::new(Canned(Some(reply.to_string()))))
}

/// Fold a response into the snapshot the way a well-behaved client does.
fn fold(state: &mut InterviewState, response: &NextQuestion, answer: &str) {
    let mut turn = Turn::new(response.question.clone(), answer);
    turn.tag = response.tag.clone();
    state.history.push(turn);
    if !response.academic_fields.is_empty() {
        state.academic_fields = response.academic_fields.clone();
    }
    if !response.extracurricular_fields.is_empty() {
        state.extracurricular_fields = response.extracurricular_fields.clone();
    }
    if let Some(i) = response.academic_index {
        state.academic_index = i;
    }
    state.theme_counts = response.theme_counts.clone();
    state.current_theme = response.current_theme.clone();
}

#[tokio::test]
async fn academic_rapid_fire_full_walk() {
    let engine = engine("unused");
    let mut state = InterviewState::new(Track::AcademicInterests);
    state.is_rapid_fire = true;

    // Opener.
    let opener = engine.next_question(&state).await.unwrap();
    assert_eq!(opener.tag.as_deref(), Some("ask_fav_subjects"));
    fold(&mut state, &opener, "Biology, History");

    // 2 subjects x 3 steps.
    for expected_subject in ["Biology", "History"] {
        for expected_step in 1..=3 {
            let response = engine.next_question(&state).await.unwrap();
            let tag = response.tag.clone().unwrap();
            assert_eq!(tag, format!("subject:{expected_subject}:{expected_step}"));
            assert!(response.question.contains(expected_subject));
            fold(&mut state, &response, "an answer");
        }
    }

    // Exhausted: fixed closing line, no tag, no further per-subject question.
    let closing = engine.next_question(&state).await.unwrap();
    assert!(closing.question.contains("enough information to move on"));
    assert!(closing.tag.is_none());
}

#[tokio::test]
async fn extracurricular_rapid_fire_gates_then_walk() {
    let engine = engine("unused");
    let mut state = InterviewState::new(Track::ExtracurricularActivities);
    state.is_rapid_fire = true;

    let broad = engine.next_question(&state).await.unwrap();
    assert_eq!(broad.tag.as_deref(), Some("ask_top_activities"));
    fold(&mut state, &broad, "Chess, Debate, Piano, Soccer, Robotics, Choir");

    let narrow = engine.next_question(&state).await.unwrap();
    assert_eq!(narrow.tag.as_deref(), Some("narrow_top_activities"));
    fold(&mut state, &narrow, "Chess, Debate");

    // First per-activity question, with the derived list in the patch.
    let first = engine.next_question(&state).await.unwrap();
    assert_eq!(first.tag.as_deref(), Some("activity:Chess:1"));
    assert_eq!(first.extracurricular_fields, vec!["Chess", "Debate"]);
    fold(&mut state, &first, "I am club captain");

    // Walk everything remaining: 2 activities x 7 steps, minus the one done.
    for _ in 0..13 {
        let response = engine.next_question(&state).await.unwrap();
        assert!(response.tag.is_some());
        fold(&mut state, &response, "an answer");
    }

    let closing = engine.next_question(&state).await.unwrap();
    assert!(closing.tag.is_none());
    assert!(closing.question.contains("clear picture of your activities"));
}

#[tokio::test]
async fn background_walk_carries_each_preset_and_then_closes() {
    // The model parrots a transition that keeps preset 2 verbatim.
    let preset = BACKGROUND_PRESETS[2];
    let engine = engine(&format!("I hear you. {preset}"));

    let mut state = InterviewState::new(Track::FamilyBackground);
    state.background_index = 2;
    state.history.push(Turn::new("q", "my earlier answer"));

    let response = engine.next_question(&state).await.unwrap();
    assert!(response.question.contains(preset));

    // The caller owns the increment.
    state.background_index = BACKGROUND_PRESETS.len();
    let closing = engine.next_question(&state).await.unwrap();
    for p in BACKGROUND_PRESETS {
        assert!(!closing.question.contains(p));
    }
}

#[tokio::test]
async fn empty_history_is_safe_on_every_track() {
    let engine = engine(THEMES[0]);
    for (track, rapid) in [
        (Track::AcademicInterests, true),
        (Track::AcademicInterests, false),
        (Track::ExtracurricularActivities, true),
        (Track::ExtracurricularActivities, false),
        (Track::FamilyBackground, false),
        (Track::Unknown("Hobbies".into()), false),
    ] {
        let mut state = InterviewState::new(track.clone());
        state.is_rapid_fire = rapid;
        let response = engine.next_question(&state).await.unwrap();
        assert!(
            !response.question.is_empty(),
            "empty question for {track:?} rapid={rapid}"
        );
    }
}

#[tokio::test]
async fn open_ended_phase_accumulates_theme_counts() {
    // Model answers every call with a taxonomy label, so the question is the
    // label too; what matters here is the tally behavior.
    let engine = engine(THEMES[3]);
    let mut state = InterviewState::new(Track::ExtracurricularActivities);
    state.is_rapid_fire = false;

    for round in 1..=3u32 {
        let response = engine.next_question(&state).await.unwrap();
        assert_eq!(response.current_theme, THEMES[3]);
        assert_eq!(response.theme_counts[THEMES[3]], round);
        fold(&mut state, &response, "an answer");
    }
}

#[tokio::test]
async fn question_path_surfaces_provider_failures_only_where_unavoidable() {
    let engine = Engine::new(Arc::new(Canned(None)));

    // Open-ended has no deterministic fallback: the failure surfaces.
    let mut state = InterviewState::new(Track::ExtracurricularActivities);
    state.is_rapid_fire = false;
    assert!(engine.next_question(&state).await.is_err());

    // The background walk degrades to the bare preset instead.
    let state = InterviewState::new(Track::FamilyBackground);
    let response = engine.next_question(&state).await.unwrap();
    assert_eq!(response.question, BACKGROUND_PRESETS[0]);
}
