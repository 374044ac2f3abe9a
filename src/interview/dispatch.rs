//! Track dispatcher: pure selection of the next interview step.
//!
//! `plan` is the whole decision procedure as a state-transition function.
//! It never touches the network; steps that need generative text come back
//! as `Compose`/`OpenEnded` for the engine to execute.

use super::state::{InterviewState, Track};
use super::{academic, background, extracurricular, presets};

/// What the engine must do to produce the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Host-composed question text, no model call.
    Scripted {
        question: String,
        tag: Option<String>,
    },
    /// The model writes a short empathetic transition but must carry the
    /// preset verbatim; the engine enforces that.
    Compose {
        preset: &'static str,
        previous_answer: Option<String>,
    },
    /// Generative open-ended question plus theme classification.
    OpenEnded {
        presets: &'static [&'static str],
    },
    /// Fixed terminal sentence; the track is exhausted.
    Closing { message: &'static str },
}

/// A step plus the state patch the response must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub step: Step,
    /// Newly derived favourite subjects; empty when unchanged.
    pub academic_fields: Vec<String>,
    /// Newly derived top activities; empty when unchanged.
    pub extracurricular_fields: Vec<String>,
    /// Advanced academic cursor for the caller to echo back.
    pub academic_index: Option<usize>,
}

impl Plan {
    pub fn of(step: Step) -> Self {
        Self {
            step,
            academic_fields: Vec::new(),
            extracurricular_fields: Vec::new(),
            academic_index: None,
        }
    }
}

/// Select and run exactly one protocol for the given snapshot.
pub fn plan(state: &InterviewState) -> Plan {
    match (&state.track, state.is_rapid_fire) {
        (Track::AcademicInterests, true) => academic::plan(state),
        (Track::AcademicInterests, false) => background::plan_academic_walk(state),
        (Track::ExtracurricularActivities, true) => extracurricular::plan(state),
        // No dedicated scripted walk for the regular extracurricular phase;
        // it rides the open-ended fallback. See DESIGN.md.
        (Track::ExtracurricularActivities, false) => Plan::of(Step::OpenEnded {
            presets: &presets::EXTRACURRICULAR_PRESETS,
        }),
        (Track::FamilyBackground, _) => background::plan(state),
        (Track::Unknown(_), _) => Plan::of(Step::OpenEnded {
            presets: presets::presets_for(&state.track),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::entities::TAG_ASK_FAV_SUBJECTS;

    fn state(track: Track, rapid: bool) -> InterviewState {
        let mut s = InterviewState::new(track);
        s.is_rapid_fire = rapid;
        s
    }

    #[test]
    fn academic_rapid_fire_routes_to_the_subject_protocol() {
        let plan = plan(&state(Track::AcademicInterests, true));
        match plan.step {
            Step::Scripted { tag, .. } => {
                assert_eq!(tag.as_deref(), Some(TAG_ASK_FAV_SUBJECTS));
            }
            other => panic!("expected scripted opener, got {other:?}"),
        }
    }

    #[test]
    fn academic_regular_routes_to_the_fixed_walk() {
        let plan = plan(&state(Track::AcademicInterests, false));
        assert!(matches!(plan.step, Step::Compose { .. }));
        assert_eq!(plan.academic_index, Some(1));
    }

    #[test]
    fn extracurricular_regular_falls_through_to_open_ended() {
        let plan = plan(&state(Track::ExtracurricularActivities, false));
        assert!(matches!(plan.step, Step::OpenEnded { presets } if !presets.is_empty()));
    }

    #[test]
    fn background_ignores_the_rapid_fire_flag() {
        for rapid in [true, false] {
            let plan = plan(&state(Track::FamilyBackground, rapid));
            assert!(matches!(
                plan.step,
                Step::Compose { preset, .. } if preset == presets::BACKGROUND_PRESETS[0]
            ));
        }
    }

    #[test]
    fn unknown_track_gets_the_catch_all_with_no_presets() {
        let plan = plan(&state(Track::Unknown("Hobbies".into()), true));
        assert!(matches!(plan.step, Step::OpenEnded { presets } if presets.is_empty()));
    }
}
