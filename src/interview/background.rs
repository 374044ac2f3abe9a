//! Fixed-order preset walks.
//!
//! The Family & Background protocol is a deterministic walk over its preset
//! list indexed by `background_index`; the caller owns the increment. The
//! regular (non-rapid-fire) Academic phase follows the same template over its
//! own list and cursor, with the advanced cursor echoed in the response.

use super::dispatch::{Plan, Step};
use super::presets::{
    ACADEMIC_PRESETS, ACADEMIC_WALK_CLOSING, BACKGROUND_CLOSING, BACKGROUND_PRESETS,
};
use super::state::InterviewState;

pub fn plan(state: &InterviewState) -> Plan {
    match BACKGROUND_PRESETS.get(state.background_index) {
        Some(&preset) => Plan::of(Step::Compose {
            preset,
            previous_answer: last_answer(state),
        }),
        None => Plan::of(Step::Closing {
            message: BACKGROUND_CLOSING,
        }),
    }
}

pub fn plan_academic_walk(state: &InterviewState) -> Plan {
    match ACADEMIC_PRESETS.get(state.academic_index) {
        Some(&preset) => {
            let mut plan = Plan::of(Step::Compose {
                preset,
                previous_answer: last_answer(state),
            });
            plan.academic_index = Some(state.academic_index + 1);
            plan
        }
        None => Plan::of(Step::Closing {
            message: ACADEMIC_WALK_CLOSING,
        }),
    }
}

fn last_answer(state: &InterviewState) -> Option<String> {
    state
        .history
        .last()
        .map(|turn| turn.answer.clone())
        .filter(|answer| !answer.trim().is_empty())
}
