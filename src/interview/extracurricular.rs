//! Extracurricular-activities rapid-fire protocol.
//!
//! Same shape as the academic walk but with two confirmation gates up front
//! (gather a broad list, then narrow to five) and six scripted steps plus a
//! wrap-up per activity. Completion is tracked through structural tags.

use tracing::warn;

use crate::error::ExtractionError;

use super::dispatch::{Plan, Step};
use super::entities::{
    self, TAG_ASK_TOP_ACTIVITIES, TAG_NARROW_TOP_ACTIVITIES, activity_step_tag,
};
use super::presets::EXTRACURRICULAR_RAPID_CLOSING;
use super::state::InterviewState;

const STEPS_PER_ACTIVITY: usize = 7;

pub fn plan(state: &InterviewState) -> Plan {
    let (activities, derived) = if !state.extracurricular_fields.is_empty() {
        (state.extracurricular_fields.clone(), false)
    } else {
        if !entities::has_tag(&state.history, TAG_ASK_TOP_ACTIVITIES) {
            return broad_list_gate();
        }
        match entities::extract_tagged(&state.history, TAG_NARROW_TOP_ACTIVITIES) {
            Ok(list) => (list, true),
            Err(ExtractionError::MissingTag(_)) => return narrow_gate(),
            Err(err @ ExtractionError::EmptyList(_)) => {
                warn!(error = %err, "top-activity extraction failed, re-asking");
                return narrow_gate();
            }
        }
    };

    for activity in &activities {
        for step in 1..=STEPS_PER_ACTIVITY {
            let tag = activity_step_tag(activity, step);
            if !entities::has_tag(&state.history, &tag) {
                let mut plan = Plan::of(Step::Scripted {
                    question: step_question(step, activity),
                    tag: Some(tag),
                });
                if derived {
                    plan.extracurricular_fields = activities.clone();
                }
                return plan;
            }
        }
    }

    Plan::of(Step::Closing {
        message: EXTRACURRICULAR_RAPID_CLOSING,
    })
}

fn broad_list_gate() -> Plan {
    Plan::of(Step::Scripted {
        question: "Let's start by listing your most important extracurricular activities. \
                   Have a look at your CV or list of activities if you'd like."
            .to_string(),
        tag: Some(TAG_ASK_TOP_ACTIVITIES.to_string()),
    })
}

fn narrow_gate() -> Plan {
    Plan::of(Step::Scripted {
        question: "That's a great list. Could you narrow it down to the five activities that \
                   matter most to you, separated by commas?"
            .to_string(),
        tag: Some(TAG_NARROW_TOP_ACTIVITIES.to_string()),
    })
}

fn step_question(step: usize, activity: &str) -> String {
    match step {
        1 => format!(
            "What specifically do you do in {activity}? Do you have a particular role, and how \
             long have you been involved?"
        ),
        2 => format!("What do you enjoy about {activity}, and what does it bring you?"),
        3 => format!("What have you found most challenging about {activity}?"),
        4 => format!("What have you learnt about yourself and others from doing {activity}?"),
        5 => format!("Do you see yourself continuing {activity} in the future?"),
        6 => format!(
            "Do you have any anecdotes about {activity} that you might want to share? Anything \
             that stands out to you?"
        ),
        _ => format!("Is there anything more you want to add about {activity}? If not, let's move on."),
    }
}
