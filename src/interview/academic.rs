//! Academic-interests rapid-fire protocol.
//!
//! A per-subject walk over the favourite-subject list: three scripted steps
//! per subject, completion tracked through structural tags on the questions
//! this protocol generated earlier. Subjects are visited in list order, steps
//! in numeric order; when every subject carries all three markers the track
//! is exhausted.

use tracing::warn;

use crate::error::ExtractionError;

use super::dispatch::{Plan, Step};
use super::entities::{self, TAG_ASK_FAV_SUBJECTS, subject_step_tag};
use super::presets::ACADEMIC_RAPID_CLOSING;
use super::state::InterviewState;
use super::cv;

const STEPS_PER_SUBJECT: usize = 3;

pub fn plan(state: &InterviewState) -> Plan {
    let (subjects, derived) = if !state.academic_fields.is_empty() {
        (state.academic_fields.clone(), false)
    } else {
        match entities::extract_tagged(&state.history, TAG_ASK_FAV_SUBJECTS) {
            Ok(list) => (list, true),
            Err(ExtractionError::MissingTag(_)) => return opener(state),
            Err(err @ ExtractionError::EmptyList(_)) => {
                // Unusable answer: re-enter the opening branch rather than
                // walking an empty list.
                warn!(error = %err, "favourite-subject extraction failed, re-asking");
                return opener(state);
            }
        }
    };

    for subject in &subjects {
        for step in 1..=STEPS_PER_SUBJECT {
            let tag = subject_step_tag(subject, step);
            if !entities::has_tag(&state.history, &tag) {
                let mut plan = Plan::of(Step::Scripted {
                    question: step_question(step, subject, &state.cv_text),
                    tag: Some(tag),
                });
                if derived {
                    plan.academic_fields = subjects.clone();
                }
                return plan;
            }
        }
    }

    Plan::of(Step::Closing {
        message: ACADEMIC_RAPID_CLOSING,
    })
}

fn opener(state: &InterviewState) -> Plan {
    let fields = cv::broad_fields(&state.cv_text, 3);
    let question = if fields.is_empty() {
        "Could you tell me about three or four of your favourite subjects?".to_string()
    } else {
        format!(
            "Looks like {} are your main academic interests. Could you tell me about three or \
             four of your favourite subjects, related or unrelated to those interests?",
            fields.join(", ")
        )
    };
    Plan::of(Step::Scripted {
        question,
        tag: Some(TAG_ASK_FAV_SUBJECTS.to_string()),
    })
}

fn step_question(step: usize, subject: &str, cv_text: &str) -> String {
    match step {
        1 => {
            let courses = cv::lines_mentioning(cv_text, subject, 3);
            if courses.is_empty() {
                format!("How have you pursued {subject} at school or during summer school?")
            } else {
                format!(
                    "Looks like you studied {subject} in {}. Tell me more about how you have \
                     pursued it at school or during summer school?",
                    courses.join("; ")
                )
            }
        }
        2 => {
            let lines = cv::research_lines(cv_text, subject, 2);
            if lines.is_empty() {
                format!(
                    "Have you done any research, internships or outside-of-class activities \
                     related to {subject}?"
                )
            } else {
                format!(
                    "I would especially like to hear about {}. Tell me more about your work on \
                     {subject} outside class?",
                    lines.join("; ")
                )
            }
        }
        _ => format!("Is there anything more you want to add about {subject}? If not, let's move on."),
    }
}
