//! Interview engine — executes the dispatcher's plan against the LLM.
//!
//! The decision procedure itself is pure (`dispatch::plan`); this layer only
//! fills in the generative steps: composed preset transitions, the open-ended
//! fallback, and theme classification. Classification is best-effort: a
//! transport failure or an off-taxonomy guess degrades to "no theme", never
//! to a failed request.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::LlmProvider;

use super::dispatch::{self, Step};
use super::prompts::{self, CLASSIFIER_SYSTEM, COACH_SYSTEM};
use super::state::{InterviewState, NextQuestion};
use super::{themes, window};

pub struct Engine {
    llm: Arc<dyn LlmProvider>,
}

impl Engine {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Produce the next question and state patch for a snapshot.
    pub async fn next_question(&self, state: &InterviewState) -> Result<NextQuestion, LlmError> {
        let plan = dispatch::plan(state);
        debug!(track = %state.track, rapid_fire = state.is_rapid_fire, step = ?plan.step, "planned step");

        let mut theme_counts = state.theme_counts.clone();
        let mut current_theme = String::new();

        let (question, tag) = match plan.step {
            Step::Scripted { question, tag } => (question, tag),
            Step::Closing { message } => (message.to_string(), None),
            Step::Compose {
                preset,
                previous_answer,
            } => (
                self.compose(preset, previous_answer.as_deref()).await,
                None,
            ),
            Step::OpenEnded { presets } => {
                let conversation = rendered_history(state);
                let question = self.open_ended(state, presets, &conversation).await?;
                self.classify(&conversation, &mut theme_counts, &mut current_theme)
                    .await;
                (question, None)
            }
        };

        Ok(NextQuestion {
            question,
            current_theme,
            theme_counts,
            tag,
            academic_index: plan.academic_index,
            academic_fields: plan.academic_fields,
            extracurricular_fields: plan.extracurricular_fields,
        })
    }

    /// Summarize 2-3 broad academic interest areas from a résumé.
    pub async fn cv_fields(&self, cv_text: &str) -> Result<String, LlmError> {
        self.llm
            .complete(COACH_SYSTEM, &prompts::summarize_fields(cv_text))
            .await
    }

    /// Wrap a preset in an empathetic transition. The preset is the content;
    /// if the model drops it or the call fails, the bare preset is returned
    /// so the walk keeps its contract.
    async fn compose(&self, preset: &str, previous_answer: Option<&str>) -> String {
        let prompt = prompts::compose_transition(previous_answer, preset);
        match self.llm.complete(COACH_SYSTEM, &prompt).await {
            Ok(text) if text.contains(preset) => text,
            Ok(text) => {
                warn!(
                    got = %text.chars().take(120).collect::<String>(),
                    "composed question dropped the preset, using it bare"
                );
                preset.to_string()
            }
            Err(err) => {
                warn!(error = %err, "preset composition failed, using it bare");
                preset.to_string()
            }
        }
    }

    async fn open_ended(
        &self,
        state: &InterviewState,
        presets: &[&str],
        conversation: &str,
    ) -> Result<String, LlmError> {
        let hint = presets.choose(&mut rand::thread_rng()).copied();
        let prompt = prompts::open_ended(
            &state.cv_text,
            &state.track,
            hint,
            conversation,
            &state.theme_counts,
            &state.current_theme,
        );
        self.llm.complete(COACH_SYSTEM, &prompt).await
    }

    async fn classify(
        &self,
        conversation: &str,
        theme_counts: &mut BTreeMap<String, u32>,
        current_theme: &mut String,
    ) {
        let prompt = prompts::classify_theme(conversation);
        match self.llm.complete(CLASSIFIER_SYSTEM, &prompt).await {
            Ok(guess) => match themes::match_label(&guess) {
                Some(label) => {
                    themes::record(theme_counts, label);
                    *current_theme = label.to_string();
                }
                None => {
                    warn!(guess = %guess.chars().take(120).collect::<String>(),
                          "classifier guess matched no preset theme, discarding");
                }
            },
            Err(err) => warn!(error = %err, "theme classification failed, skipping"),
        }
    }
}

fn rendered_history(state: &InterviewState) -> String {
    let text = window::render(&state.history);
    if text.is_empty() {
        "This is the first question.".to_string()
    } else {
        text
    }
}
