//! Prompt builders for the generative calls.
//!
//! All interview content the model may not invent (preset questions, theme
//! taxonomy) is passed in verbatim; the model only supplies conversational
//! connective tissue.

use std::collections::BTreeMap;

use super::presets::THEMES;
use super::state::Track;

/// System prompt for question generation.
pub const COACH_SYSTEM: &str =
    "You are a college essay coach helping a student discover themes.";

/// System prompt for theme classification.
pub const CLASSIFIER_SYSTEM: &str =
    "You are a classifier that identifies essay themes from conversation.";

/// Ask the model to wrap a preset question in a short empathetic transition.
/// The preset must appear verbatim; the engine checks.
pub fn compose_transition(previous_answer: Option<&str>, preset: &str) -> String {
    let context = match previous_answer {
        Some(answer) => format!("The student's previous answer was:\n{answer}\n"),
        None => "This is the first question of this part of the interview.\n".to_string(),
    };
    format!(
        "You are interviewing a student on behalf of a college counselor.\n\
         {context}\
         Write one or two warm, empathetic sentences that acknowledge the previous answer \
         (if there is one), then ask EXACTLY this question, word for word:\n\
         \"{preset}\"\n\n\
         Important Rules:\n\
         - The question above must appear verbatim in your output.\n\
         - Do not add any other questions.\n\
         - Do not put Q: at the beginning of the question."
    )
}

/// The open-ended fallback prompt for the regular interview phase.
pub fn open_ended(
    cv_text: &str,
    track: &Track,
    preset_hint: Option<&str>,
    conversation: &str,
    theme_counts: &BTreeMap<String, u32>,
    current_theme: &str,
) -> String {
    let counts = if theme_counts.is_empty() {
        "None yet.".to_string()
    } else {
        theme_counts
            .iter()
            .map(|(theme, count)| format!("{theme}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let hint = preset_hint.unwrap_or("(no preset available for this track)");
    let current = if current_theme.is_empty() { "None" } else { current_theme };
    format!(
        "You are a warm, perceptive assistant to a college counselor. The counselor will use \
         the interview transcript to brainstorm potential college application essay topics \
         with the student.\n\n\
         Your task is to:\n\
         a. Gather as much detail as possible about the student's academic interests, \
         extracurricular involvement and personal background.\n\
         b. Build on these details with further questions about the student's motivation and \
         character as it relates to the subject being discussed.\n\
         c. Search for potential themes in the student's answers, taking the preset themes as \
         a starting point.\n\n\
         Student's CV:\n{cv_text}\n\n\
         Interview Track: {track}\n\n\
         Preset question to base your next move on:\n\"{hint}\"\n\n\
         Conversation so far:\n{conversation}\n\n\
         Themes discussed and their counts:\n{counts}\n\n\
         Current theme under discussion: {current}\n\n\
         List of preset themes:\n{themes}\n\n\
         Important Rules:\n\
         - Ask at most TWO questions per theme. After two, switch to a theme with a count \
         below 2 or one not yet discussed.\n\
         - NEVER repeat a topic already deeply discussed.\n\
         - Build naturally based on the student's previous answers.\n\
         - Stay strictly related to the selected track unless a powerful personal connection \
         emerges.\n\
         - Phrase your question conversationally, like a real human counselor talking warmly \
         to a student.\n\
         - Prefer open-ended questions that encourage reflection and storytelling.\n\
         - Only output ONE question, no lists or options.",
        themes = THEMES.join("\n"),
    )
}

/// Ask the classifier to name the single best-matching theme.
pub fn classify_theme(conversation: &str) -> String {
    format!(
        "Given this conversation:\n{conversation}\n\n\
         Pick the one most relevant theme from this list and answer with that theme only:\n{}",
        THEMES.join("\n")
    )
}

/// Summarize 2-3 broad academic interest areas from an uploaded résumé.
pub fn summarize_fields(cv_text: &str) -> String {
    format!(
        "Read this student's CV and name the 2-3 broad academic interest areas it suggests. \
         Answer with just the areas, separated by commas.\n\nCV:\n{cv_text}"
    )
}
