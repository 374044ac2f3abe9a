//! Entity-list extraction from tagged transcript turns.
//!
//! The rapid-fire protocols never re-derive a list the caller already holds;
//! when the caller's list is empty they read the answer of the latest turn
//! carrying the relevant structural tag. Extraction is `Result`-typed so a
//! blank or unusable answer re-enters the opening branch deterministically
//! instead of being swallowed.

use crate::error::ExtractionError;

use super::state::Turn;

/// Tag on the question asking for three or four favourite subjects.
pub const TAG_ASK_FAV_SUBJECTS: &str = "ask_fav_subjects";

/// Tag on the question asking for the broad activity list.
pub const TAG_ASK_TOP_ACTIVITIES: &str = "ask_top_activities";

/// Tag on the question asking to narrow the activity list to five.
pub const TAG_NARROW_TOP_ACTIVITIES: &str = "narrow_top_activities";

/// Step marker for the academic per-subject walk, `n` in 1..=3.
pub fn subject_step_tag(subject: &str, n: usize) -> String {
    format!("subject:{subject}:{n}")
}

/// Step marker for the extracurricular per-activity walk, `n` in 1..=7.
pub fn activity_step_tag(activity: &str, n: usize) -> String {
    format!("activity:{activity}:{n}")
}

pub fn has_tag(history: &[Turn], tag: &str) -> bool {
    history.iter().any(|t| t.tag.as_deref() == Some(tag))
}

/// The latest turn carrying `tag`, if any.
pub fn latest_tagged<'a>(history: &'a [Turn], tag: &str) -> Option<&'a Turn> {
    history.iter().rev().find(|t| t.tag.as_deref() == Some(tag))
}

/// Comma-split an answer into entity names: trimmed, empty segments dropped,
/// duplicates kept, order preserved.
pub fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the entity list from the latest turn tagged `tag`.
pub fn extract_tagged(history: &[Turn], tag: &str) -> Result<Vec<String>, ExtractionError> {
    let turn = latest_tagged(history, tag)
        .ok_or_else(|| ExtractionError::MissingTag(tag.to_string()))?;
    let list = split_list(&turn.answer);
    if list.is_empty() {
        return Err(ExtractionError::EmptyList(tag.to_string()));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empty_segments() {
        assert_eq!(
            split_list("Math, Physics,  Computer Science"),
            vec!["Math", "Physics", "Computer Science"]
        );
        assert_eq!(split_list("A,,B, ,C"), vec!["A", "B", "C"]);
        assert!(split_list("  ,  , ").is_empty());
    }

    #[test]
    fn split_keeps_duplicates_and_order() {
        assert_eq!(split_list("Chess, Debate, Chess"), vec!["Chess", "Debate", "Chess"]);
    }

    #[test]
    fn extract_reads_the_latest_tagged_turn() {
        let history = vec![
            Turn::tagged("q1", "Old, List", TAG_ASK_FAV_SUBJECTS),
            Turn::new("q2", "a2"),
            Turn::tagged("q3", "Biology, History", TAG_ASK_FAV_SUBJECTS),
        ];
        assert_eq!(
            extract_tagged(&history, TAG_ASK_FAV_SUBJECTS).unwrap(),
            vec!["Biology", "History"]
        );
    }

    #[test]
    fn extract_fails_without_the_tag() {
        let history = vec![Turn::new("q", "a")];
        assert!(matches!(
            extract_tagged(&history, TAG_ASK_FAV_SUBJECTS),
            Err(ExtractionError::MissingTag(_))
        ));
    }

    #[test]
    fn extract_fails_on_blank_answer() {
        let history = vec![Turn::tagged("q", "   ", TAG_ASK_FAV_SUBJECTS)];
        assert!(matches!(
            extract_tagged(&history, TAG_ASK_FAV_SUBJECTS),
            Err(ExtractionError::EmptyList(_))
        ));
    }
}
