//! Bounded textual rendering of the transcript for prompt building.
//!
//! Keeps the most recent turns, then drops whole turns from the front until
//! the character budget is satisfied. Pure truncation, no summarization.

use super::presets::{MAX_CHAR_HISTORY, MAX_TURNS};
use super::state::Turn;

fn render_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("Q: {}\nA: {}", t.question, t.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the transcript within the turn and character budgets.
///
/// Returns the empty string for an empty transcript, and also when even the
/// single most recent turn overflows the character budget.
pub fn render(history: &[Turn]) -> String {
    let recent = &history[history.len().saturating_sub(MAX_TURNS)..];
    for start in 0..recent.len() {
        let text = render_turns(&recent[start..]);
        if text.len() <= MAX_CHAR_HISTORY {
            return text;
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_renders_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn under_budget_is_returned_unchanged() {
        let history = vec![Turn::new("How are you?", "Fine."), Turn::new("Why?", "Because.")];
        let text = render(&history);
        assert_eq!(text, "Q: How are you?\nA: Fine.\nQ: Why?\nA: Because.");
        // Idempotence: rendering what already fits never shrinks it.
        assert!(text.len() <= MAX_CHAR_HISTORY);
    }

    #[test]
    fn keeps_at_most_the_last_eight_turns() {
        let history: Vec<Turn> = (0..12).map(|i| Turn::new(format!("q{i}"), "a")).collect();
        let text = render(&history);
        assert!(!text.contains("q3"));
        assert!(text.contains("q4"));
        assert!(text.contains("q11"));
    }

    #[test]
    fn drops_from_the_front_until_the_char_budget_fits() {
        let long = "x".repeat(MAX_CHAR_HISTORY / 4);
        let history = vec![
            Turn::new(long.clone(), long.clone()),
            Turn::new(long.clone(), long.clone()),
            Turn::new("short", "answer"),
        ];
        let text = render(&history);
        assert!(text.len() <= MAX_CHAR_HISTORY);
        assert!(text.contains("short"));
        assert_eq!(text.matches("Q: ").count(), 2);
    }

    #[test]
    fn single_oversized_turn_renders_empty() {
        let huge = "x".repeat(MAX_CHAR_HISTORY + 1);
        let history = vec![Turn::new(huge, "a")];
        assert_eq!(render(&history), "");
    }
}
