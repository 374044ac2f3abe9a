//! Theme-classifier output matching and tally bookkeeping.
//!
//! The classifier's free-text guess is matched against the fixed taxonomy by
//! case-insensitive containment, first label in taxonomy order wins. A guess
//! matching no label is a discard, never an error; the tally only ever grows
//! and only ever holds canonical labels.

use std::collections::BTreeMap;

use super::presets::THEMES;

/// Minimum guess length for the reverse containment direction, so a trivial
/// fragment ("a", "the") cannot claim a label.
const MIN_REVERSE_MATCH_LEN: usize = 8;

/// Match a classifier guess to a canonical taxonomy label.
pub fn match_label(guess: &str) -> Option<&'static str> {
    let guess = guess.trim().to_lowercase();
    if guess.is_empty() {
        return None;
    }
    THEMES.iter().copied().find(|label| {
        let label = label.to_lowercase();
        guess.contains(&label) || (guess.len() >= MIN_REVERSE_MATCH_LEN && label.contains(&guess))
    })
}

/// Increment the tally for a canonical label.
pub fn record(tally: &mut BTreeMap<String, u32>, label: &str) {
    *tally.entry(label.to_string()).or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_label_matches() {
        assert_eq!(
            match_label("Creativity as personal voice"),
            Some("Creativity as personal voice")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            match_label("creativity AS personal VOICE"),
            Some("Creativity as personal voice")
        );
    }

    #[test]
    fn guess_wrapped_in_prose_still_matches() {
        assert_eq!(
            match_label("The best fit is: Leadership / mentoring younger peers."),
            Some("Leadership / mentoring younger peers")
        );
    }

    #[test]
    fn partial_guess_matches_when_long_enough() {
        assert_eq!(
            match_label("Evolving concept of home"),
            Some("Evolving concept of home & belonging")
        );
        // Too short for the reverse direction.
        assert_eq!(match_label("home"), None);
    }

    #[test]
    fn off_taxonomy_guess_is_discarded() {
        assert_eq!(match_label("An entirely invented narrative theme"), None);
        assert_eq!(match_label(""), None);
    }

    #[test]
    fn record_is_monotonic() {
        let mut tally = BTreeMap::new();
        record(&mut tally, THEMES[0]);
        record(&mut tally, THEMES[0]);
        record(&mut tally, THEMES[1]);
        assert_eq!(tally[THEMES[0]], 2);
        assert_eq!(tally[THEMES[1]], 1);
    }
}
