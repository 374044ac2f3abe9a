//! Résumé line scanning used to personalize scripted questions.
//!
//! Pure string work: the protocols cite résumé lines mentioning the subject
//! under discussion, so the question reads as informed rather than generic.

/// Keywords that mark a résumé line as research/internship/project related.
const RESEARCH_KEYWORDS: [&str; 6] = [
    "research",
    "intern",
    "project",
    "lab",
    "fellowship",
    "competition",
];

/// Broad academic areas scanned for when personalizing the subject opener.
const BROAD_FIELDS: [&str; 16] = [
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "Computer Science",
    "History",
    "Economics",
    "Literature",
    "Art",
    "Music",
    "Psychology",
    "Engineering",
    "Politics",
    "Philosophy",
    "Geography",
    "Languages",
];

/// Non-empty résumé lines containing `needle`, case-insensitive, up to `limit`.
pub fn lines_mentioning(cv_text: &str, needle: &str, limit: usize) -> Vec<String> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    cv_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.to_lowercase().contains(&needle))
        .map(str::to_string)
        .take(limit)
        .collect()
}

/// Résumé lines mentioning `subject` plus a research keyword, up to `limit`.
pub fn research_lines(cv_text: &str, subject: &str, limit: usize) -> Vec<String> {
    lines_mentioning(cv_text, subject, usize::MAX)
        .into_iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            RESEARCH_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .take(limit)
        .collect()
}

/// Broad academic areas the résumé mentions, in dictionary order, up to `limit`.
pub fn broad_fields(cv_text: &str, limit: usize) -> Vec<String> {
    let lower = cv_text.to_lowercase();
    BROAD_FIELDS
        .iter()
        .filter(|field| lower.contains(&field.to_lowercase()))
        .map(|field| field.to_string())
        .take(limit)
        .collect()
}
