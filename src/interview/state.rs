//! Wire types for the interview endpoints.
//!
//! The service is pure with respect to `InterviewState`: the caller sends the
//! whole snapshot on every call and echoes back whatever fields the response
//! patches. Nothing is stored server-side between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level interview subject. Selects which protocol runs.
///
/// Parsed from the free-form wire string; anything unrecognized is kept as
/// `Unknown` and routed to the open-ended fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Track {
    AcademicInterests,
    ExtracurricularActivities,
    FamilyBackground,
    Unknown(String),
}

impl Track {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "academic interests" => Self::AcademicInterests,
            "extracurricular activities" => Self::ExtracurricularActivities,
            "family & background" | "family and background" => Self::FamilyBackground,
            _ => Self::Unknown(s.to_string()),
        }
    }
}

impl From<String> for Track {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Track> for String {
    fn from(track: Track) -> String {
        track.to_string()
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AcademicInterests => "Academic Interests",
            Self::ExtracurricularActivities => "Extracurricular Activities",
            Self::FamilyBackground => "Family & Background",
            Self::Unknown(s) => s,
        };
        write!(f, "{s}")
    }
}

/// One question/answer pair in the transcript.
///
/// `tag` marks structural checkpoints: questions whose answers a later call
/// must recognize (entity-list sources, per-entity step markers). At most the
/// latest turn carrying a given tag is ever consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Turn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            tag: None,
        }
    }

    pub fn tagged(
        question: impl Into<String>,
        answer: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            tag: Some(tag.into()),
        }
    }
}

/// Caller-owned interview snapshot, passed whole on every `/next-question`
/// call. Field names match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewState {
    pub track: Track,
    #[serde(default)]
    pub cv_text: String,
    #[serde(default)]
    pub history: Vec<Turn>,
    #[serde(default)]
    pub is_rapid_fire: bool,
    #[serde(default)]
    pub theme_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub current_theme: String,
    /// Favourite subjects, extracted once from the `ask_fav_subjects` answer.
    #[serde(default)]
    pub academic_fields: Vec<String>,
    /// Top activities, extracted once from the `narrow_top_activities` answer.
    #[serde(default)]
    pub extracurricular_fields: Vec<String>,
    /// Cursor into the Background preset list. The caller increments it.
    #[serde(default)]
    pub background_index: usize,
    /// Cursor into the Academic preset list (regular phase). The response
    /// carries the advanced value for the caller to echo back.
    #[serde(default)]
    pub academic_index: usize,
}

impl InterviewState {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            cv_text: String::new(),
            history: Vec::new(),
            is_rapid_fire: false,
            theme_counts: BTreeMap::new(),
            current_theme: String::new(),
            academic_fields: Vec::new(),
            extracurricular_fields: Vec::new(),
            background_index: 0,
            academic_index: 0,
        }
    }
}

/// Response of `/next-question`: the question plus the state patch the caller
/// must fold back into its snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextQuestion {
    pub question: String,
    pub current_theme: String,
    pub theme_counts: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub academic_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extracurricular_fields: Vec<String>,
}
