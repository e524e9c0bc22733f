//! Response modes and the keyword classifier that picks one for `auto`.
//!
//! Keyword sets are ordered configuration: the first set with a match wins,
//! so a question touching several categories resolves by priority
//! (deep-dive > quick > story > default).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested mode value that asks the server to classify the question.
pub const AUTO_MODE: &str = "auto";

pub const DEEP_DIVE_KEYWORDS: &[&str] = &[
    "how did",
    "explain",
    "technical",
    "architecture",
    "implement",
    "design",
    "build",
    "develop",
    "challenge",
    "approach",
];

pub const QUICK_KEYWORDS: &[&str] = &["what is", "which", "when", "where", "list", "name"];

pub const STORY_KEYWORDS: &[&str] = &[
    "why",
    "journey",
    "background",
    "story",
    "motivation",
    "inspired",
];

/// A concrete response mode.
///
/// Unrecognised names requested by a client are kept verbatim in `Other`;
/// the prompt builder falls back to the default instructions for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    DeepDive,
    Quick,
    Story,
    Default,
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DeepDive => "deep-dive",
            Self::Quick => "quick",
            Self::Story => "story",
            Self::Default => "default",
            Self::Other(name) => name,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "deep-dive" => Self::DeepDive,
            "quick" => Self::Quick,
            "story" => Self::Story,
            "default" => Self::Default,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Every mode a client may request, with a short description.
    pub fn catalogue() -> [(&'static str, &'static str); 5] {
        [
            (AUTO_MODE, "Automatically detect best mode"),
            ("deep-dive", "Detailed technical explanations"),
            ("quick", "Brief factual answers"),
            ("story", "Personal narrative style"),
            ("default", "Balanced conversational"),
        ]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

fn keyword_table() -> [(Mode, &'static [&'static str]); 3] {
    [
        (Mode::DeepDive, DEEP_DIVE_KEYWORDS),
        (Mode::Quick, QUICK_KEYWORDS),
        (Mode::Story, STORY_KEYWORDS),
    ]
}

/// Pick a mode for `question` by case-insensitive substring match.
/// Never returns `auto`.
pub fn classify(question: &str) -> Mode {
    let lowered = question.to_lowercase();

    keyword_table()
        .into_iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(mode, _)| mode)
        .unwrap_or(Mode::Default)
}

/// Resolve a client-requested mode: absent or `auto` classifies the
/// question, anything else is used as given.
pub fn resolve_mode(requested: Option<&str>, question: &str) -> Mode {
    match requested {
        None | Some(AUTO_MODE) => {
            let mode = classify(question);
            log::debug!("Classified question as '{}' mode", mode);
            mode
        }
        Some(name) => {
            let mode = Mode::parse(name);
            if !mode.is_known() {
                log::info!("Unknown mode '{}' requested, using default instructions", mode);
            }
            mode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_dive_keywords_win() {
        assert_eq!(classify("Can you explain the architecture?"), Mode::DeepDive);
        assert_eq!(classify("HOW DID you train it"), Mode::DeepDive);
    }

    #[test]
    fn quick_keywords() {
        assert_eq!(classify("What is project 2?"), Mode::Quick);
        assert_eq!(classify("List your datasets"), Mode::Quick);
    }

    #[test]
    fn story_keywords() {
        assert_eq!(classify("Why Igala?"), Mode::Story);
        assert_eq!(classify("Tell me about your journey"), Mode::Story);
    }

    #[test]
    fn unmatched_question_is_default() {
        assert_eq!(classify("Hello there"), Mode::Default);
        assert_eq!(classify(""), Mode::Default);
    }

    #[test]
    fn priority_order_resolves_overlaps() {
        // "what is" (quick) and "why" (story) and "design" (deep-dive)
        assert_eq!(classify("What is the design and why?"), Mode::DeepDive);
        assert_eq!(classify("What is your motivation, and why?"), Mode::Quick);
    }

    #[test]
    fn resolve_mode_uses_classifier_for_auto_and_absent() {
        assert_eq!(resolve_mode(Some("auto"), "why?"), Mode::Story);
        assert_eq!(resolve_mode(None, "why?"), Mode::Story);
    }

    #[test]
    fn resolve_mode_passes_explicit_values_through() {
        assert_eq!(resolve_mode(Some("quick"), "explain"), Mode::Quick);
        assert!(resolve_mode(Some("story"), "explain").is_known());
        assert_eq!(
            resolve_mode(Some("haiku"), "explain"),
            Mode::Other("haiku".to_string())
        );
    }

    #[test]
    fn mode_serializes_as_plain_string() {
        let json = serde_json::to_string(&Mode::DeepDive).unwrap();
        assert_eq!(json, "\"deep-dive\"");

        let parsed: Mode = serde_json::from_str("\"poem\"").unwrap();
        assert_eq!(parsed.as_str(), "poem");
        assert!(!parsed.is_known());
    }
}
