use serde::{Deserialize, Serialize};

/// Answer substituted when a completion carries no extractable text.
pub const FALLBACK_ANSWER: &str = "I couldn't generate a response. Please try again.";

/// What came back from the completion service, before text extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutput {
    /// Plain text taken from the primary candidate.
    Text(String),
    /// Structured candidates whose primary entry had no text.
    Candidates(Vec<Candidate>),
    /// Nothing recognisable in the response.
    Unrecognized,
}

impl CompletionOutput {
    /// First text available, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Candidates(candidates) => candidates.iter().find_map(Candidate::first_text),
            Self::Unrecognized => None,
        }
    }

    /// Extracted text or [`FALLBACK_ANSWER`].
    pub fn into_answer(self) -> String {
        match self {
            Self::Text(text) => text,
            other => other
                .text()
                .map(str::to_string)
                .unwrap_or_else(|| FALLBACK_ANSWER.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl Candidate {
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
    }

    /// All text parts concatenated, or `None` when there are none.
    pub fn joined_text(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(parts: Vec<Option<&str>>) -> Candidate {
        Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: parts
                    .into_iter()
                    .map(|text| Part {
                        text: text.map(str::to_string),
                    })
                    .collect(),
            }),
            finish_reason: None,
        }
    }

    #[test]
    fn text_output_is_returned_verbatim() {
        let output = CompletionOutput::Text("hello".to_string());
        assert_eq!(output.into_answer(), "hello");
    }

    #[test]
    fn candidates_fall_through_to_first_text_part() {
        let output = CompletionOutput::Candidates(vec![
            candidate(vec![None]),
            candidate(vec![None, Some("second")]),
        ]);
        assert_eq!(output.text(), Some("second"));
        assert_eq!(output.into_answer(), "second");
    }

    #[test]
    fn candidates_without_text_use_fallback() {
        let output = CompletionOutput::Candidates(vec![candidate(vec![None])]);
        assert_eq!(output.into_answer(), FALLBACK_ANSWER);
    }

    #[test]
    fn unrecognized_uses_fallback() {
        assert_eq!(CompletionOutput::Unrecognized.into_answer(), FALLBACK_ANSWER);
    }

    #[test]
    fn joined_text_concatenates_parts() {
        let c = candidate(vec![Some("a"), None, Some("b")]);
        assert_eq!(c.joined_text(), Some("ab".to_string()));
        assert_eq!(candidate(vec![]).joined_text(), None);
    }
}
