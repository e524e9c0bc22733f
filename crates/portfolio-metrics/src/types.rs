use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Histogram key for records logged without a mode.
pub const UNKNOWN_MODE: &str = "unknown";

/// One request outcome as persisted in the day's log file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRecord {
    pub timestamp: DateTime<Local>,
    pub session_id: Option<String>,
    pub mode: Option<String>,
    pub question: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub response_time_seconds: f64,
    pub model: String,
}

impl InteractionRecord {
    pub fn success(
        question: impl Into<String>,
        answer: impl Into<String>,
        response_time_seconds: f64,
        session_id: Option<String>,
        mode: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            session_id,
            mode,
            question: question.into(),
            answer: Some(answer.into()),
            error: None,
            response_time_seconds: crate::aggregator::round_seconds(response_time_seconds),
            model: model.into(),
        }
    }

    pub fn failure(
        question: impl Into<String>,
        error: impl Into<String>,
        response_time_seconds: f64,
        session_id: Option<String>,
        mode: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            session_id,
            mode,
            question: question.into(),
            answer: None,
            error: Some(error.into()),
            response_time_seconds: crate::aggregator::round_seconds(response_time_seconds),
            model: model.into(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionStats {
    pub total_interactions: usize,
    pub successful: usize,
    pub errors: usize,
    pub unique_sessions: usize,
    pub average_response_time_seconds: f64,
    pub mode_usage: BTreeMap<String, usize>,
    pub today: String,
}
