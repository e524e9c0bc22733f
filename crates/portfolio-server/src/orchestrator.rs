//! Per-question request flow.
//!
//! resolve session -> resolve mode -> build prompt from the pre-update
//! history -> call the completion service -> on success append the
//! exchange, on failure leave the session untouched -> log the outcome.
//!
//! Every path ends in an [`AskOutcome`]; nothing here returns an error to
//! the transport layer.

use std::sync::Arc;

use portfolio_core::{build_prompt, resolve_mode};
use portfolio_llm::CompletionProvider;
use portfolio_metrics::{round_seconds, InteractionLog, InteractionRecord};
use serde::{Deserialize, Serialize};

use crate::logging::Timer;
use crate::session_store::SessionStore;

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskSuccess {
    pub answer: String,
    pub response_time: f64,
    pub session_id: String,
    pub mode_used: String,
    pub conversation_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskFailure {
    pub error: String,
    pub response_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AskOutcome {
    Success(AskSuccess),
    Failure(AskFailure),
}

impl AskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

pub struct Orchestrator {
    sessions: Arc<SessionStore>,
    interaction_log: Arc<InteractionLog>,
    llm: Arc<dyn CompletionProvider>,
}

impl Orchestrator {
    pub fn new(
        sessions: Arc<SessionStore>,
        interaction_log: Arc<InteractionLog>,
        llm: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            sessions,
            interaction_log,
            llm,
        }
    }

    pub async fn ask(&self, request: AskRequest) -> AskOutcome {
        let timer = Timer::new("ask");

        let session_id = match request
            .session_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
        {
            Some(id) => {
                self.sessions.ensure(id).await;
                id.to_string()
            }
            None => self.sessions.create().await,
        };

        let mode = resolve_mode(request.mode.as_deref(), &request.question);
        let history = self.sessions.history(&session_id).await;
        let prompt = build_prompt(&request.question, &mode, &history);

        log::info!(
            "[{}] Asking in '{}' mode with {} prior messages",
            session_id,
            mode,
            history.len()
        );

        let result = {
            let completion_timer = Timer::new("completion request");
            let result = self.llm.generate(&prompt).await;
            completion_timer.debug(&session_id);
            result
        };
        let model = self.llm.model().to_string();

        match result {
            Ok(output) => {
                let answer = output.into_answer();
                let conversation_length = self
                    .sessions
                    .record_exchange(&session_id, &request.question, &answer)
                    .await;
                let elapsed = timer.elapsed_secs();

                self.log(InteractionRecord::success(
                    &request.question,
                    &answer,
                    elapsed,
                    Some(session_id.clone()),
                    Some(mode.to_string()),
                    model,
                ))
                .await;

                AskOutcome::Success(AskSuccess {
                    answer,
                    response_time: round_seconds(elapsed),
                    session_id,
                    mode_used: mode.to_string(),
                    conversation_length,
                })
            }
            Err(error) => {
                let elapsed = timer.elapsed_secs();
                let message = error.to_string();
                log::error!("[{}] Completion failed: {}", session_id, message);

                self.log(InteractionRecord::failure(
                    &request.question,
                    &message,
                    elapsed,
                    Some(session_id.clone()),
                    Some(mode.to_string()),
                    model,
                ))
                .await;

                AskOutcome::Failure(AskFailure {
                    error: message,
                    response_time: round_seconds(elapsed),
                    session_id: Some(session_id),
                })
            }
        }
    }

    async fn log(&self, record: InteractionRecord) {
        if let Err(error) = self.interaction_log.record(record).await {
            log::error!("Failed to write interaction log: {}", error);
        }
    }
}
