use std::collections::HashMap;

use portfolio_core::{Message, Session};
use tokio::sync::RwLock;

/// In-memory conversation store, owned by the server for the lifetime of
/// the process. Nothing is persisted.
///
/// Writers hold the lock only for the duration of a push, never across a
/// completion call.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session under a fresh identifier.
    pub async fn create(&self) -> String {
        let session = Session::generate();
        let id = session.id.clone();
        self.sessions.write().await.insert(id.clone(), session);
        log::debug!("[{}] Session created", id);
        id
    }

    /// Make sure `session_id` exists, creating it empty if unknown.
    pub async fn ensure(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session_id) {
            log::debug!("[{}] Unknown session id, creating it", session_id);
            sessions.insert(session_id.to_string(), Session::new(session_id));
        }
    }

    pub async fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().await.get(session_id).cloned()
    }

    /// Current history, empty for unknown identifiers.
    pub async fn history(&self, session_id: &str) -> Vec<Message> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map(|session| session.messages.clone())
            .unwrap_or_default()
    }

    pub async fn append(&self, session_id: &str, message: Message) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id))
            .add_message(message);
    }

    /// Append a question/answer pair in one critical section and return the
    /// resulting number of exchanges.
    pub async fn record_exchange(&self, session_id: &str, question: &str, answer: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        session.record_exchange(question, answer);
        session.conversation_length()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
