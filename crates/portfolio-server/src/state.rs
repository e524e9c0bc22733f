use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use portfolio_llm::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use portfolio_llm::{CompletionProvider, GeminiProvider, LLMError};
use portfolio_metrics::InteractionLog;

use crate::orchestrator::Orchestrator;
use crate::session_store::SessionStore;

/// Runtime configuration, usually filled from the command line.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub logs_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            logs_dir: PathBuf::from("logs"),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    pub fn build_provider(&self) -> Result<GeminiProvider, LLMError> {
        GeminiProvider::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(self.request_timeout)
    }
}

pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub interaction_log: Arc<InteractionLog>,
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(llm: Arc<dyn CompletionProvider>, interaction_log: InteractionLog) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let interaction_log = Arc::new(interaction_log);
        let orchestrator = Orchestrator::new(sessions.clone(), interaction_log.clone(), llm);

        Self {
            sessions,
            interaction_log,
            orchestrator,
        }
    }

    pub async fn new_with_config(config: &ServerConfig) -> std::io::Result<Self> {
        log::info!("Initializing interaction log at: {:?}", config.logs_dir);
        let interaction_log = InteractionLog::new(&config.logs_dir);
        interaction_log
            .init()
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        if config.api_key.is_empty() {
            log::warn!("No Gemini API key configured; completion requests will fail");
        }

        log::info!(
            "Creating Gemini provider with base URL: {} and model: {}",
            config.base_url,
            config.model
        );
        let provider = config
            .build_provider()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        Ok(Self::new(Arc::new(provider), interaction_log))
    }
}
