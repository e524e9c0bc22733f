pub mod handlers;
pub mod logging;
pub mod orchestrator;
pub mod server;
pub mod session_store;
pub mod state;

pub use orchestrator::{AskFailure, AskOutcome, AskRequest, AskSuccess, Orchestrator};
pub use server::{app_config, run_server_with_config};
pub use session_store::SessionStore;
pub use state::{AppState, ServerConfig};
