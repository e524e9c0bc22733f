pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{CompletionProvider, LLMError, Result};
pub use providers::GeminiProvider;
pub use types::{CompletionOutput, FALLBACK_ANSWER};
