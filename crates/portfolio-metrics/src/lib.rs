pub mod aggregator;
pub mod storage;
pub mod types;

pub use aggregator::{round_seconds, summarize};
pub use storage::{InteractionLog, LogError, LogResult};
pub use types::{InteractionRecord, InteractionStats, UNKNOWN_MODE};
