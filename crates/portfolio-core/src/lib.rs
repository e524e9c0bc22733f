pub mod mode;
pub mod prompt;
pub mod session;

pub use mode::{classify, resolve_mode, Mode, AUTO_MODE};
pub use prompt::{build_prompt, mode_instructions, HISTORY_WINDOW, PORTFOLIO_CONTEXT};
pub use session::{Message, Role, Session};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
