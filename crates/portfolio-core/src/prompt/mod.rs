//! Prompt assembly.
//!
//! A prompt is laid out as: persona framing, mode instructions, the static
//! portfolio context, an optional transcript of recent history, and finally
//! the current question. Nothing is truncated except history, which keeps
//! only the last [`HISTORY_WINDOW`] messages.

mod context;

pub use context::{mode_instructions, PERSONA_PROMPT, PORTFOLIO_CONTEXT};

use crate::mode::Mode;
use crate::session::Message;

/// Number of most recent messages rendered into the prompt (three exchanges).
pub const HISTORY_WINDOW: usize = 6;

pub fn build_prompt(question: &str, mode: &Mode, history: &[Message]) -> String {
    let mut prompt = format!(
        "{}\n\n{}\n\nContext:\n{}\n",
        PERSONA_PROMPT,
        mode_instructions(mode),
        PORTFOLIO_CONTEXT
    );

    if !history.is_empty() {
        prompt.push_str("\n\nPrevious conversation:\n");
        for message in recent_history(history) {
            prompt.push_str(message.role.label());
            prompt.push_str(": ");
            prompt.push_str(&message.content);
            prompt.push('\n');
        }
    }

    prompt.push_str("\n\nCurrent question:\n");
    prompt.push_str(question);
    prompt
}

fn recent_history(history: &[Message]) -> &[Message] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}
