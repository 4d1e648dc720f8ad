//! Chat assistant pass-through.
//!
//! The simulator only supplies context (the selected subsystem's catalog
//! text); answering is delegated to an external question-answering service
//! behind the [`Assistant`] trait. The shipped implementation is offline and
//! always returns the static fallback, so an unavailable service can never
//! affect simulator state.

/// Fallback answer used when no assistant service is reachable.
pub const FALLBACK_MESSAGE: &str =
    "The assistant service is not available right now. The simulator keeps \
     running; check the service configuration and try again.";

/// Answers questions about the runtime, given the current selection context.
pub trait Assistant {
    /// Returns an answer for `question`. `context` is the selected
    /// subsystem's display name and detail text, forwarded verbatim.
    fn ask(&self, question: &str, context: &str) -> String;
}

/// Builds the prompt an online implementation would send.
pub fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a seasoned virtual-machine expert and educator. Answer the \
         user's question about runtime memory management clearly and \
         concisely, preferring analogies for complex concepts.\n\n\
         Current context: {}\n\nQuestion: {}",
        context, question
    )
}

/// Assistant with no backing service; always answers with the fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAssistant;

impl Assistant for OfflineAssistant {
    fn ask(&self, _question: &str, _context: &str) -> String {
        FALLBACK_MESSAGE.to_string()
    }
}
