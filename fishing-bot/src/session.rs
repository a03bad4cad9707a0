//! Chat session: composes the conversation state with a spot finder and
//! enforces the one-request-at-a-time submission flow.

use std::sync::Arc;

use chat_core::{Conversation, Coordinates};
use spot_finder::SpotFinder;

/// Fixed bot reply appended when the spot finder fails. The error itself is
/// logged; the user sees only this message and may resubmit manually.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Backend metadata extraction error. Ensure social media scrapers have clear visibility.";

/// What happened to one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a request already in flight; no state change.
    Rejected,
    /// Model replied; its text (and any links) was appended.
    Answered,
    /// The request failed; the fixed fallback message was appended.
    Failed,
}

/// One user-facing chat session. Holds the conversation, the injected spot
/// finder, and the coordinates resolved once at startup (read-only afterward).
pub struct ChatSession {
    conversation: Conversation,
    finder: Arc<dyn SpotFinder>,
    location: Option<Coordinates>,
}

impl ChatSession {
    pub fn new(finder: Arc<dyn SpotFinder>, location: Option<Coordinates>) -> Self {
        Self {
            conversation: Conversation::new(),
            finder,
            location,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Submits one user turn. An accepted submission appends exactly one user
    /// message immediately and exactly one bot message after the finder
    /// settles; the awaiting flag is cleared unconditionally on both branches.
    ///
    /// History sent to the finder covers the turns BEFORE this submission;
    /// the current prompt travels separately as the new turn.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        self.conversation.set_draft(text);
        if !self.conversation.can_submit() {
            return SubmitOutcome::Rejected;
        }

        let prompt = self.conversation.take_draft();
        let history = self.conversation.history();
        self.conversation.push_user(&prompt);
        self.conversation.begin_request();

        let outcome = match self
            .finder
            .find_spots(&prompt, &history, self.location)
            .await
        {
            Ok(report) => {
                self.conversation.push_bot(report.text, report.links);
                SubmitOutcome::Answered
            }
            Err(e) => {
                tracing::error!(error = %e, "Spot finder request failed");
                self.conversation.push_bot_text(FALLBACK_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        };

        self.conversation.settle_request();
        outcome
    }
}
