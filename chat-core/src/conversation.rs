//! Conversation state: append-only message sequence, input draft, awaiting-response flag.

use crate::types::{GroundingLink, HistoryEntry, Message, Role};

/// Opening bot message seeded into every new conversation.
pub const GREETING: &str = "Fishing Spot Chat Bot Online. I am now scanning Instagram, X, \
and Facebook for the 5 most recent catches within a 30-mile radius. Where are we fishing today?";

/// Ordered message sequence plus the pending input draft and the single
/// awaiting-response flag gating concurrent submissions.
///
/// Messages are append-only; no mutation or deletion after insertion.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    draft: String,
    awaiting_response: bool,
}

impl Conversation {
    /// New conversation seeded with the greeting bot message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::bot(GREETING)],
            draft: String::new(),
            awaiting_response: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Moves the draft out, leaving it empty.
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }

    /// Sending is allowed only when the draft has non-whitespace content and
    /// no request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() && !self.awaiting_response
    }

    /// Marks a request as in flight; further submissions are rejected until settled.
    pub fn begin_request(&mut self) {
        self.awaiting_response = true;
    }

    /// Clears the in-flight flag. Called unconditionally on success or failure.
    pub fn settle_request(&mut self) {
        self.awaiting_response = false;
    }

    /// Appends a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Appends a bot message carrying grounding links.
    pub fn push_bot(&mut self, content: impl Into<String>, links: Vec<GroundingLink>) {
        self.messages.push(Message::bot_with_links(content, links));
    }

    /// Appends a plain bot message (no links).
    pub fn push_bot_text(&mut self, content: impl Into<String>) {
        self.push_bot(content, Vec::new());
    }

    /// Maps the message sequence to model-facing history entries, in order,
    /// renaming `bot` to `model`. Ids and timestamps do not cross this boundary.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .map(|m| match m.role {
                Role::User => HistoryEntry::user(m.content.clone()),
                Role::Bot => HistoryEntry::model(m.content.clone()),
            })
            .collect()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
