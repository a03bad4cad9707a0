//! # chat-core
//!
//! Core types and state for the fishing spot chat bot: [`Message`], [`Conversation`],
//! grounding link and coordinate types, error types, and tracing initialization.
//! Transport-agnostic; used by spot-finder, geolocate, and fishing-bot.

pub mod conversation;
pub mod error;
pub mod logger;
pub mod types;

pub use conversation::{Conversation, GREETING};
pub use error::{ChatError, Result};
pub use logger::init_tracing;
pub use types::{
    Coordinates, GroundingLink, HistoryEntry, HistoryRole, Message, Role, VerificationMethod,
    VerifiedCatch,
};
