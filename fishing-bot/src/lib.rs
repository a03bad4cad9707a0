//! # Fishing spot chat bot
//!
//! Wires chat-core, spot-finder, and geolocate into the interactive chat
//! application: config from env, the [`ChatSession`] submission flow, and the
//! terminal REPL runner.

pub mod config;
pub mod runner;
pub mod session;

pub use config::BotConfig;
pub use runner::{run_chat, run_probe_location};
pub use session::{ChatSession, SubmitOutcome, FALLBACK_ERROR_MESSAGE};
