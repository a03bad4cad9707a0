//! Core types: message, roles, coordinates, grounding links, verified catches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a message in the visible conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single chat message. Immutable once created; appended to an ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Source citations extracted from the model's grounding metadata.
    pub grounding_links: Vec<GroundingLink>,
    /// Structured catch results. Declared for output parity; extraction leaves this empty.
    pub verified_catches: Vec<VerifiedCatch>,
}

impl Message {
    /// Builds a user message with a fresh id and the current timestamp.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
            grounding_links: Vec::new(),
            verified_catches: Vec::new(),
        }
    }

    /// Builds a bot message with a fresh id and the current timestamp.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Bot,
            content: content.into(),
            created_at: Utc::now(),
            grounding_links: Vec::new(),
            verified_catches: Vec::new(),
        }
    }

    /// Builds a bot message carrying grounding links.
    pub fn bot_with_links(content: impl Into<String>, links: Vec<GroundingLink>) -> Self {
        let mut message = Self::bot(content);
        message.grounding_links = links;
        message
    }
}

/// Device coordinates, resolved at most once per session; absence is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A source citation (title + URI) attached to a model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    pub title: String,
    pub uri: String,
}

/// How the model claims a catch location was verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    VisualLandmark,
    Geotag,
    SocialMention,
}

/// Structured catch result declared by the data model. Current extraction never
/// populates it; callers always receive an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedCatch {
    pub location_name: String,
    pub species: String,
    pub source_url: String,
    pub verification_method: VerificationMethod,
    /// Must be true for water/shore catches.
    pub is_wild_location: bool,
}

/// Role of a history entry sent back to the model; `Bot` renames to `Model` at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Model,
}

/// A role-tagged text turn supplied back to the model so it has context of prior exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    pub text: String,
}

impl HistoryEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::Model,
            text: text.into(),
        }
    }
}
