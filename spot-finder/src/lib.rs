//! # Spot finder
//!
//! The single integration point with the external model. Defines the
//! [`SpotFinder`] trait and the Gemini implementation over an injected
//! [`gemini_client::ModelTransport`], so the whole exchange is testable with a
//! fake transport.
//!
//! The "radius limiting", "species filtering", and "verification" are textual
//! instructions to the model; nothing here validates the model's claims.

use anyhow::Result;
use async_trait::async_trait;
use chat_core::{Coordinates, GroundingLink, HistoryEntry, HistoryRole, VerifiedCatch};
use gemini_client::Content;

mod gemini_spot_finder;

pub use gemini_spot_finder::GeminiSpotFinder;

/// Model used by default; maps grounding needs the 2.5 series.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Fixed reply used when the model returns no text at all.
pub const SCANNING_PLACEHOLDER: &str = "I'm currently scanning social feeds for recent \
catches within your 30-mile perimeter. Please wait...";

/// Link title when a map-type grounding chunk carries none.
pub const MAP_LINK_FALLBACK_TITLE: &str = "Verified Fishing Location";

/// Link title when a web-type grounding chunk carries none.
pub const WEB_LINK_FALLBACK_TITLE: &str = "Social Catch Source";

/// Display-ready result of one model exchange.
///
/// `verified_catches` is declared for parity with the data model but the
/// current extraction never populates it.
#[derive(Debug, Clone)]
pub struct SpotReport {
    pub text: String,
    pub links: Vec<GroundingLink>,
    pub verified_catches: Vec<VerifiedCatch>,
}

/// Response client interface: one prompt plus prior history and optional
/// coordinates in, one display-ready report out. Errors propagate unchanged;
/// the caller owns the fallback presentation.
#[async_trait]
pub trait SpotFinder: Send + Sync {
    async fn find_spots(
        &self,
        prompt: &str,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
    ) -> Result<SpotReport>;
}

/// Builds the system instruction embedding the operational constraints.
/// With coordinates, their literal values are interpolated; without, the model
/// is told to ask the user for an area.
pub fn system_instruction(location: Option<Coordinates>) -> String {
    let location_clause = match location {
        Some(c) => format!("Lat: {}, Lng: {}", c.latitude, c.longitude),
        None => "Location unknown - prompt user for area".to_string(),
    };
    format!(
        "You are the 'Fishing Spot Chat Bot' backend engine. Your specialized task is to find \
high-yield fishing spots by scraping and analyzing public posts on Instagram, X (formerly \
Twitter), and Facebook.\n\n\
STRICT OPERATIONAL CONSTRAINTS:\n\
1. RADIUS LIMIT: Only analyze posts and locations within a 30-mile (approx 48km) radius of the \
user's current location ({location_clause}).\n\
2. POST QUANTITY: For the specific type of fish requested (or most common species in the area), \
limit your analysis to the 5 MOST RECENT verified public posts.\n\
3. TARGET PLATFORMS: Specifically search for public posts on Instagram, X, and Facebook using \
Google Search grounding.\n\
4. VISUAL SCREENING: You must \"verify\" that the catch occurred in the wild (on the water or \
on the shore).\n\
5. EXCLUSION CRITERIA: Reject any photos taken at a house, in a backyard, on a boat dock, or at \
a commercial cleaning station.\n\
6. METADATA EXTRACTION: Simulate the extraction of location metadata by cross-referencing \
visual landmarks, geotags mentioned in captions, or user location history in the post.\n\
7. DATA STRUCTURE: Categorize your findings by species. If multiple species are mentioned, \
focus on the top 5 most recent posts for each.\n\n\
Be clinical and precise. If you find posts outside the 30-mile radius, exclude them from the \
\"verified\" list."
    )
}

/// Maps history entries to request contents, in order, text preserved 1:1.
pub fn history_to_contents(history: &[HistoryEntry]) -> Vec<Content> {
    history
        .iter()
        .map(|entry| match entry.role {
            HistoryRole::User => Content::user(entry.text.clone()),
            HistoryRole::Model => Content::model(entry.text.clone()),
        })
        .collect()
}
