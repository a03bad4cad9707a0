//! Gemini implementation of [`SpotFinder`] over an injected transport.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chat_core::{Coordinates, GroundingLink, HistoryEntry};
use gemini_client::{
    Content, GenerateContentRequest, GroundingSource, ModelTransport, Tool, ToolConfig,
};
use tracing::instrument;

use super::{
    history_to_contents, system_instruction, SpotFinder, SpotReport, DEFAULT_MODEL,
    MAP_LINK_FALLBACK_TITLE, SCANNING_PLACEHOLDER, WEB_LINK_FALLBACK_TITLE,
};

/// SpotFinder backed by the Gemini generateContent API.
/// The transport is injected at construction so tests can run without network.
#[derive(Clone)]
pub struct GeminiSpotFinder {
    transport: Arc<dyn ModelTransport>,
    model: String,
}

impl GeminiSpotFinder {
    pub fn new(transport: Arc<dyn ModelTransport>) -> Self {
        Self {
            transport,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Assembles the full request: prior history plus the current turn, the
    /// system instruction, both search tools, and the location-biasing config
    /// when coordinates are present.
    fn build_request(
        &self,
        prompt: &str,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
    ) -> GenerateContentRequest {
        let mut contents = history_to_contents(history);
        contents.push(Content::user(prompt));

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(system_instruction(location))),
            tools: vec![Tool::google_search(), Tool::google_maps()],
            tool_config: location.map(|c| ToolConfig::for_lat_lng(c.latitude, c.longitude)),
        }
    }
}

#[async_trait]
impl SpotFinder for GeminiSpotFinder {
    #[instrument(skip(self, history))]
    async fn find_spots(
        &self,
        prompt: &str,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
    ) -> Result<SpotReport> {
        let request = self.build_request(prompt, history, location);
        let response = self.transport.generate(&self.model, &request).await?;

        let text = response
            .text()
            .unwrap_or_else(|| SCANNING_PLACEHOLDER.to_string());

        // Only the first candidate's grounding metadata is inspected.
        let mut links = Vec::new();
        if let Some(candidate) = response.candidates.into_iter().next() {
            if let Some(metadata) = candidate.grounding_metadata {
                for chunk in metadata.grounding_chunks {
                    match chunk.classify() {
                        GroundingSource::Map(source) => links.push(GroundingLink {
                            title: source
                                .title
                                .unwrap_or_else(|| MAP_LINK_FALLBACK_TITLE.to_string()),
                            uri: source.uri,
                        }),
                        GroundingSource::Web(source) => links.push(GroundingLink {
                            title: source
                                .title
                                .unwrap_or_else(|| WEB_LINK_FALLBACK_TITLE.to_string()),
                            uri: source.uri,
                        }),
                        GroundingSource::Unknown => {}
                    }
                }
            }
        }

        tracing::info!(link_count = links.len(), "Spot report extracted");

        Ok(SpotReport {
            text,
            links,
            verified_catches: Vec::new(),
        })
    }
}
