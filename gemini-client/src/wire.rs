//! Wire types for the generateContent endpoint.
//!
//! Request and response JSON use camelCase field names. Grounding chunks are
//! classified into [`GroundingSource`] exactly once, at this boundary; nothing
//! downstream branches on raw field presence.

use serde::{Deserialize, Serialize};

/// Full request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

/// A role-tagged list of parts; one conversation turn or a system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Tool capability declaration; serializes as `{"googleSearch": {}}` or `{"googleMaps": {}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<EmptyConfig>,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: Some(EmptyConfig {}),
            google_maps: None,
        }
    }

    pub fn google_maps() -> Self {
        Self {
            google_search: None,
            google_maps: Some(EmptyConfig {}),
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyConfig {}

/// Location-biasing retrieval configuration, attached only when coordinates are known.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl ToolConfig {
    pub fn for_lat_lng(latitude: f64, longitude: f64) -> Self {
        Self {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude,
                    longitude,
                },
            },
        }
    }
}

/// Response body; only the fields this client reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Reply text of the first candidate, None when absent or empty.
    pub fn text(&self) -> Option<String> {
        let text = self.candidates.first()?.content.as_ref()?.text();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One raw citation record as returned by the API; call [`GroundingChunk::classify`]
/// to turn it into a [`GroundingSource`].
#[derive(Debug, Clone, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    maps: Option<SourceRef>,
    #[serde(default)]
    web: Option<SourceRef>,
}

impl GroundingChunk {
    /// Map reference wins over web when both are present, matching the upstream
    /// API contract where a chunk carries exactly one kind.
    pub fn classify(self) -> GroundingSource {
        if let Some(maps) = self.maps {
            GroundingSource::Map(maps)
        } else if let Some(web) = self.web {
            GroundingSource::Web(web)
        } else {
            GroundingSource::Unknown
        }
    }
}

/// Title and URI of one cited source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: String,
}

/// Which kind of source produced a citation, decided once at the network boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundingSource {
    Map(SourceRef),
    Web(SourceRef),
    Unknown,
}
