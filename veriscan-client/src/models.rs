use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Classification returned by the detection service.
///
/// `prediction` is an opaque label ("Fake"/"Real" for text, "Deepfake" or an
/// authentic label for images); the service may extend its vocabulary, so it
/// is deliberately not an enum. Auxiliary fields are service-defined and kept
/// as raw JSON values; anything unrecognized lands in `extra` so callers see
/// the full response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: String,
    /// Confidence in [0, 1]; percentage formatting is the caller's job.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Value>,
    #[serde(
        default,
        rename = "sentimentScore",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_score: Option<Value>,
    #[serde(
        default,
        rename = "factCheckerSources",
        skip_serializing_if = "Option::is_none"
    )]
    pub fact_checker_sources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image variant of an analysis request: raw bytes plus the declared media
/// type, uploaded as a single multipart field named `file`.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl ImagePayload {
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }
}
