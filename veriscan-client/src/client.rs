//! HTTP client for the VeriScan detection API.
//!
//! Issues one POST per analysis and normalizes the response into either an
//! [`AnalysisResult`] or a [`ClientError`]. The client is stateless across
//! calls: no session, no cache, no retry.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::debug;

use crate::error::ClientError;
use crate::models::{AnalysisResult, ImagePayload};

/// Default base URL of the detection API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

const TEXT_FALLBACK: &str = "Failed to analyze text";
const IMAGE_FALLBACK: &str = "Failed to analyze image";

/// Client for the text and image analysis endpoints.
#[derive(Clone)]
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

impl AnalysisClient {
    /// Create a client against the given base URL (e.g. `http://host:8000/api`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Client with the default localhost endpoint.
    pub fn default_client() -> Self {
        Self::new(DEFAULT_API_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a piece of text as fake or legitimate news.
    ///
    /// Emptiness is not checked here; callers validate before invoking.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        debug!(chars = text.len(), "Submitting text for analysis");

        let response = self
            .client
            .post(format!("{}/analyze/text", self.base_url))
            .json(&TextRequest { text })
            .send()
            .await?;

        read_result(response, TEXT_FALLBACK).await
    }

    /// Classify an image as deepfake or authentic.
    ///
    /// The payload is uploaded as a single multipart field named `file`; the
    /// multipart encoder supplies the content-type boundary.
    pub async fn analyze_image(
        &self,
        payload: ImagePayload,
    ) -> Result<AnalysisResult, ClientError> {
        debug!(
            file = %payload.file_name,
            bytes = payload.bytes.len(),
            "Submitting image for analysis"
        );

        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/analyze/image", self.base_url))
            .multipart(form)
            .send()
            .await?;

        read_result(response, IMAGE_FALLBACK).await
    }
}

async fn read_result(
    response: reqwest::Response,
    fallback: &str,
) -> Result<AnalysisResult, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Service {
            status: status.as_u16(),
            message: error_detail(&body).unwrap_or_else(|| fallback.to_string()),
        });
    }

    let body = response.text().await?;
    let result: AnalysisResult =
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

    debug!(
        prediction = %result.prediction,
        confidence = result.confidence,
        "Analysis resolved"
    );

    Ok(result)
}

/// Extract the `detail` string from a structured error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AnalysisClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_text_request_serializes_single_field() {
        let json = serde_json::to_string(&TextRequest { text: "breaking news" }).unwrap();
        assert_eq!(json, r#"{"text":"breaking news"}"#);
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            error_detail(r#"{"detail":"text too short"}"#),
            Some("text too short".to_string())
        );
        assert_eq!(error_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"detail":42}"#), None);
    }
}
