use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;

use veriscan_client::AnalysisResult;

#[derive(Serialize, Deserialize, Debug)]
pub struct DetectionReport {
    pub source: SourceInfo,
    pub verdict: String,
    pub result: AnalysisResult,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceInfo {
    Text {
        characters: usize,
    },
    Image {
        path: String,
        size_bytes: u64,
        content_type: String,
    },
}

impl DetectionReport {
    pub fn new(source: SourceInfo, result: AnalysisResult) -> Self {
        let verdict = verdict_line(&source, &result);
        Self {
            source,
            verdict,
            result,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn save_to_file(&self, output_path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = fs::File::create(output_path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// One-line human verdict matching how the product phrases results.
fn verdict_line(source: &SourceInfo, result: &AnalysisResult) -> String {
    let label = match (source, result.prediction.as_str()) {
        (SourceInfo::Text { .. }, "Fake") => "Fake News Detected",
        (SourceInfo::Text { .. }, _) => "Legitimate News",
        (SourceInfo::Image { .. }, "Deepfake") => "Deepfake Detected",
        (SourceInfo::Image { .. }, _) => "Authentic Image",
    };
    format!(
        "{} ({:.2}% confidence)",
        label,
        result.confidence * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fake_text_result() -> AnalysisResult {
        serde_json::from_value(json!({ "prediction": "Fake", "confidence": 0.9412 })).unwrap()
    }

    #[test]
    fn test_report_creation() {
        let report = DetectionReport::new(SourceInfo::Text { characters: 250 }, fake_text_result());

        assert_eq!(report.verdict, "Fake News Detected (94.12% confidence)");
        assert!(!report.timestamp.is_empty());
    }

    #[test]
    fn test_image_verdict() {
        let result: AnalysisResult =
            serde_json::from_value(json!({ "prediction": "Authentic", "confidence": 0.8 }))
                .unwrap();
        let report = DetectionReport::new(
            SourceInfo::Image {
                path: "/tmp/photo.png".to_string(),
                size_bytes: 1024,
                content_type: "image/png".to_string(),
            },
            result,
        );

        assert_eq!(report.verdict, "Authentic Image (80.00% confidence)");
    }

    #[test]
    fn test_json_serialization() {
        let report = DetectionReport::new(SourceInfo::Text { characters: 10 }, fake_text_result());

        let json = report.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("\"kind\": \"text\""));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = DetectionReport::new(SourceInfo::Text { characters: 10 }, fake_text_result());

        report.save_to_file(path.to_str().unwrap()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"prediction\": \"Fake\""));
    }
}
