use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::client_config::RecognitionClientConfig;
use crate::core::errors::ExtractionError;
use crate::core::interfaces::adapters::TextRecognitionService;
use crate::core::models::{RecognitionRequest, RecognitionResponse, TextAnnotation};
use crate::global_constants;

/// Adapter for the Google Cloud Vision `images:annotate` endpoint. The API
/// key is loaded once at construction from the configured credentials file
/// and appended as the `key` query parameter on every request.
pub struct GoogleVisionRecognitionService {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct AnnotateRequestBody {
    requests: Vec<AnnotateRequestEntry>,
}

#[derive(Serialize)]
struct AnnotateRequestEntry {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
}

#[derive(Deserialize)]
struct AnnotateResponseBody {
    #[serde(default)]
    responses: Vec<AnnotateResponseEntry>,
}

#[derive(Deserialize, Default)]
struct AnnotateResponseEntry {
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<WireTextAnnotation>,
    error: Option<WireStatus>,
}

#[derive(Deserialize)]
struct WireTextAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct WireStatus {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct HttpErrorBody {
    error: WireStatus,
}

impl GoogleVisionRecognitionService {
    pub fn build(config: RecognitionClientConfig) -> Result<Self, ExtractionError> {
        log::info!("[VISION] Initializing Google Vision recognition service");

        let api_key = Self::load_api_key(&config)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ExtractionError::Request)?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint,
            api_key,
        })
    }

    fn load_api_key(config: &RecognitionClientConfig) -> Result<String, ExtractionError> {
        let contents =
            std::fs::read_to_string(&config.credentials_path).map_err(|source| {
                ExtractionError::Credential {
                    path: config.credentials_path.clone(),
                    reason: source.to_string(),
                }
            })?;

        let api_key = contents.trim().to_string();
        if api_key.is_empty() {
            return Err(ExtractionError::Credential {
                path: config.credentials_path.clone(),
                reason: "credentials file is empty".to_string(),
            });
        }

        Ok(api_key)
    }

    fn encode_request_body(request: RecognitionRequest) -> AnnotateRequestBody {
        let payload = request.into_payload();
        let base64_image = base64::engine::general_purpose::STANDARD.encode(payload.into_bytes());

        AnnotateRequestBody {
            requests: vec![AnnotateRequestEntry {
                image: ImageContent {
                    content: base64_image,
                },
                features: vec![Feature {
                    feature_type: global_constants::TEXT_DETECTION_FEATURE.to_string(),
                }],
            }],
        }
    }

    fn decode_response_body(body: &str) -> Result<RecognitionResponse, ExtractionError> {
        let parsed: AnnotateResponseBody =
            serde_json::from_str(body).map_err(|source| ExtractionError::MalformedResponse {
                reason: source.to_string(),
            })?;

        let entry = parsed.responses.into_iter().next().ok_or_else(|| {
            ExtractionError::MalformedResponse {
                reason: "response carried no annotation entries".to_string(),
            }
        })?;

        if let Some(status) = entry.error {
            if !status.message.is_empty() {
                return Ok(RecognitionResponse::with_error(status.message));
            }
        }

        let annotations = entry
            .text_annotations
            .into_iter()
            .map(|annotation| TextAnnotation::new(annotation.description))
            .collect();

        Ok(RecognitionResponse::with_annotations(annotations))
    }

    fn service_error_from_http_failure(
        status: reqwest::StatusCode,
        body: &str,
    ) -> ExtractionError {
        match serde_json::from_str::<HttpErrorBody>(body) {
            Ok(parsed) if !parsed.error.message.is_empty() => ExtractionError::RecognitionService {
                message: parsed.error.message,
            },
            _ => ExtractionError::RecognitionService {
                message: format!("recognition endpoint returned HTTP {}", status),
            },
        }
    }
}

#[async_trait]
impl TextRecognitionService for GoogleVisionRecognitionService {
    async fn recognize_text(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionResponse, ExtractionError> {
        log::info!(
            "[VISION] Submitting text detection request ({} image bytes)",
            request.payload_len()
        );

        let body = Self::encode_request_body(request);
        let request_url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = self.http_client.post(&request_url).json(&body).send().await?;
        let status = response.status();
        let response_text = response.text().await?;
        log::debug!("[VISION] Recognition response: {}", response_text);

        if !status.is_success() {
            return Err(Self::service_error_from_http_failure(status, &response_text));
        }

        let recognition = Self::decode_response_body(&response_text)?;
        log::info!(
            "[VISION] Received {} annotations",
            recognition.annotations.len()
        );

        Ok(recognition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ImagePayload;

    fn build_request(bytes: Vec<u8>) -> RecognitionRequest {
        RecognitionRequest::new(ImagePayload::build_from_bytes(bytes))
    }

    #[test]
    fn test_encode_request_body_produces_documented_wire_shape() {
        let body = GoogleVisionRecognitionService::encode_request_body(build_request(vec![
            0x89, 0x50, 0x4E, 0x47,
        ]));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["requests"][0]["image"]["content"], "iVBORw==");
        assert_eq!(json["requests"][0]["features"][0]["type"], "TEXT_DETECTION");
        assert_eq!(json["requests"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_decode_response_body_maps_annotations_in_order() {
        let body = r#"{
            "responses": [{
                "textAnnotations": [
                    {"description": "FULL TEXT BLOCK", "locale": "en"},
                    {"description": "FULL"},
                    {"description": "TEXT"}
                ]
            }]
        }"#;

        let response = GoogleVisionRecognitionService::decode_response_body(body).unwrap();

        assert!(response.error_message.is_none());
        assert_eq!(response.annotations.len(), 3);
        assert_eq!(response.annotations[0].content, "FULL TEXT BLOCK");
        assert_eq!(response.annotations[2].content, "TEXT");
    }

    #[test]
    fn test_decode_response_body_without_annotations_yields_empty_list() {
        let body = r#"{"responses": [{}]}"#;

        let response = GoogleVisionRecognitionService::decode_response_body(body).unwrap();

        assert!(response.annotations.is_empty());
        assert!(response.error_message.is_none());
    }

    #[test]
    fn test_decode_response_body_carries_service_error_message() {
        let body = r#"{
            "responses": [{
                "error": {"code": 3, "message": "Bad image data."}
            }]
        }"#;

        let response = GoogleVisionRecognitionService::decode_response_body(body).unwrap();

        assert_eq!(response.error_message.as_deref(), Some("Bad image data."));
        assert!(response.annotations.is_empty());
    }

    #[test]
    fn test_decode_response_body_rejects_non_json_payload() {
        let result = GoogleVisionRecognitionService::decode_response_body("<html>502</html>");

        assert!(matches!(
            result,
            Err(ExtractionError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_decode_response_body_rejects_empty_response_list() {
        let result = GoogleVisionRecognitionService::decode_response_body(r#"{"responses": []}"#);

        assert!(matches!(
            result,
            Err(ExtractionError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_http_failure_prefers_vendor_error_message() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid."}}"#;

        let error = GoogleVisionRecognitionService::service_error_from_http_failure(
            reqwest::StatusCode::FORBIDDEN,
            body,
        );

        match error {
            ExtractionError::RecognitionService { message } => {
                assert_eq!(message, "API key not valid.")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_http_failure_falls_back_to_status_code() {
        let error = GoogleVisionRecognitionService::service_error_from_http_failure(
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream exploded",
        );

        match error {
            ExtractionError::RecognitionService { message } => {
                assert_eq!(message, "recognition endpoint returned HTTP 502 Bad Gateway")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_api_key_trims_surrounding_whitespace() {
        let temp_dir = tempfile::tempdir().unwrap();
        let key_path = temp_dir.path().join("key.txt");
        std::fs::write(&key_path, "  AIzaSyTestKey123\n").unwrap();

        let config = RecognitionClientConfig::new(key_path);
        let api_key = GoogleVisionRecognitionService::load_api_key(&config).unwrap();

        assert_eq!(api_key, "AIzaSyTestKey123");
    }

    #[test]
    fn test_load_api_key_rejects_empty_credentials_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let key_path = temp_dir.path().join("key.txt");
        std::fs::write(&key_path, "   \n").unwrap();

        let config = RecognitionClientConfig::new(key_path);
        let result = GoogleVisionRecognitionService::load_api_key(&config);

        assert!(matches!(result, Err(ExtractionError::Credential { .. })));
    }

    #[test]
    fn test_load_api_key_reports_missing_credentials_file() {
        let config = RecognitionClientConfig::new("/nonexistent/key.txt".into());
        let result = GoogleVisionRecognitionService::load_api_key(&config);

        assert!(matches!(result, Err(ExtractionError::Credential { .. })));
    }

    #[test]
    fn test_build_succeeds_with_valid_credentials_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let key_path = temp_dir.path().join("key.txt");
        std::fs::write(&key_path, "AIzaSyTestKey123").unwrap();

        let service =
            GoogleVisionRecognitionService::build(RecognitionClientConfig::new(key_path)).unwrap();

        assert_eq!(service.endpoint, global_constants::VISION_API_ENDPOINT);
        assert_eq!(service.api_key, "AIzaSyTestKey123");
    }
}
