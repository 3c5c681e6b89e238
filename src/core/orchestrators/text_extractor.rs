use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::core::errors::ExtractionError;
use crate::core::interfaces::adapters::TextRecognitionService;
use crate::core::models::{ExtractionOutcome, ImagePayload, RecognitionRequest};

/// Drives one extraction: read the image, submit it once to the recognition
/// service, map the response. No retries, no caching, no persisted state.
pub struct TextExtractor {
    recognition_service: Arc<dyn TextRecognitionService>,
}

impl TextExtractor {
    pub fn new(recognition_service: Arc<dyn TextRecognitionService>) -> Self {
        Self {
            recognition_service,
        }
    }

    pub async fn extract_text(
        &self,
        image_path: &Path,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        log::info!("[EXTRACTOR] Starting text extraction for {:?}", image_path);

        let payload = self.read_image_payload(image_path).await?;
        log::debug!(
            "[EXTRACTOR] Read {} bytes from {:?}",
            payload.len(),
            image_path
        );

        let request = RecognitionRequest::new(payload);
        let response = self.recognition_service.recognize_text(request).await?;

        if let Some(message) = response.error_message {
            if !message.is_empty() {
                log::error!("[EXTRACTOR] Recognition service reported: {}", message);
                return Err(ExtractionError::RecognitionService { message });
            }
        }

        // The first annotation holds the full detected text block; the rest
        // are individual tokens with position data this system does not use.
        match response.annotations.into_iter().next() {
            None => {
                log::info!("[EXTRACTOR] Recognition service returned no annotations");
                Ok(ExtractionOutcome::NoTextFound)
            }
            Some(first) => {
                log::info!(
                    "[EXTRACTOR] Text extraction complete. Extracted {} characters",
                    first.content.len()
                );
                Ok(ExtractionOutcome::Text(first.content))
            }
        }
    }

    async fn read_image_payload(&self, image_path: &Path) -> Result<ImagePayload, ExtractionError> {
        match tokio::fs::read(image_path).await {
            Ok(bytes) => Ok(ImagePayload::build_from_bytes(bytes)),
            Err(source) if source.kind() == ErrorKind::NotFound => {
                Err(ExtractionError::FileNotFound {
                    path: image_path.to_path_buf(),
                })
            }
            Err(source) => Err(ExtractionError::FileRead {
                path: image_path.to_path_buf(),
                source,
            }),
        }
    }
}
