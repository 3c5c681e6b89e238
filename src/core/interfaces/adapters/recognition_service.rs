use async_trait::async_trait;

use crate::core::errors::ExtractionError;
use crate::core::models::{RecognitionRequest, RecognitionResponse};

/// Seam to the external text-recognition collaborator. The real adapter
/// performs one network round-trip per request; tests substitute mocks.
#[async_trait]
pub trait TextRecognitionService: Send + Sync {
    async fn recognize_text(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionResponse, ExtractionError>;
}
