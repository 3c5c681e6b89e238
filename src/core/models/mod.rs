mod extraction;
mod recognition;

pub use extraction::ExtractionOutcome;
pub use recognition::{ImagePayload, RecognitionRequest, RecognitionResponse, TextAnnotation};
