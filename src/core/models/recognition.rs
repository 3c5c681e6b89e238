/// Raw bytes of the image being recognized. Loaded once from disk and owned
/// by the extraction call until the request consumes it.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn build_from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// One submission to the recognition service. Created per extraction call
/// and consumed by the service adapter; exactly one is issued per call.
#[derive(Debug)]
pub struct RecognitionRequest {
    payload: ImagePayload,
}

impl RecognitionRequest {
    pub fn new(payload: ImagePayload) -> Self {
        Self { payload }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    pub fn into_payload(self) -> ImagePayload {
        self.payload
    }
}

/// A recognized text fragment. The service also reports position data per
/// fragment; the adapter drops it since nothing here uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnnotation {
    pub content: String,
}

impl TextAnnotation {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

/// What came back from the recognition service: an ordered annotation list
/// (first entry holds the full detected text block) and, when the service
/// failed on this image, its error message.
#[derive(Debug, Clone, Default)]
pub struct RecognitionResponse {
    pub annotations: Vec<TextAnnotation>,
    pub error_message: Option<String>,
}

impl RecognitionResponse {
    pub fn with_annotations(annotations: Vec<TextAnnotation>) -> Self {
        Self {
            annotations,
            error_message: None,
        }
    }

    pub fn with_error(message: String) -> Self {
        Self {
            annotations: Vec::new(),
            error_message: Some(message),
        }
    }
}
