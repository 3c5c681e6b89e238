use std::path::PathBuf;
use std::time::Duration;

use crate::global_constants;

/// Configuration handed to the recognition service adapter. Every value is
/// explicit; nothing is read from ambient process state, so tests can inject
/// fixtures without touching environment variables.
#[derive(Debug, Clone)]
pub struct RecognitionClientConfig {
    pub credentials_path: PathBuf,
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl RecognitionClientConfig {
    pub fn new(credentials_path: PathBuf) -> Self {
        Self {
            credentials_path,
            endpoint: global_constants::VISION_API_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(global_constants::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
