pub const VISION_API_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const TEXT_DETECTION_FEATURE: &str = "TEXT_DETECTION";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const NO_TEXT_FOUND_MESSAGE: &str = "No text found.";
