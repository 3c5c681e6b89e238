mod google_vision_recognition_service;

pub use google_vision_recognition_service::GoogleVisionRecognitionService;
