use async_trait::async_trait;
use glypnet_client::{
    Error, Result,
    translate::{ImageFile, TranslateClient, TranslationRequest, TranslationResult},
};
use std::sync::{Arc, Mutex};

/// Mock transport for testing the session controller without HTTP
#[derive(Debug)]
pub struct MockTranslateClient {
    pub responses: Arc<Mutex<Vec<TranslationResult>>>,
    pub requests: Arc<Mutex<Vec<TranslationRequest>>>,
    pub failure_status: Option<u16>,
}

impl MockTranslateClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            failure_status: None,
        }
    }

    pub fn with_responses(self, responses: Vec<TranslationResult>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_failure_status(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    pub fn get_requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslateClient for MockTranslateClient {
    async fn send(&self, request: TranslationRequest) -> Result<TranslationResult> {
        self.requests.lock().unwrap().push(request);

        if let Some(status) = self.failure_status {
            return Err(Error::ServiceStatus { status });
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::malformed("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_image_candidate(file_name: &str) -> ImageFile {
    ImageFile {
        file_name: file_name.to_string(),
        media_type: "image/jpeg".to_string(),
        bytes: b"not a real jpeg, but the controller never sniffs content".to_vec(),
    }
}

pub fn create_mock_result(confidence: f64) -> TranslationResult {
    TranslationResult {
        original_text: "அகர முதல எழுத்தெல்லாம்".to_string(),
        translated_text: "As the letter 'A' is the first of all letters...".to_string(),
        source_script: "Tamil Brahmi (Detected via CNN-RNN)".to_string(),
        confidence,
        techniques_used: vec![
            "CNN Feature Extraction".to_string(),
            "RNN Sequence Decoding".to_string(),
            "Transformer NMT".to_string(),
        ],
    }
}
