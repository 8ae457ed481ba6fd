use super::types::{TranslationRequest, TranslationResult};
use crate::{Error, Result, config::ServiceConfig};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait TranslateClient: Send + Sync {
    /// Issues exactly one exchange with the decipherment service. No retry;
    /// a failed submission requires a new explicit submit from the caller.
    async fn send(&self, request: TranslationRequest) -> Result<TranslationResult>;
}

pub struct HttpTranslateClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranslateClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        // Timeout expiry surfaces as a reqwest error, through the same
        // failure path as any other network fault.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

#[async_trait]
impl TranslateClient for HttpTranslateClient {
    async fn send(&self, request: TranslationRequest) -> Result<TranslationResult> {
        debug!(
            "Sending {} byte image '{}' for translation to '{}'",
            request.image.bytes.len(),
            request.image.file_name,
            request.target_language
        );

        let image_part = Part::bytes(request.image.bytes)
            .file_name(request.image.file_name)
            .mime_str(&request.image.media_type)?;

        let form = Form::new()
            .part("image", image_part)
            .text("target_lang", request.target_language.code());

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ServiceStatus {
                status: status.as_u16(),
            });
        }

        let result: TranslationResult = response
            .json()
            .await
            .map_err(|e| Error::malformed(e.to_string()))?;
        result.validate()?;

        debug!(
            "Received result: script '{}', confidence {}",
            result.source_script, result.confidence
        );

        Ok(result)
    }
}
