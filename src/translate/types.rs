use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-supplied image of an inscribed artifact. Acceptance is decided by
/// the declared media type, never by sniffing the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Rendering language for the translated output. Closed set; the wire codes
/// match what the decipherment service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    En,
    Ta,
    Fr,
}

impl TargetLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
            Self::Fr => "fr",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Self::En),
            "ta" => Ok(Self::Ta),
            "fr" => Ok(Self::Fr),
            other => Err(Error::UnknownTargetLanguage {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One submission to the decipherment service. Never constructed without a
/// selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub image: ImageFile,
    pub target_language: TargetLanguage,
}

impl TranslationRequest {
    pub fn new(image: ImageFile, target_language: TargetLanguage) -> Result<Self> {
        if image.is_empty() {
            return Err(Error::EmptyImage);
        }
        Ok(Self {
            image,
            target_language,
        })
    }
}

/// Decoded service response. Field names match the wire contract exactly;
/// a body missing any of them fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_script: String,
    pub confidence: f64,
    pub techniques_used: Vec<String>,
}

impl TranslationResult {
    /// A 2xx body that decodes but violates these invariants is treated as a
    /// transport failure, never rendered with empty values.
    pub fn validate(&self) -> Result<()> {
        if self.original_text.trim().is_empty() {
            return Err(Error::malformed("empty original_text"));
        }
        if self.translated_text.trim().is_empty() {
            return Err(Error::malformed("empty translated_text"));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(Error::malformed(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }

    /// Fixed substitute shown when the service call does not succeed. The
    /// labeling marks it as simulated so it is distinguishable from a genuine
    /// decipherment; the exact content is part of the observable contract.
    pub fn simulated_fallback() -> Self {
        Self {
            original_text: "அகர முதல எழுத்தெல்லாம் ஆதி பகவன் முதற்றே உலகு".to_string(),
            translated_text:
                "As the letter 'A' is the first of all letters, so the Eternal God is the beginning of the world."
                    .to_string(),
            source_script: "Tamil Brahmi (Simulated Hybrid OCR)".to_string(),
            confidence: 0.98,
            techniques_used: vec![
                "CNN Feature extraction".to_string(),
                "RNN Sequence Decoding".to_string(),
                "Transformer NMT".to_string(),
            ],
        }
    }
}
