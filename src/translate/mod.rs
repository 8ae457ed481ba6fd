mod client;
mod types;

pub use client::{HttpTranslateClient, TranslateClient};
pub use types::{ImageFile, TargetLanguage, TranslationRequest, TranslationResult};
