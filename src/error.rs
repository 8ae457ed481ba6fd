use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported file type: {media_type}")]
    UnsupportedFileType { media_type: String },

    #[error("Empty image payload")]
    EmptyImage,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Unknown target language: {code}")]
    UnknownTargetLanguage { code: String },

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service returned status {status}")]
    ServiceStatus { status: u16 },

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Validation errors are rejected synchronously at the controller
    /// boundary; everything else is absorbed into the fallback path.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoFileSelected
                | Self::UnsupportedFileType { .. }
                | Self::EmptyImage
                | Self::SubmissionInFlight
                | Self::UnknownTargetLanguage { .. }
        )
    }
}
