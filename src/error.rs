use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqChatbotError {
    #[error("Unsupported file format '{0}'. Please use CSV, JSON, or TXT.")]
    UnsupportedFormat(String),

    #[error("Error loading data: {0}. Ensure the file format matches expectations.")]
    DataLoad(String),

    #[error("Insufficient funds: tried to withdraw {requested} with balance {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FaqChatbotError>;
