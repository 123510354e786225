use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitRoomError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Search provider '{provider}' failed: {message}")]
    SearchError { provider: String, message: String },

    #[error("Collection store error: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, FitRoomError>;
