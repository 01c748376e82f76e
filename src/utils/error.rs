use thiserror::Error;

#[derive(Error, Debug)]
pub enum JlgError {
    #[error("municipality code must be 6 decimal digits: {value}")]
    Format { value: String },

    #[error("municipality code has an invalid check digit: {value}")]
    Checksum { value: String },

    #[error("unknown prefecture code: {code}")]
    UnknownPrefecture { code: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("data source error: {message}")]
    DataSource { message: String },

    #[error("store error: {message}")]
    Store { message: String },
}

pub type Result<T> = std::result::Result<T, JlgError>;
