use shiori_clean::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShioriError {
    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("selection failed: {0}")]
    Selection(String),

    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
