use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Structure error: {record} element is missing {missing}")]
    Structure {
        record: &'static str,
        missing: String,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NewsError {
    pub(crate) fn missing(record: &'static str, missing: impl Into<String>) -> Self {
        Self::Structure {
            record,
            missing: missing.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
