use thiserror::Error;

#[derive(Error, Debug)]
pub enum StanceSignalError {
    #[error("Source error: {0}")]
    Source(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<serde_json::Error> for StanceSignalError {
    fn from(err: serde_json::Error) -> Self {
        StanceSignalError::Parse(err.to_string())
    }
}
