use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot sample from an empty universe")]
    EmptyUniverse,

    #[error("Cannot summarize an empty sequence")]
    EmptyInput,

    #[error("Contingency table has the wrong shape: {0}")]
    TableShape(String),

    #[error("Expected frequency table has a zero element")]
    ZeroExpected,

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Natural class file error: {0}")]
    ClassFile(String),

    #[error("Plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, PhonoError>;
