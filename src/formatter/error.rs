use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Invalid name: {0:?}")]
    InvalidName(String),
    #[error("Invalid value for attribute {name}: {value:?}")]
    InvalidAttributeValue { name: String, value: String },
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
