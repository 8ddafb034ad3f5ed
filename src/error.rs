use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormValidatorError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Selector error: {message}")]
    Selector { message: String },

    #[error("Invalid pattern for input type '{input_type}': {source}")]
    Pattern {
        input_type: String,
        #[source]
        source: regex::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormValidatorError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn selector(message: impl Into<String>) -> Self {
        Self::Selector {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormValidatorError>;
