use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwgenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidRequestError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PwgenError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PwgenError::IoError(_) => "Could not read from or write to the terminal.".to_string(),
            PwgenError::InputClosed { .. } => {
                "Input ended before all questions were answered. No password generated.".to_string()
            }
            PwgenError::InvalidRequestError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PwgenError>;
