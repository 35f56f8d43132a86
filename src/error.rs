use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirCountError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for DirCountError {
    fn user_message(&self) -> String {
        match self {
            DirCountError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output stream was closed before the report was written".to_string()
            }
            DirCountError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            DirCountError::Config { .. } => Some(
                "Folder names must be plain directory names such as \"app\" or \"hooks\".".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirCountError>;
