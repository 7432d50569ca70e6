use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StoryError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoryError::Transport(_) => ErrorSeverity::Medium,
            StoryError::ConfigValidationError { .. }
            | StoryError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            StoryError::IoError(_) | StoryError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Medium means the same call may
    /// succeed if simply re-run. Code 2 is left to clap usage errors.
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Medium => 4,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoryError::Transport(e) if e.is_timeout() => {
                "The Clubhouse API did not answer before the timeout".to_string()
            }
            StoryError::Transport(e) if e.is_connect() => {
                "Could not connect to the Clubhouse API".to_string()
            }
            StoryError::Transport(_) => "The request to the Clubhouse API failed".to_string(),
            StoryError::IoError(_) => "Could not read a local file".to_string(),
            StoryError::SerializationError(_) => "Could not encode the story payload".to_string(),
            StoryError::ConfigValidationError { field, .. }
            | StoryError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem with '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoryError::Transport(_) => {
                "Check network connectivity and the --api-endpoint value, then run again"
            }
            StoryError::IoError(_) => "Check that the --config path exists and is readable",
            StoryError::SerializationError(_) => "Check the story fields for unsupported values",
            StoryError::ConfigValidationError { .. } => "Fix the syntax of the config file",
            StoryError::InvalidConfigValueError { .. } => {
                "Correct the value on the command line or in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryError>;
