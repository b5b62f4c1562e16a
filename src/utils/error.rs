use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Image request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Image request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Image decode failed: {0}")]
    DecodeError(#[from] image::ImageError),

    #[error("Image processing error: {message}")]
    ImageProcessingError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Duplicate menu key: {key}")]
    DuplicateMenuKey { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Decode,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::HttpError(_) | OrderError::HttpStatusError { .. } => {
                ErrorCategory::Transport
            }
            OrderError::DecodeError(_) | OrderError::ImageProcessingError { .. } => {
                ErrorCategory::Decode
            }
            OrderError::IoError(_) | OrderError::SerializationError(_) => ErrorCategory::Output,
            OrderError::ConfigError { .. }
            | OrderError::MissingConfigError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::ConfigValidationError { .. }
            | OrderError::DuplicateMenuKey { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a later run may well succeed
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Decode => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Whether the image failure policy may swallow this error.
    pub fn is_image_fault(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Transport | ErrorCategory::Decode
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::HttpError(_) | OrderError::HttpStatusError { .. } => {
                "Could not download the menu item picture".to_string()
            }
            OrderError::DecodeError(_) | OrderError::ImageProcessingError { .. } => {
                "The menu item picture could not be read".to_string()
            }
            OrderError::IoError(_) | OrderError::SerializationError(_) => {
                "Could not write the order output".to_string()
            }
            OrderError::DuplicateMenuKey { key } => {
                format!("The menu lists '{}' more than once", key)
            }
            OrderError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check your network connection, or rerun with --on-image-error text-only"
            }
            ErrorCategory::Decode => {
                "Check the image_url of the menu item, or rerun with --on-image-error text-only"
            }
            ErrorCategory::Configuration => "Fix the menu file or command line options and retry",
            ErrorCategory::Output => "Check that the output directories exist and are writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
