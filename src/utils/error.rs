use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Input file not found: {path}")]
    MissingInputFile { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed line {line_number} ({content:?}): {reason}")]
    MalformedLine {
        line_number: usize,
        content: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parsing,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PuzzleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PuzzleError::MissingInputFile { .. } | PuzzleError::IoError(_) => ErrorCategory::Input,
            PuzzleError::MalformedLine { .. } => ErrorCategory::Parsing,
            PuzzleError::ConfigValidationError { .. }
            | PuzzleError::InvalidConfigValueError { .. }
            | PuzzleError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PuzzleError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PuzzleError::MalformedLine { .. } => ErrorSeverity::Medium,
            PuzzleError::MissingInputFile { .. }
            | PuzzleError::ConfigValidationError { .. }
            | PuzzleError::InvalidConfigValueError { .. }
            | PuzzleError::MissingConfigError { .. } => ErrorSeverity::High,
            PuzzleError::IoError(_) | PuzzleError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PuzzleError::MissingInputFile { path } => format!(
                "Place the puzzle input at '{}' or pass another file with --input",
                path
            ),
            PuzzleError::IoError(_) => {
                "Check that the input file is readable and valid UTF-8".to_string()
            }
            PuzzleError::MalformedLine { line_number, .. } => format!(
                "Fix line {} of the input, or rerun with --on-malformed skip",
                line_number
            ),
            PuzzleError::ConfigValidationError { field, .. }
            | PuzzleError::InvalidConfigValueError { field, .. }
            | PuzzleError::MissingConfigError { field } => {
                format!("Check the '{}' setting in the CLI flags or config file", field)
            }
            PuzzleError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PuzzleError::MissingInputFile { path } => {
                format!("Cannot find the puzzle input '{}'", path)
            }
            PuzzleError::MalformedLine {
                line_number,
                reason,
                ..
            } => format!("Line {} could not be parsed: {}", line_number, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
