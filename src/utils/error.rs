use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid grade: {value} (must be between 0 and 100)")]
    InvalidGrade { value: f64 },

    #[error("no data")]
    EmptyInput,

    #[error("Unparsable number on line {line}: {content:?}")]
    ParseError { line: usize, content: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
    Output,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::InvalidGrade { .. }
            | DemoError::EmptyInput
            | DemoError::ParseError { .. }
            | DemoError::ValidationError { .. } => ErrorCategory::Validation,
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::SerializationError(_) | DemoError::CsvError(_) => ErrorCategory::Output,
        }
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::InvalidGrade { value } => {
                format!("Grade {} is out of range, use a value from 0 to 100", value)
            }
            DemoError::EmptyInput => "No numbers to summarize".to_string(),
            DemoError::ParseError { line, content } => format!(
                "Line {} is not a number: {:?} (run without --strict to skip it)",
                line, content
            ),
            DemoError::IoError(e) => format!("Could not read or write a file: {}", e),
            DemoError::ConfigError { message } => format!("Bad configuration: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// 依錯誤類別決定程式結束碼，2 保留給 clap 的參數錯誤
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 3,
            ErrorCategory::Output => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
