use thiserror::Error;

#[derive(Error, Debug)]
pub enum PawPlanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Plan not found: {id}")]
    PlanNotFound { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PawPlanError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        PawPlanError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        PawPlanError::StorageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PawPlanError::ValidationError { .. } | PawPlanError::PlanNotFound { .. } => {
                ErrorCategory::Input
            }
            PawPlanError::ConfigError { .. }
            | PawPlanError::InvalidConfigValueError { .. }
            | PawPlanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PawPlanError::IoError(_) | PawPlanError::StorageError { .. } => ErrorCategory::Storage,
            PawPlanError::SerializationError(_) | PawPlanError::CsvError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PawPlanError::PlanNotFound { .. } => ErrorSeverity::Low,
            PawPlanError::ValidationError { .. } => ErrorSeverity::Medium,
            PawPlanError::ConfigError { .. }
            | PawPlanError::InvalidConfigValueError { .. }
            | PawPlanError::MissingConfigError { .. }
            | PawPlanError::SerializationError(_)
            | PawPlanError::CsvError(_) => ErrorSeverity::High,
            PawPlanError::IoError(_) | PawPlanError::StorageError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PawPlanError::ValidationError { message, .. } => message.clone(),
            PawPlanError::PlanNotFound { id } => format!("No plan with id '{}'", id),
            PawPlanError::SerializationError(_) => {
                "The stored demo data could not be read".to_string()
            }
            PawPlanError::IoError(_) | PawPlanError::StorageError { .. } => {
                "The demo data store is not accessible".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the values passed on the command line",
            ErrorCategory::Configuration => "Check the CLI flags and the TOML config file",
            ErrorCategory::Storage => "Check that the data directory exists and is writable",
            ErrorCategory::Data => "Run `pawplan reset` to re-seed the demo data",
        }
    }
}

pub type Result<T> = std::result::Result<T, PawPlanError>;
