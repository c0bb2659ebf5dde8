use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Could not parse date: {input}. Please use format: DD-MM-YYYY or YYYY-MM-DD")]
    DateParseError { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Profile processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;

impl ProfileError {
    /// Message safe to show directly to the person running the tool.
    /// Processing errors stay generic; the date error carries the raw input
    /// because the user typed it in the first place.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::DateParseError { .. } => self.to_string(),
            ProfileError::IoError(e) => format!("A file could not be read or written: {}", e),
            ProfileError::SerializationError(_) => {
                "A lookup table or output could not be handled as JSON".to_string()
            }
            ProfileError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ProfileError::ConfigError { message } => format!("Configuration problem: {}", message),
            ProfileError::MissingConfigError { field } => {
                format!("Missing required configuration field: {}", field)
            }
            ProfileError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ProfileError::ProcessingError { .. } => "Error processing your data".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProfileError::DateParseError { .. } => {
                "Enter the birth date as DD-MM-YYYY or YYYY-MM-DD"
            }
            ProfileError::IoError(_) => "Check that the file paths exist and are writable",
            ProfileError::SerializationError(_) => {
                "Check that the lookup table files contain valid JSON"
            }
            ProfileError::TomlError(_) => "Check the configuration file syntax",
            ProfileError::ConfigError { .. }
            | ProfileError::MissingConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected configuration"
            }
            ProfileError::ProcessingError { .. } => "Re-run with --verbose and inspect the logs",
        }
    }
}
