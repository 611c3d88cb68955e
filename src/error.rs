use thiserror::Error;

// =============================================================================
// Crate errors
// =============================================================================

#[derive(Error, Debug)]
pub enum SolidError {
    /// A capability the type promised but cannot honour. Only the "before"
    /// renditions produce this.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown principle '{0}' (expected one of: srp, ocp, lsp, isp, dip)")]
    UnknownPrinciple(String),
}

impl SolidError {
    pub fn not_implemented(reason: impl Into<String>) -> Self {
        Self::NotImplemented(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.message().to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: format!("line {}, column {}: {err}", err.line(), err.column()),
        }
    }
}
