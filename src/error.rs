//! # Presenter Error Types
//!
//! Structured error handling for presenter dispatch, association wrapping,
//! serialization and configuration using thiserror.

use thiserror::Error;

/// Errors raised while declaring, building or invoking presenters
#[derive(Error, Debug)]
pub enum PresenterError {
    /// The receiver does not publicly respond to the requested name.
    #[error("undefined method '{method}' for {receiver}")]
    MethodNotFound { receiver: String, method: String },

    #[error("No association registered as '{name}'.")]
    UnregisteredAssociation { name: String },

    #[error("invalid arguments for '{method}': {reason}")]
    InvalidArguments { method: String, reason: String },

    #[error("presenter {presenter} was built without serializer support")]
    SerializationDisabled { presenter: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "postgres")]
    #[error("table not found: {table}")]
    TableNotFound { table: String },
}

impl PresenterError {
    pub fn method_not_found(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            receiver: receiver.into(),
            method: method.into(),
        }
    }

    pub fn unregistered_association(name: impl Into<String>) -> Self {
        Self::UnregisteredAssociation { name: name.into() }
    }

    pub fn invalid_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// True for the method-resolution failure kind.
    pub fn is_method_not_found(&self) -> bool {
        matches!(self, Self::MethodNotFound { .. })
    }
}

impl From<::config::ConfigError> for PresenterError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

pub type PresenterResult<T> = std::result::Result<T, PresenterError>;
