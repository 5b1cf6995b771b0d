/// Core error types for Roster
use crate::types::ValidationError;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// One or more required fields are missing or empty
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The unique index on `email` rejected the write
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(String),
}

impl RosterError {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Whether this error is a uniqueness violation
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEmail(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::migrate::MigrateError> for RosterError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewUser;

    #[test]
    fn test_validation_error_converts() {
        let err: RosterError = NewUser::default().validate().unwrap_err().into();
        assert!(matches!(err, RosterError::Validation(_)));
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_duplicate_message() {
        let err = RosterError::DuplicateEmail("a@example.com".to_string());
        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Duplicate email: a@example.com");
    }
}
