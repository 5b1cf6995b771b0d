/// User domain types and validation rules
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned at creation
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Password, stored as provided
    pub password: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Candidate record for creation
///
/// Every field is optional on the wire so that missing fields can be
/// reported individually instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl NewUser {
    /// Create a candidate with all fields set
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Check that `name`, `email` and `password` are present and non-empty
    ///
    /// Reports every offending field, in declaration order.
    pub fn validate(self) -> Result<ValidUser, ValidationError> {
        let mut errors = Vec::new();
        check_required("name", self.name.as_deref(), &mut errors);
        check_required("email", self.email.as_deref(), &mut errors);
        check_required("password", self.password.as_deref(), &mut errors);

        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(ValidUser {
                name,
                email,
                password,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

/// A candidate record that passed validation
///
/// Only obtainable through [`NewUser::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    name: String,
    email: String,
    password: String,
}

impl ValidUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Partial update of a user record
///
/// The outer `Option` tells whether a field was sent at all; absent fields
/// are left unchanged. An explicit JSON `null` arrives as `Some(None)` and
/// fails validation, since it would clear a required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Option<String>>,
}

impl UserChanges {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Some(password.into()));
        self
    }

    /// New name, if one was supplied
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Option::as_deref)
    }

    /// New email, if one was supplied
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Option::as_deref)
    }

    /// New password, if one was supplied
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(Option::as_deref)
    }

    /// Whether the update touches no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Check that every supplied field is non-null and non-empty
    ///
    /// Untouched fields keep their stored (already valid) values, so a
    /// passing check means the resulting record is valid too.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if let Some(value) = value {
                check_required(field, value.as_deref(), &mut errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

// Maps a present field to `Some`, keeping `null` as `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is required"),
        }
    }

    fn empty(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} must not be empty"),
        }
    }
}

/// Validation failure listing every rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the rejected fields
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "Validation failed: {}", messages.join(", "))
    }
}

impl std::error::Error for ValidationError {}

fn check_required(field: &'static str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    match value {
        None => errors.push(FieldError::required(field)),
        Some("") => errors.push(FieldError::empty(field)),
        Some(_) => {}
    }
}
