//! Roster Core
//!
//! Domain types, validation rules and error handling for the Roster user service.
//!
//! This crate has no knowledge of HTTP or SQL. It defines:
//! - **Domain Types**: `User`, `NewUser`, `UserChanges`, `UserId`
//! - **Validation**: required-field checks producing a per-field `ValidationError`
//! - **Storage Contract**: the `UserStore` trait implemented by `roster-storage`
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::NewUser;
//!
//! let candidate = NewUser::new("Pradeep Raj", "pradeep@example.com", "12345");
//! let valid = candidate.validate().expect("all fields present");
//! assert_eq!(valid.email(), "pradeep@example.com");
//!
//! let err = NewUser::default().validate().unwrap_err();
//! assert_eq!(err.fields(), vec!["name", "email", "password"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{FieldError, NewUser, User, UserChanges, UserId, ValidUser, ValidationError};
