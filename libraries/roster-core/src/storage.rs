//! Storage trait for user persistence

use crate::error::Result;
use crate::types::{NewUser, User, UserChanges, UserId};
use async_trait::async_trait;

/// Persistence gateway for user records
///
/// Implementations validate candidates before writing and enforce email
/// uniqueness atomically, reporting violations as
/// [`RosterError::DuplicateEmail`](crate::RosterError::DuplicateEmail).
/// Lookups by identifier return `Ok(None)` when no record matches.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Validate and persist a new user, returning the stored record
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Get all users in insertion order
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Apply a partial update and return the updated record
    async fn update_by_id(&self, id: &UserId, changes: UserChanges) -> Result<Option<User>>;

    /// Delete a user and return the record as it was before deletion
    async fn delete_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Number of stored users
    async fn count(&self) -> Result<i64>;
}
