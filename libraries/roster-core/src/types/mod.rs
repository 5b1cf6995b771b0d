/// Domain types for Roster
pub mod ids;
pub mod user;

pub use ids::UserId;
pub use user::{FieldError, NewUser, User, UserChanges, ValidUser, ValidationError};
