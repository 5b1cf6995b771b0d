//! User record queries

use chrono::{DateTime, Utc};
use roster_core::{
    error::{Result, RosterError},
    types::{User, UserChanges, UserId, ValidUser},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const USER_COLUMNS: &str = "id, name, email, password, created_at, updated_at";

/// Insert a validated user
///
/// Fails with [`RosterError::DuplicateEmail`] when the email is already taken.
pub async fn create(pool: &SqlitePool, user: &ValidUser) -> Result<User> {
    let id = UserId::generate();
    let now = Utc::now().timestamp_millis();

    let row = sqlx::query(&format!(
        "INSERT INTO users (id, name, email, password, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id.as_str())
    .bind(user.name())
    .bind(user.email())
    .bind(user.password())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_error(e, user.email()))?;

    from_row(&row)
}

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY rowid"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get a user by email
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Apply a partial update
///
/// Absent fields keep their stored value. `changes` must already be
/// validated. Returns `None` when no user has this ID.
pub async fn update(
    pool: &SqlitePool,
    id: &UserId,
    changes: &UserChanges,
) -> Result<Option<User>> {
    let now = Utc::now().timestamp_millis();

    let row = sqlx::query(&format!(
        "UPDATE users SET
             name = COALESCE(?, name),
             email = COALESCE(?, email),
             password = COALESCE(?, password),
             updated_at = ?
         WHERE id = ?
         RETURNING {USER_COLUMNS}"
    ))
    .bind(changes.name())
    .bind(changes.email())
    .bind(changes.password())
    .bind(now)
    .bind(id.as_str())
    .fetch_optional(pool)
    .await
    .map_err(|e| map_write_error(e, changes.email().unwrap_or_default()))?;

    row.as_ref().map(from_row).transpose()
}

/// Delete a user, returning the row as it was
pub async fn delete(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(&format!(
        "DELETE FROM users WHERE id = ? RETURNING {USER_COLUMNS}"
    ))
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: UserId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        created_at: timestamp(row.try_get("created_at")?)?,
        updated_at: timestamp(row.try_get("updated_at")?)?,
    })
}

fn timestamp(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| RosterError::database(format!("Invalid timestamp: {millis}")))
}

fn map_write_error(err: sqlx::Error, email: &str) -> RosterError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::debug!(email, "Rejected duplicate email");
            return RosterError::DuplicateEmail(email.to_string());
        }
    }
    err.into()
}
