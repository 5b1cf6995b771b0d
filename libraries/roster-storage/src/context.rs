use crate::users;
use async_trait::async_trait;
use roster_core::{
    error::Result,
    storage::UserStore,
    types::{NewUser, User, UserChanges, UserId},
};
use sqlx::SqlitePool;

/// User store backed by `SQLite`
///
/// Owns the connection pool for the lifetime of the application.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database and bring its schema up to date
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: NewUser) -> Result<User> {
        let user = user.validate()?;
        users::create(&self.pool, &user).await
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        users::get_by_email(&self.pool, email).await
    }

    async fn update_by_id(&self, id: &UserId, changes: UserChanges) -> Result<Option<User>> {
        changes.validate()?;
        if changes.is_empty() {
            return users::get_by_id(&self.pool, id).await;
        }
        users::update(&self.pool, id, &changes).await
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<Option<User>> {
        users::delete(&self.pool, id).await
    }

    async fn count(&self) -> Result<i64> {
        users::count(&self.pool).await
    }
}
