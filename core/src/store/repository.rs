//! User repository for database operations.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::http::security::{User, UserDetailsError};

/// Fields of a user row before the database assigns its id.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    /// Already encoded password
    pub password: &'a str,
}

/// Repository for the `users` table.
///
/// # Spring Equivalent
/// `interface UserRepository extends JpaRepository<User, Long>` with the
/// derived query `findByUsername`
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by exact, case-sensitive username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserDetailsError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    /// Insert a user and return it with its generated id.
    ///
    /// A username that is already taken yields `AlreadyExists`.
    pub async fn save(&self, user: &NewUser<'_>) -> Result<User, UserDetailsError> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, username, password) VALUES (?, ?, ?, ?)",
        )
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.username)
        .bind(user.password)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                UserDetailsError::AlreadyExists
            }
            other => UserDetailsError::from(other),
        })?;

        Ok(User::new(
            result.last_insert_rowid(),
            user.first_name,
            user.last_name,
            user.username,
            user.password,
        ))
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> Result<i64, UserDetailsError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("total")?)
    }
}

fn map_user(row: &SqliteRow) -> Result<User, UserDetailsError> {
    let id: i64 = row.try_get("id")?;
    let first_name: String = row.try_get("first_name")?;
    let last_name: String = row.try_get("last_name")?;
    let username: String = row.try_get("username")?;
    let password: String = row.try_get("password")?;

    Ok(User::new(id, &first_name, &last_name, &username, &password))
}
