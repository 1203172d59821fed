//! SQL-backed user lookup.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::repository::UserRepository;
use crate::http::security::{User, UserDetailsError, UserDetailsService};

/// `UserDetailsService` reading the `users` table.
///
/// # Spring Equivalent
/// A `@Service` implementing `UserDetailsService` on top of `UserRepository`
#[derive(Clone)]
pub struct SqlUserDetailsService {
    repository: UserRepository,
}

impl SqlUserDetailsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }
}

#[async_trait]
impl UserDetailsService for SqlUserDetailsService {
    async fn load_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserDetailsError> {
        if username.is_empty() {
            return Ok(None);
        }
        self.repository.find_by_username(username).await
    }
}
