//! User Details Service for loading users from any data source.
//!
//! # Spring Security Equivalent
//! `UserDetailsService`
//!
//! The SQL-backed implementation lives in [`crate::store`].

use async_trait::async_trait;

use crate::http::security::User;

// =============================================================================
// User Details Error
// =============================================================================

/// Errors that can occur when loading or storing user details.
#[derive(Debug)]
pub enum UserDetailsError {
    /// User not found
    NotFound,
    /// A user with the same username already exists
    AlreadyExists,
    /// Invalid credentials
    InvalidCredentials,
    /// Account is disabled, expired or locked
    AccountDisabled,
    /// Database or storage error
    StorageError(String),
}

impl std::fmt::Display for UserDetailsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserDetailsError::NotFound => write!(f, "User not found"),
            UserDetailsError::AlreadyExists => write!(f, "User already exists"),
            UserDetailsError::InvalidCredentials => write!(f, "Invalid credentials"),
            UserDetailsError::AccountDisabled => write!(f, "Account is disabled"),
            UserDetailsError::StorageError(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for UserDetailsError {}

impl From<sqlx::Error> for UserDetailsError {
    fn from(err: sqlx::Error) -> Self {
        UserDetailsError::StorageError(err.to_string())
    }
}

// =============================================================================
// User Details Service Trait
// =============================================================================

/// Async trait for loading user details by username.
///
/// # Spring Security Equivalent
/// `UserDetailsService.loadUserByUsername(String)`
///
/// Returns `Ok(None)` for unknown, empty or malformed usernames. Only storage
/// failures are errors.
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// Load user by exact, case-sensitive username.
    async fn load_user_by_username(&self, username: &str)
        -> Result<Option<User>, UserDetailsError>;
}

// =============================================================================
// In-Memory User Details Service
// =============================================================================

#[cfg(test)]
pub(crate) use in_memory::InMemoryUserDetailsService;

#[cfg(test)]
mod in_memory {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::{UserDetailsError, UserDetailsService};
    use crate::http::security::User;

    /// In-memory implementation of UserDetailsService.
    #[derive(Clone, Default)]
    pub(crate) struct InMemoryUserDetailsService {
        users: Arc<RwLock<HashMap<String, User>>>,
    }

    impl InMemoryUserDetailsService {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Add a user, rejecting duplicate usernames.
        pub(crate) async fn add_user(&self, user: User) -> Result<(), UserDetailsError> {
            let mut users = self.users.write().await;
            let username = user.get_username().to_string();
            if users.contains_key(&username) {
                return Err(UserDetailsError::AlreadyExists);
            }
            users.insert(username, user);
            Ok(())
        }
    }

    #[async_trait]
    impl UserDetailsService for InMemoryUserDetailsService {
        async fn load_user_by_username(
            &self,
            username: &str,
        ) -> Result<Option<User>, UserDetailsError> {
            let users = self.users.read().await;
            Ok(users.get(username).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(1, "John", "Doe", "testuser", "password")
    }

    #[tokio::test]
    async fn test_in_memory_service() {
        let service = InMemoryUserDetailsService::new();
        service.add_user(test_user()).await.unwrap();

        let loaded = service.load_user_by_username("testuser").await.unwrap();
        assert_eq!(loaded.unwrap().get_username(), "testuser");
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let service = InMemoryUserDetailsService::new();
        service.add_user(test_user()).await.unwrap();

        assert!(service.load_user_by_username("TESTUSER").await.unwrap().is_none());
        assert!(service.load_user_by_username("test").await.unwrap().is_none());
        assert!(service.load_user_by_username("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let service = InMemoryUserDetailsService::new();
        service.add_user(test_user()).await.unwrap();

        let result = service
            .add_user(User::new(2, "Jane", "Doe", "testuser", "other"))
            .await;
        assert!(matches!(result, Err(UserDetailsError::AlreadyExists)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(UserDetailsError::NotFound.to_string(), "User not found");
        assert_eq!(
            UserDetailsError::StorageError("pool closed".into()).to_string(),
            "Storage error: pool closed"
        );
    }
}
