//! User record for authentication.
//!
//! # Spring Equivalent
//! `UserDetails` interface implemented by a JPA entity

use std::fmt;

/// A row of the `users` table, exposed to the security layer.
///
/// The account-status capability is expressed as plain methods; every stored
/// user is enabled, non-expired and non-locked.
///
/// # Example
/// ```
/// use basic_auth_db_core::http::security::User;
///
/// let user = User::new(1, "Ada", "Lovelace", "ada", "$2b$10$hash");
///
/// assert_eq!(user.get_username(), "ada");
/// assert!(user.is_enabled());
/// assert!(user.get_authorities().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    id: i64,
    first_name: String,
    last_name: String,
    username: String,
    password: String,
}

impl User {
    /// Creates a user record with an already encoded password.
    pub fn new(id: i64, first_name: &str, last_name: &str, username: &str, password: &str) -> Self {
        User {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Returns the database identity.
    pub fn get_id(&self) -> i64 {
        self.id
    }

    pub fn get_first_name(&self) -> &str {
        &self.first_name
    }

    pub fn get_last_name(&self) -> &str {
        &self.last_name
    }

    pub fn get_username(&self) -> &str {
        &self.username
    }

    /// Returns the encoded password (for authentication checks).
    pub fn get_password(&self) -> &str {
        &self.password
    }

    /// Granted authorities. Always empty: access is authenticated-or-not.
    pub fn get_authorities(&self) -> &[String] {
        &[]
    }

    pub fn is_account_non_expired(&self) -> bool {
        true
    }

    pub fn is_account_non_locked(&self) -> bool {
        true
    }

    pub fn is_credentials_non_expired(&self) -> bool {
        true
    }

    pub fn is_enabled(&self) -> bool {
        true
    }

    /// True when every account-status flag allows a login.
    pub fn is_usable(&self) -> bool {
        self.is_enabled()
            && self.is_account_non_expired()
            && self.is_account_non_locked()
            && self.is_credentials_non_expired()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ id: {}, username: {}, name: {} {} }}",
            self.id, self.username, self.first_name, self.last_name
        )
    }
}
