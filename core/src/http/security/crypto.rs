//! Password encoding utilities.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.crypto.password.PasswordEncoder`
//!
//! # Feature Flags
//! - `bcrypt`: Enables `BCryptPasswordEncoder` (default for the user store)
//! - `argon2`: Enables `Argon2PasswordEncoder`

use std::sync::Arc;

#[cfg(feature = "argon2")]
use argon2::password_hash::rand_core::OsRng;
#[cfg(feature = "argon2")]
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
#[cfg(feature = "argon2")]
use argon2::Argon2;
use derive_more::{Display, Error};

/// Raised when a raw password cannot be hashed.
#[derive(Debug, Display, Error)]
#[display("password encoding failed")]
pub struct EncodeError;

/// Trait for encoding and verifying passwords.
///
/// # Spring Security Equivalent
/// `PasswordEncoder` interface
///
/// # Example
/// ```ignore
/// use basic_auth_db_core::http::security::crypto::{PasswordEncoder, BCryptPasswordEncoder};
///
/// let encoder = BCryptPasswordEncoder::new();
/// let hash = encoder.encode("my_password")?;
/// assert!(encoder.matches("my_password", &hash));
/// ```
pub trait PasswordEncoder: Send + Sync {
    /// Encode the raw password with a fresh salt.
    ///
    /// # Spring Equivalent
    /// `PasswordEncoder.encode(CharSequence rawPassword)`
    fn encode(&self, raw_password: &str) -> Result<String, EncodeError>;

    /// Verify a raw password against an encoded password.
    ///
    /// Malformed hashes never match.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool;
}

impl<T: PasswordEncoder + ?Sized> PasswordEncoder for Arc<T> {
    fn encode(&self, raw_password: &str) -> Result<String, EncodeError> {
        (**self).encode(raw_password)
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        (**self).matches(raw_password, encoded_password)
    }
}

/// BCrypt password encoder.
///
/// # Spring Security Equivalent
/// `BCryptPasswordEncoder`
///
/// # Example
/// ```
/// use basic_auth_db_core::http::security::crypto::{PasswordEncoder, BCryptPasswordEncoder};
///
/// let encoder = BCryptPasswordEncoder::with_cost(4);
/// let hash = encoder.encode("secret_password").unwrap();
///
/// assert!(encoder.matches("secret_password", &hash));
/// assert!(!encoder.matches("wrong_password", &hash));
/// ```
#[cfg(feature = "bcrypt")]
#[derive(Clone)]
pub struct BCryptPasswordEncoder {
    cost: u32,
}

#[cfg(feature = "bcrypt")]
impl BCryptPasswordEncoder {
    /// Creates a new BCrypt password encoder with cost 10.
    pub fn new() -> Self {
        Self { cost: 10 }
    }

    /// Creates a new BCrypt password encoder with custom cost.
    ///
    /// Cost is clamped to the 4..=31 range bcrypt accepts.
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[cfg(feature = "bcrypt")]
impl Default for BCryptPasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "bcrypt")]
impl PasswordEncoder for BCryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<String, EncodeError> {
        bcrypt::hash(raw_password, self.cost).map_err(|_| EncodeError)
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        bcrypt::verify(raw_password, encoded_password).unwrap_or(false)
    }
}

/// Argon2 password encoder.
///
/// # Spring Security Equivalent
/// `Argon2PasswordEncoder`
///
/// # Example
/// ```
/// use basic_auth_db_core::http::security::crypto::{PasswordEncoder, Argon2PasswordEncoder};
///
/// let encoder = Argon2PasswordEncoder::new();
/// let hash = encoder.encode("secret_password").unwrap();
///
/// assert!(encoder.matches("secret_password", &hash));
/// assert!(!encoder.matches("wrong_password", &hash));
/// ```
#[cfg(feature = "argon2")]
#[derive(Clone)]
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

#[cfg(feature = "argon2")]
impl Argon2PasswordEncoder {
    /// Creates a new Argon2 password encoder with default settings.
    pub fn new() -> Self {
        Argon2PasswordEncoder {
            argon2: Argon2::default(),
        }
    }
}

#[cfg(feature = "argon2")]
impl Default for Argon2PasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "argon2")]
impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<String, EncodeError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| EncodeError)
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        match PasswordHash::new(encoded_password) {
            Ok(parsed_hash) => self
                .argon2
                .verify_password(raw_password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// No-op password encoder that stores passwords in plain text.
///
/// # Warning
/// **NEVER use this in production!** Only for tests.
///
/// # Example
/// ```
/// use basic_auth_db_core::http::security::crypto::{PasswordEncoder, NoOpPasswordEncoder};
///
/// let encoder = NoOpPasswordEncoder;
/// let encoded = encoder.encode("password").unwrap();
/// assert_eq!(encoded, "password");
/// assert!(encoder.matches("password", &encoded));
/// ```
#[derive(Clone, Copy, Default)]
pub struct NoOpPasswordEncoder;

impl PasswordEncoder for NoOpPasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<String, EncodeError> {
        Ok(raw_password.to_string())
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        raw_password == encoded_password
    }
}
