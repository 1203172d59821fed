//! User-details backed authentication.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.authentication.dao.DaoAuthenticationProvider`

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::web;
use futures_util::future::{ready, LocalBoxFuture};

use crate::http::error::AuthError;
use crate::http::security::config::Authenticator;
use crate::http::security::crypto::PasswordEncoder;
use crate::http::security::http_basic::extract_basic_auth;
use crate::http::security::user::User;
use crate::http::security::user_details::{UserDetailsError, UserDetailsService};

/// Authenticator that checks HTTP Basic credentials against a
/// [`UserDetailsService`].
///
/// # Example
/// ```ignore
/// let authenticator = UserDetailsAuthenticator::new(
///     SqlUserDetailsService::new(pool),
///     BCryptPasswordEncoder::new(),
/// );
///
/// let user = authenticator.authenticate("admin", "123").await?;
/// ```
#[derive(Clone)]
pub struct UserDetailsAuthenticator {
    service: Arc<dyn UserDetailsService>,
    password_encoder: Arc<dyn PasswordEncoder>,
    /// Checked when the username is unknown so both failures cost one hash
    user_not_found_hash: Arc<str>,
}

const USER_NOT_FOUND_PASSWORD: &str = "userNotFoundPassword";

impl UserDetailsAuthenticator {
    /// Create a new authenticator with the given service and encoder.
    pub fn new<S, E>(service: S, encoder: E) -> Self
    where
        S: UserDetailsService + 'static,
        E: PasswordEncoder + 'static,
    {
        let user_not_found_hash = encoder.encode(USER_NOT_FOUND_PASSWORD).unwrap_or_else(|e| {
            log::warn!("Unable to encode the user-not-found password: {}", e);
            String::new()
        });

        UserDetailsAuthenticator {
            service: Arc::new(service),
            password_encoder: Arc::new(encoder),
            user_not_found_hash: user_not_found_hash.into(),
        }
    }

    /// Authenticate a user with username and password.
    ///
    /// Unknown users and wrong passwords yield different errors here, but
    /// [`Authenticator::get_user`] folds both into "anonymous". Either way
    /// exactly one password comparison runs.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserDetailsError> {
        let user = self.service.load_user_by_username(username).await?;

        let encoded: Arc<str> = match &user {
            Some(user) => Arc::from(user.get_password()),
            None => Arc::clone(&self.user_not_found_hash),
        };
        let password_matches = self.verify(password, encoded).await?;

        let user = user.ok_or(UserDetailsError::NotFound)?;
        if !password_matches {
            return Err(UserDetailsError::InvalidCredentials);
        }

        if !user.is_usable() {
            return Err(UserDetailsError::AccountDisabled);
        }

        Ok(user)
    }

    /// Runs the comparison on the blocking pool; hashing would stall the worker.
    async fn verify(&self, raw_password: &str, encoded: Arc<str>) -> Result<bool, UserDetailsError> {
        let encoder = Arc::clone(&self.password_encoder);
        let raw_password = raw_password.to_string();

        web::block(move || encoder.matches(&raw_password, &encoded))
            .await
            .map_err(|e| UserDetailsError::StorageError(format!("password check aborted: {}", e)))
    }
}

impl Authenticator for UserDetailsAuthenticator {
    fn get_user(&self, req: &ServiceRequest) -> LocalBoxFuture<'static, Result<Option<User>, AuthError>> {
        let Some(credentials) = extract_basic_auth(req) else {
            return Box::pin(ready(Ok(None)));
        };

        let authenticator = self.clone();
        Box::pin(async move {
            match authenticator
                .authenticate(&credentials.username, &credentials.password)
                .await
            {
                Ok(user) => {
                    log::debug!("Authenticated user '{}'", user.get_username());
                    Ok(Some(user))
                }
                Err(UserDetailsError::StorageError(e)) => {
                    log::error!("User lookup failed: {}", e);
                    Err(AuthError::InternalError)
                }
                Err(e) => {
                    log::debug!(
                        "Basic authentication failed for '{}': {}",
                        credentials.username,
                        e
                    );
                    Ok(None)
                }
            }
        })
    }
}
