//! Extractors for accessing the security context in handlers.
//!
//! # Spring Equivalent
//! `@AuthenticationPrincipal` annotation

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::error::AuthError;
use crate::http::security::User;

/// Extractor for the authenticated user.
///
/// # Spring Equivalent
/// `@AuthenticationPrincipal User user` parameter
///
/// # Usage
/// ```ignore
/// use basic_auth_db_core::http::security::AuthenticatedUser;
///
/// async fn handler(user: AuthenticatedUser) -> impl Responder {
///     format!("Hello {} {}", user.get_first_name(), user.get_last_name())
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` if the security middleware stored no user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(User);

impl AuthenticatedUser {
    /// Returns the inner User.
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<User>().cloned() {
            Some(user) => ready(Ok(AuthenticatedUser(user))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_stored_user() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(User::new(1, "John", "Doe", "admin", "hash"));

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.get_last_name(), "Doe");
        assert_eq!(user.into_inner().get_id(), 1);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::extract(&req).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }
}
