//! Configuration traits for authentication and authorization.
//!
//! # Spring Equivalent
//! `AuthenticationProvider` and `AccessDecisionManager` interfaces

use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::http::error::AuthError;
use crate::http::security::user::User;

/// Trait for extracting user identity from an HTTP request.
///
/// # Spring Equivalent
/// `AuthenticationProvider` / `UserDetailsService`
///
/// # Implementation Note
/// Credentials are read from the request synchronously; the returned future
/// owns everything it needs so the lookup can hit the database.
/// `Ok(None)` means anonymous, `Err` means the lookup itself failed.
pub trait Authenticator {
    /// Attempts to authenticate the request and returns the user if successful.
    fn get_user(&self, req: &ServiceRequest)
        -> LocalBoxFuture<'static, Result<Option<User>, AuthError>>;
}

/// Trait for deciding whether a request may proceed.
///
/// # Spring Equivalent
/// `AccessDecisionManager` / `AuthorizationManager`
///
/// The `process` method returns a boxed future that resolves to:
/// - `EitherBody::left()` when forwarding to the inner service
/// - `EitherBody::right()` for custom responses (401 challenge, forbidden, etc.)
pub trait Authorizer<B> {
    /// Processes the authorization decision.
    ///
    /// # Arguments
    /// * `req` - The incoming request
    /// * `user` - The authenticated user (if any)
    /// * `next` - Closure to call the next service in the chain
    fn process(
        &self,
        req: ServiceRequest,
        user: Option<&User>,
        next: impl FnOnce(ServiceRequest) -> LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>
            + 'static,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>>;
}
