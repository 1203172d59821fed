//! Security middleware for Actix Web.
//!
//! # Spring Equivalent
//! `SecurityFilterChain` / `FilterChainProxy`

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::security::config::{Authenticator, Authorizer};

/// Security middleware factory.
///
/// # Spring Equivalent
/// `SecurityFilterChain`
///
/// The authenticator and authorizer are built once per worker from the
/// given factories, so they may capture shared handles such as a pool.
///
/// # Example
/// ```ignore
/// let pool = pool.clone();
/// App::new().wrap(
///     SecurityTransform::new()
///         .config_authenticator(move || authenticator(pool.clone()))
///         .config_authorizer(authorizer)
/// )
/// ```
pub struct SecurityTransform<Auth, Autho> {
    authenticator: Option<Rc<dyn Fn() -> Auth>>,
    authorizer: Option<Rc<dyn Fn() -> Autho>>,
}

impl<Auth, Autho> SecurityTransform<Auth, Autho> {
    pub fn new() -> Self {
        SecurityTransform {
            authorizer: None,
            authenticator: None,
        }
    }

    pub fn config_authenticator<F>(mut self, authenticator: F) -> Self
    where
        F: Fn() -> Auth + 'static,
    {
        self.authenticator = Some(Rc::new(authenticator));
        self
    }

    pub fn config_authorizer<F>(mut self, authorizer: F) -> Self
    where
        F: Fn() -> Autho + 'static,
    {
        self.authorizer = Some(Rc::new(authorizer));
        self
    }
}

impl<Auth, Autho> Default for SecurityTransform<Auth, Autho> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B, Auth, Autho> Transform<S, ServiceRequest> for SecurityTransform<Auth, Autho>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    Auth: Authenticator + 'static,
    Autho: Authorizer<B> + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SecurityService<Auth, Autho, S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let authenticator = self.authenticator.as_ref().map(|f| f());
        let authorizer = self.authorizer.as_ref().map(|f| Rc::new(f()));

        ok(SecurityService {
            authenticator,
            authorizer,
            service: Rc::new(service),
        })
    }
}

/// Security middleware service.
///
/// # Spring Equivalent
/// `FilterChainProxy`
pub struct SecurityService<Auth, Autho, S> {
    authenticator: Option<Auth>,
    authorizer: Option<Rc<Autho>>,
    service: Rc<S>,
}

impl<Auth, Autho, S, B> Service<ServiceRequest> for SecurityService<Auth, Autho, S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    Auth: Authenticator,
    Autho: Authorizer<B> + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorizer = self.authorizer.clone();

        // Step 1: Authenticate - start the credential lookup for this request
        let authentication = self
            .authenticator
            .as_ref()
            .map(|auth| auth.get_user(&req));

        Box::pin(async move {
            let user = match authentication {
                Some(lookup) => match lookup.await {
                    Ok(user) => user,
                    // Lookup failed (e.g. database down): terminate this request
                    Err(e) => return Ok(req.error_response(e).map_into_right_body()),
                },
                None => None,
            };

            // Step 2: Store user in request extensions (if authenticated)
            // This makes the user available to handlers via AuthenticatedUser extractor
            if let Some(ref u) = user {
                req.extensions_mut().insert(u.clone());
            }

            let next = move |req: ServiceRequest| -> LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>> {
                Box::pin(service.call(req))
            };

            // Step 3: Process authorization
            match authorizer {
                Some(authorizer) => authorizer.process(req, user.as_ref(), next).await,
                None => {
                    let res = next(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}
