//! Request Matcher based Authorization.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.web.access.intercept.RequestMatcherDelegatingAuthorizationManager`

use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{http, Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::http::security::ant_matcher::AntMatcher;
use crate::http::security::config::Authorizer;
use crate::http::security::http_basic::HttpBasicConfig;
use crate::http::security::user::User;

/// URL pattern-based authorization.
///
/// # Spring Security Equivalent
/// `authorizeHttpRequests(auth -> auth.requestMatchers(..).authenticated().anyRequest().permitAll())`
///
/// Rules are evaluated in registration order and the first matching pattern
/// decides. Paths matching no rule are permitted.
///
/// # Example
/// ```
/// use basic_auth_db_core::http::security::authorizer::{Access, RequestMatcherAuthorizer};
///
/// let authorizer = RequestMatcherAuthorizer::new()
///     .add_matcher("/secured", Access::Authenticated)
///     .add_matcher("/**", Access::PermitAll);
///
/// assert_eq!(authorizer.matches("/secured"), Some(&Access::Authenticated));
/// assert_eq!(authorizer.matches("/anything"), Some(&Access::PermitAll));
/// ```
pub struct RequestMatcherAuthorizer {
    matchers: Vec<(AntMatcher, Access)>,
    http_basic: HttpBasicConfig,
}

impl RequestMatcherAuthorizer {
    /// Creates a new authorizer with no rules and the default Basic realm.
    pub fn new() -> Self {
        RequestMatcherAuthorizer {
            matchers: Vec::new(),
            http_basic: HttpBasicConfig::new(),
        }
    }

    /// Appends an Ant-style URL pattern with its access requirement.
    pub fn add_matcher(mut self, pattern: &str, access: Access) -> Self {
        self.matchers.push((AntMatcher::new(pattern), access));
        self
    }

    /// Sets the HTTP Basic challenge sent to unauthenticated requests.
    ///
    /// # Spring Security Equivalent
    /// `HttpSecurity.httpBasic(..)`
    pub fn http_basic(mut self, config: HttpBasicConfig) -> Self {
        self.http_basic = config;
        self
    }

    /// Returns the access rule of the first pattern matching `path`.
    pub fn matches(&self, path: &str) -> Option<&Access> {
        self.matchers
            .iter()
            .find(|(matcher, _)| matcher.matches(path))
            .map(|(_, access)| access)
    }

    /// Decides whether `user` may reach `path`.
    pub fn is_allowed(&self, path: &str, user: Option<&User>) -> bool {
        match self.matches(path) {
            Some(Access::Authenticated) => user.is_some(),
            Some(Access::PermitAll) | None => true,
        }
    }
}

impl Default for RequestMatcherAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: 'static> Authorizer<B> for RequestMatcherAuthorizer {
    fn process(
        &self,
        req: ServiceRequest,
        user: Option<&User>,
        next: impl FnOnce(ServiceRequest) -> LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>
            + 'static,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        if self.is_allowed(req.path(), user) {
            return Box::pin(async move {
                let res = next(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        // HTTP Basic Auth: Return 401 with WWW-Authenticate header
        log::debug!("Rejecting unauthenticated request to {}", req.path());
        let www_auth = self.http_basic.www_authenticate_header();
        Box::pin(async move {
            Ok(req.into_response(
                HttpResponse::Unauthorized()
                    .append_header((http::header::WWW_AUTHENTICATE, www_auth))
                    .finish()
                    .map_into_right_body(),
            ))
        })
    }
}

// =============================================================================
// Access Configuration
// =============================================================================

/// Access requirement attached to a URL pattern.
///
/// # Spring Security Equivalent
/// `AuthorizeHttpRequestsConfigurer.AuthorizedUrl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `permitAll()`: anonymous requests allowed
    PermitAll,
    /// `authenticated()`: a verified identity is required
    Authenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorizer() -> RequestMatcherAuthorizer {
        RequestMatcherAuthorizer::new()
            .add_matcher("/secured", Access::Authenticated)
            .add_matcher("/**", Access::PermitAll)
    }

    fn user() -> User {
        User::new(1, "John", "Doe", "admin", "hash")
    }

    #[test]
    fn test_first_match_wins() {
        let authorizer = authorizer();
        assert_eq!(authorizer.matches("/secured"), Some(&Access::Authenticated));
        assert_eq!(authorizer.matches("/"), Some(&Access::PermitAll));

        let reversed = RequestMatcherAuthorizer::new()
            .add_matcher("/**", Access::PermitAll)
            .add_matcher("/secured", Access::Authenticated);
        assert_eq!(reversed.matches("/secured"), Some(&Access::PermitAll));
    }

    #[test]
    fn test_secured_requires_user() {
        let authorizer = authorizer();
        assert!(!authorizer.is_allowed("/secured", None));
        assert!(authorizer.is_allowed("/secured", Some(&user())));
    }

    #[test]
    fn test_other_paths_permitted() {
        let authorizer = authorizer();
        for path in ["/", "/hello", "/secured/nested", "/SECURED"] {
            assert!(authorizer.is_allowed(path, None), "{} should be public", path);
        }
    }

    #[test]
    fn test_unmatched_path_permitted() {
        let authorizer = RequestMatcherAuthorizer::new().add_matcher("/secured", Access::Authenticated);
        assert_eq!(authorizer.matches("/public"), None);
        assert!(authorizer.is_allowed("/public", None));
    }
}
