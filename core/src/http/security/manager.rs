use crate::http::security::authenticator::UserDetailsAuthenticator;
use crate::http::security::authorizer::RequestMatcherAuthorizer;
use crate::http::security::crypto::PasswordEncoder;
use crate::http::security::user_details::UserDetailsService;

pub struct AuthenticationManager {}

impl AuthenticationManager {
    /// `AuthenticationManagerBuilder.userDetailsService(..).passwordEncoder(..)`
    pub fn user_details_authentication<S, E>(service: S, encoder: E) -> UserDetailsAuthenticator
    where
        S: UserDetailsService + 'static,
        E: PasswordEncoder + 'static,
    {
        UserDetailsAuthenticator::new(service, encoder)
    }
}

pub struct AuthorizationManager {}

impl AuthorizationManager {
    pub fn request_matcher() -> RequestMatcherAuthorizer {
        RequestMatcherAuthorizer::new()
    }
}
