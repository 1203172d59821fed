//! Security wiring for the application.
//!
//! # Spring Security Equivalent
//! ```java
//! @Bean
//! public SecurityFilterChain filterChain(HttpSecurity http) throws Exception {
//!     return http
//!         .authorizeHttpRequests(auth -> auth
//!             .requestMatchers("/secured").authenticated()
//!             .requestMatchers("/**").permitAll())
//!         .httpBasic(Customizer.withDefaults())
//!         .build();
//! }
//! ```

use std::sync::Arc;

use basic_auth_db_core::http::security::{
    Access, Argon2PasswordEncoder, AuthenticationManager, AuthorizationManager,
    BCryptPasswordEncoder, HttpBasicConfig, PasswordEncoder, RequestMatcherAuthorizer,
    UserDetailsAuthenticator,
};
use basic_auth_db_core::store::{SqlUserDetailsService, SqlitePool};

use crate::config::{PasswordEncoderKind, SecuritySettings};

/// The encoder shared by seeding and credential verification.
pub fn password_encoder(settings: &SecuritySettings) -> Arc<dyn PasswordEncoder> {
    match settings.password_encoder {
        PasswordEncoderKind::Bcrypt => Arc::new(BCryptPasswordEncoder::with_cost(settings.bcrypt_cost)),
        PasswordEncoderKind::Argon2 => Arc::new(Argon2PasswordEncoder::new()),
    }
}

/// Verifies HTTP Basic credentials against the `users` table.
pub fn authenticator(pool: SqlitePool, encoder: Arc<dyn PasswordEncoder>) -> UserDetailsAuthenticator {
    AuthenticationManager::user_details_authentication(SqlUserDetailsService::new(pool), encoder)
}

/// `/secured` needs an authenticated user, everything else is public.
///
/// Rules are checked in order and the first match wins.
pub fn authorizer(settings: &SecuritySettings) -> RequestMatcherAuthorizer {
    AuthorizationManager::request_matcher()
        .add_matcher("/secured", Access::Authenticated)
        .add_matcher("/**", Access::PermitAll)
        .http_basic(HttpBasicConfig::new().realm(&settings.realm))
}
