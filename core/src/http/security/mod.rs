//! Security module providing authentication and authorization.
//!
//! # Spring Equivalent
//! `org.springframework.security` package
//!
//! # Module Structure
//!
//! - `ant_matcher` - Ant-style URL pattern matching
//! - `authenticator` - HTTP Basic authentication against a `UserDetailsService`
//! - `authorizer` - Ordered URL rules (RequestMatcherAuthorizer)
//! - `config` - Core traits (Authenticator, Authorizer)
//! - `crypto` - Password encoding (BCrypt, Argon2, NoOp)
//! - `extractor` - Actix Web extractor (AuthenticatedUser)
//! - `http_basic` - HTTP Basic header parsing and challenge
//! - `manager` - Factory methods (AuthenticationManager, AuthorizationManager)
//! - `middleware` - Security middleware (SecurityTransform)
//! - `user` - User record
//! - `user_details` - User lookup trait
//!
//! # Feature Flags
//! - `bcrypt`: Enables `BCryptPasswordEncoder`
//! - `argon2`: Enables `Argon2PasswordEncoder`

// Re-exports for convenience
pub use authenticator::UserDetailsAuthenticator;
pub use authorizer::{Access, RequestMatcherAuthorizer};
pub use config::{Authenticator, Authorizer};
#[cfg(feature = "argon2")]
pub use crypto::Argon2PasswordEncoder;
#[cfg(feature = "bcrypt")]
pub use crypto::BCryptPasswordEncoder;
pub use crypto::{EncodeError, NoOpPasswordEncoder, PasswordEncoder};
pub use extractor::AuthenticatedUser;
pub use http_basic::{BasicCredentials, HttpBasicConfig};
pub use manager::{AuthenticationManager, AuthorizationManager};
pub use user::User;
pub use user_details::{UserDetailsError, UserDetailsService};

// Internal modules (private implementation details)
mod config;
mod extractor;
mod user;

// Public modules
pub mod ant_matcher;
pub mod authenticator;
pub mod authorizer;
pub mod crypto;
pub mod http_basic;
pub mod manager;
pub mod middleware;
pub mod user_details;
