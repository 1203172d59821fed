//! # basic-auth-db core
//!
//! HTTP Basic authentication for Actix Web backed by a relational user store.
//!
//! - [`http::security`] - Authentication, authorization, and middleware
//! - [`http::error`] - Error types
//! - [`store`] - SQLite user table, repository and seeding

pub mod http;
pub mod store;
