//! HTTP service with one public route and one route behind HTTP Basic
//! authentication backed by a SQLite user table.

pub mod config;
pub mod handlers;
pub mod security;

use std::sync::Arc;

use actix_web::web;

use basic_auth_db_core::http::security::middleware::SecurityTransform;
use basic_auth_db_core::http::security::PasswordEncoder;
use basic_auth_db_core::store::SqlitePool;

use crate::config::SecuritySettings;

/// Registers the security middleware and both routes.
///
/// Shared by the server and the integration tests.
pub fn configure_app(
    pool: SqlitePool,
    encoder: Arc<dyn PasswordEncoder>,
    settings: SecuritySettings,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("")
                .wrap(
                    SecurityTransform::new()
                        .config_authenticator(move || {
                            security::authenticator(pool.clone(), Arc::clone(&encoder))
                        })
                        .config_authorizer(move || security::authorizer(&settings)),
                )
                .service(handlers::secured::secured)
                .route("/{tail:.*}", web::get().to(handlers::public::hello)),
        );
    }
}
