//! Common test utilities.
//!
//! Every test app runs against its own in-memory database seeded with the
//! default user (admin/123, John Doe).

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{test, App};
use base64::prelude::*;

use basic_auth_db_app::config::SecuritySettings;
use basic_auth_db_app::configure_app;
use basic_auth_db_core::http::security::{BCryptPasswordEncoder, PasswordEncoder};
use basic_auth_db_core::store::{self, DataSourceConfig, SeedUser, SqlitePool};

/// Low bcrypt cost to keep the suite fast.
pub fn test_encoder() -> Arc<dyn PasswordEncoder> {
    Arc::new(BCryptPasswordEncoder::with_cost(4))
}

/// Opens an in-memory database holding the schema and the seed user.
pub async fn seeded_pool() -> SqlitePool {
    let config = DataSourceConfig::in_memory();
    let pool = store::connect(&config).await.unwrap();
    store::initialize(&pool, &config, &SeedUser::default(), test_encoder().as_ref())
        .await
        .unwrap();
    pool
}

pub async fn create_test_app_with_pool(
    pool: SqlitePool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(App::new().configure(configure_app(
        pool,
        test_encoder(),
        SecuritySettings::default(),
    )))
    .await
}

pub async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    create_test_app_with_pool(seeded_pool().await).await
}

/// Helper function to create Basic Auth header value.
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}
