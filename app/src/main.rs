//! Basic-auth demo server.
//!
//! Initializes the user table, seeds the configured user and serves
//! `/secured` (HTTP Basic) plus a public greeting on every other path.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use anyhow::Context;

use basic_auth_db_app::{config, configure_app, security};
use basic_auth_db_core::store;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = config::load()?;

    let pool = store::connect(&config.datasource)
        .await
        .with_context(|| format!("unable to connect to {}", config.datasource.url))?;

    let encoder = security::password_encoder(&config.security);
    store::initialize(&pool, &config.datasource, &config.seed, encoder.as_ref())
        .await
        .context("unable to initialize the user store")?;

    let address = (config.http.address.clone(), config.http.port);
    log::info!("Starting server at http://{}:{}", address.0, address.1);
    log::info!(
        "Try: curl -u {}:<password> http://{}:{}/secured",
        config.seed.username,
        address.0,
        address.1
    );

    let security_settings = config.security.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure_app(
                pool.clone(),
                encoder.clone(),
                security_settings.clone(),
            ))
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
