//! Startup data initialization.
//!
//! # Spring Equivalent
//! `data.sql` executed by the data source initializer, ordered against schema
//! creation by `spring.jpa.defer-datasource-initialization`

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::repository::{NewUser, UserRepository};
use super::schema::create_schema;
use super::DataSourceConfig;
use crate::http::security::{PasswordEncoder, UserDetailsError};

/// The user inserted before the application serves traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Raw password, encoded with the configured encoder when seeding
    pub password: String,
}

impl Default for SeedUser {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            username: "admin".to_string(),
            password: "123".to_string(),
        }
    }
}

/// Create the schema and insert the seed user, in the configured order.
///
/// With `defer_initialization` the seed runs once the table exists. Without
/// it the seed runs first, which only works against an existing schema.
/// A seed user that is already present is left untouched.
pub async fn initialize(
    pool: &SqlitePool,
    config: &DataSourceConfig,
    seed: &SeedUser,
    encoder: &dyn PasswordEncoder,
) -> Result<(), UserDetailsError> {
    if config.defer_initialization {
        create_schema(pool).await?;
        seed_user(pool, seed, encoder).await
    } else {
        seed_user(pool, seed, encoder).await?;
        create_schema(pool).await?;
        Ok(())
    }
}

async fn seed_user(
    pool: &SqlitePool,
    seed: &SeedUser,
    encoder: &dyn PasswordEncoder,
) -> Result<(), UserDetailsError> {
    let password = encoder
        .encode(&seed.password)
        .map_err(|e| UserDetailsError::StorageError(e.to_string()))?;

    let user = NewUser {
        first_name: &seed.first_name,
        last_name: &seed.last_name,
        username: &seed.username,
        password: &password,
    };

    match UserRepository::new(pool.clone()).save(&user).await {
        Ok(saved) => {
            log::info!("Seeded user '{}' with id {}", saved.get_username(), saved.get_id());
            Ok(())
        }
        Err(UserDetailsError::AlreadyExists) => {
            log::warn!("User {} already exists, skipping", seed.username);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::security::NoOpPasswordEncoder;
    use crate::store::connect;

    #[tokio::test]
    async fn test_deferred_initialization_seeds_after_schema() {
        let config = DataSourceConfig::in_memory();
        let pool = connect(&config).await.unwrap();

        initialize(&pool, &config, &SeedUser::default(), &NoOpPasswordEncoder)
            .await
            .unwrap();

        let repo = UserRepository::new(pool);
        let admin = repo.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.get_password(), "123");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_initialization_is_idempotent() {
        let config = DataSourceConfig::in_memory();
        let pool = connect(&config).await.unwrap();

        for _ in 0..2 {
            initialize(&pool, &config, &SeedUser::default(), &NoOpPasswordEncoder)
                .await
                .unwrap();
        }

        assert_eq!(UserRepository::new(pool).count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_eager_seed_fails_without_schema() {
        let config = DataSourceConfig {
            defer_initialization: false,
            ..DataSourceConfig::in_memory()
        };
        let pool = connect(&config).await.unwrap();

        let result = initialize(&pool, &config, &SeedUser::default(), &NoOpPasswordEncoder).await;
        assert!(matches!(result, Err(UserDetailsError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_eager_seed_works_with_existing_schema() {
        let config = DataSourceConfig {
            defer_initialization: false,
            ..DataSourceConfig::in_memory()
        };
        let pool = connect(&config).await.unwrap();
        create_schema(&pool).await.unwrap();

        initialize(&pool, &config, &SeedUser::default(), &NoOpPasswordEncoder)
            .await
            .unwrap();
        assert_eq!(UserRepository::new(pool).count().await.unwrap(), 1);
    }

    #[cfg(feature = "bcrypt")]
    #[tokio::test]
    async fn test_seed_password_is_hashed() {
        use crate::http::security::BCryptPasswordEncoder;

        let config = DataSourceConfig::in_memory();
        let pool = connect(&config).await.unwrap();
        let encoder = BCryptPasswordEncoder::with_cost(4);

        initialize(&pool, &config, &SeedUser::default(), &encoder)
            .await
            .unwrap();

        let admin = UserRepository::new(pool)
            .find_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(admin.get_password(), "123");
        assert!(encoder.matches("123", admin.get_password()));
    }
}
