//! Relational user store.
//!
//! # Spring Equivalent
//! JPA `User` entity, `UserRepository` and `data.sql` initialization
//!
//! One SQLite table, `users`, with a unique `username` column. The schema and
//! the seed row are created at startup by [`seed::initialize`].

use serde::{Deserialize, Serialize};

pub use sqlx::SqlitePool;

pub use connection::connect;
pub use details::SqlUserDetailsService;
pub use repository::{NewUser, UserRepository};
pub use schema::create_schema;
pub use seed::{initialize, SeedUser};

pub mod connection;
pub mod details;
pub mod repository;
pub mod schema;
pub mod seed;

/// Data source settings.
///
/// # Spring Equivalent
/// `spring.datasource.*` and `spring.jpa.defer-datasource-initialization`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub url: String,
    pub max_connections: u32,
    /// Run the seed after schema creation instead of before it.
    pub defer_initialization: bool,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://users.db".to_string(),
            max_connections: 5,
            defer_initialization: true,
        }
    }
}

impl DataSourceConfig {
    /// Private in-memory database, handy for tests.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            defer_initialization: true,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}
