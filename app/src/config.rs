//! Application configuration.
//!
//! # Spring Equivalent
//! `application.properties`
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `APP__SECTION__KEY` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use basic_auth_db_core::store::{DataSourceConfig, SeedUser};

const DEFAULT_CONFIG_FILES: &[&str] = &["app.toml", "config/app.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub datasource: DataSourceConfig,
    pub security: SecuritySettings,
    pub seed: SeedUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Which hashing scheme stored passwords use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordEncoderKind {
    #[default]
    Bcrypt,
    Argon2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    /// Realm announced in the `WWW-Authenticate` challenge
    pub realm: String,
    pub password_encoder: PasswordEncoderKind,
    pub bcrypt_cost: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            realm: "Realm".to_string(),
            password_encoder: PasswordEncoderKind::Bcrypt,
            bcrypt_cost: 10,
        }
    }
}

/// Load the configuration for the running process.
///
/// The file named by `APP_CONFIG` wins; otherwise the first of
/// `app.toml` and `config/app.toml` found in the working directory is used.
pub fn load() -> anyhow::Result<AppConfig> {
    let file = match std::env::var("APP_CONFIG") {
        Ok(path) => Some(PathBuf::from(path)),
        Err(_) => std::env::current_dir().ok().and_then(|cwd| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(|candidate| cwd.join(candidate))
                .find(|path| path.exists())
        }),
    };

    build(file.as_deref())
}

/// Build the configuration from defaults, an optional file and the environment.
pub fn build(file: Option<&Path>) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .add_source(config::Config::try_from(&defaults).context("invalid default configuration")?);

    match file {
        Some(path) => {
            log::debug!("loading configuration file {}", path.display());
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }
        None => {
            log::debug!("no configuration file found, relying on defaults and environment overrides")
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("APP")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .context("unable to build configuration")?
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    log::debug!(
        "loaded configuration: http={:?} datasource={:?} security={:?}",
        config.http,
        config.datasource,
        config.security
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = build(None).unwrap();

        assert_eq!(config.http.address, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.datasource.url, "sqlite://users.db");
        assert!(config.datasource.defer_initialization);
        assert_eq!(config.security.realm, "Realm");
        assert_eq!(config.security.password_encoder, PasswordEncoderKind::Bcrypt);
        assert_eq!(config.seed.username, "admin");
        assert_eq!(config.seed.password, "123");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[http]
port = 9090

[datasource]
url = "sqlite::memory:"
defer_initialization = false

[security]
realm = "Users"
password_encoder = "argon2"

[seed]
first_name = "Jane"
"#
        )
        .unwrap();

        let config = build(Some(file.path())).unwrap();

        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.address, "127.0.0.1");
        assert_eq!(config.datasource.url, "sqlite::memory:");
        assert!(!config.datasource.defer_initialization);
        assert_eq!(config.datasource.max_connections, 5);
        assert_eq!(config.security.realm, "Users");
        assert_eq!(config.security.password_encoder, PasswordEncoderKind::Argon2);
        assert_eq!(config.seed.first_name, "Jane");
        assert_eq!(config.seed.last_name, "Doe");
    }

    #[test]
    fn test_unknown_encoder_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[security]\npassword_encoder = \"md5\"\n").unwrap();

        assert!(build(Some(file.path())).is_err());
    }
}
