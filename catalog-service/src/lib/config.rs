use std::env;
use std::time::Duration;

use auth::HashingCost;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for catalog-service.
///
/// Loaded once at startup; there is no runtime reload.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Argon2id work factor used when hashing new passwords.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl JwtConfig {
    /// Lifetime of every issued access token.
    pub fn token_validity(&self) -> chrono::Duration {
        chrono::Duration::hours(self.expiration_hours)
    }
}

impl PasswordConfig {
    pub fn cost(&self) -> HashingCost {
        HashingCost {
            memory_kib: self.memory_kib,
            iterations: self.iterations,
            parallelism: self.parallelism,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    const SAMPLE: &str = r#"
        [database]
        url = "postgresql://localhost/catalog"
        max_connections = 3
        acquire_timeout_secs = 2

        [server]
        http_port = 8080

        [jwt]
        secret = "a-secret"
        expiration_hours = 120

        [password]
        memory_kib = 4096
        iterations = 1
        parallelism = 1
    "#;

    fn sample() -> Config {
        ConfigBuilder::builder()
            .add_source(File::from_str(SAMPLE, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("Failed to parse sample configuration")
    }

    #[test]
    fn test_deserialize_sections() {
        let config = sample();

        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.database.acquire_timeout(), Duration::from_secs(2));
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.jwt.token_validity(), chrono::Duration::days(5));
        assert_eq!(
            config.password.cost(),
            HashingCost {
                memory_kib: 4096,
                iterations: 1,
                parallelism: 1,
            }
        );
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result: Result<Config, _> = ConfigBuilder::builder()
            .add_source(File::from_str("[server]\nhttp_port = 1", FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize());

        assert!(result.is_err());
    }
}
