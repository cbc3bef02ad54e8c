use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::auth::services::{TokenAlgorithm, TokenExpiration};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub auth: AuthConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
  /// HMAC signing secret for session tokens
  pub secret: String,
  /// Signing algorithm, one of HS256 | HS384 | HS512
  pub algorithm: TokenAlgorithm,
  /// Token lifetime, one of 1d | 7d | 14d | 30d
  pub expiration: TokenExpiration,
  /// Name of the session cookie
  pub cookie_name: String,
  /// Optional cookie domain attribute
  #[serde(default)]
  pub cookie_domain: Option<String>,
  /// Identifier of the signing key, emitted in the token header
  pub key_id: String,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with HUDDLE_ prefix
  ///
  /// Environment variables use double underscores as section separators:
  /// - `HUDDLE_SERVER__HOST=0.0.0.0`
  /// - `HUDDLE_SERVER__PORT=8080`
  /// - `HUDDLE_AUTH__SECRET=...`
  /// - `HUDDLE_AUTH__EXPIRATION=7d`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if required files or values are missing, or if
  /// a value falls outside its allow-list (algorithm, expiration).
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("HUDDLE")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
