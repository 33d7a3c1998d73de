// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the Fairplay server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`FAIRPLAY_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use fairplay_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod secret;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use secret::{load_secret_env, Secret, SecretString};
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub identity: IdentityConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`FAIRPLAY_SERVER_*`)
/// 2. Config file (`/etc/fairplay/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let database = layer.database.unwrap_or_default().finalize();
	let identity = layer.identity.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&http, &identity)?;

	info!(
		host = %http.host,
		port = http.port,
		database = %database.url,
		identity_provider = %identity.provider,
		identity_token_configured = identity.api_token.is_some(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		database,
		identity,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(http: &HttpConfig, identity: &IdentityConfig) -> Result<(), ConfigError> {
	if identity.provider == IdentityProvider::Http && identity.base_url.is_none() {
		return Err(ConfigError::Validation(
			"identity.provider = \"http\" requires identity.base_url \
			 (FAIRPLAY_SERVER_IDENTITY_BASE_URL)"
				.to_string(),
		));
	}

	if identity.timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"identity.timeout_secs must be greater than zero".to_string(),
		));
	}

	if http.request_timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"http.request_timeout_secs must be greater than zero".to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	struct StaticSource(Precedence, ServerConfigLayer);

	impl ConfigSource for StaticSource {
		fn name(&self) -> &'static str {
			"static"
		}

		fn precedence(&self) -> Precedence {
			self.0
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok(self.1.clone())
		}
	}

	fn port_layer(port: u16) -> ServerConfigLayer {
		ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(port),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(StaticSource(Precedence::Environment, port_layer(3))),
			Box::new(StaticSource(Precedence::Defaults, port_layer(1))),
			Box::new(StaticSource(Precedence::ConfigFile, port_layer(2))),
		])
		.unwrap();
		assert_eq!(config.http.port, 3);
	}

	#[test]
	fn test_file_overrides_defaults() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		std::io::Write::write_all(
			&mut file,
			b"[http]\nhost = \"127.0.0.1\"\n\n[database]\nurl = \"sqlite:/tmp/k.db\"\n",
		)
		.unwrap();

		let config = load_from_sources(vec![
			Box::new(DefaultsSource),
			Box::new(TomlSource::new(file.path())),
		])
		.unwrap();
		assert_eq!(config.socket_addr(), "127.0.0.1:8080");
		assert_eq!(config.database.url, "sqlite:/tmp/k.db");
		assert_eq!(config.identity.provider, IdentityProvider::Memory);
	}

	#[test]
	fn test_http_provider_requires_base_url() {
		let identity = IdentityConfig {
			provider: IdentityProvider::Http,
			base_url: None,
			..Default::default()
		};
		let result = validate_config(&HttpConfig::default(), &identity);
		assert!(result.unwrap_err().to_string().contains("base_url"));

		let identity = IdentityConfig {
			provider: IdentityProvider::Http,
			base_url: Some("https://id.example.com".to_string()),
			..Default::default()
		};
		assert!(validate_config(&HttpConfig::default(), &identity).is_ok());
	}

	#[test]
	fn test_zero_timeouts_rejected() {
		let identity = IdentityConfig {
			timeout_secs: 0,
			..Default::default()
		};
		assert!(validate_config(&HttpConfig::default(), &identity).is_err());

		let http = HttpConfig {
			request_timeout_secs: 0,
			..Default::default()
		};
		assert!(validate_config(&http, &IdentityConfig::default()).is_err());
	}

	#[test]
	fn test_socket_addr() {
		let config = ServerConfig {
			http: HttpConfig {
				host: "127.0.0.1".to_string(),
				port: 9000,
				..Default::default()
			},
			..Default::default()
		};
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}
}
