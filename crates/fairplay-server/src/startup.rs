// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wiring from configuration to runtime components.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use fairplay_kudos_core::ActiveSeason;
use fairplay_server_config::{IdentityConfig, IdentityProvider};
use fairplay_server_identity::{
	HttpIdentityDirectory, IdentityDirectory, IdentityError, InMemoryIdentityDirectory,
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
	#[error("identity provider configuration: {0}")]
	Identity(#[from] IdentityError),

	#[error("failed to read identity seed file {path}: {source}")]
	SeedRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse identity seed file {path}: {source}")]
	SeedParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Build the identity directory selected by `config.provider`.
pub async fn build_identity_directory(
	config: &IdentityConfig,
) -> Result<Arc<dyn IdentityDirectory>, StartupError> {
	match config.provider {
		IdentityProvider::Http => {
			let base_url = config.base_url.as_deref().ok_or_else(|| {
				IdentityError::Configuration("identity.base_url is required".to_string())
			})?;
			let mut directory =
				HttpIdentityDirectory::with_timeout(base_url, Duration::from_secs(config.timeout_secs))?;
			if let Some(token) = &config.api_token {
				directory = directory.with_api_token(token.expose().clone());
			}
			info!(base_url = %base_url, "using HTTP identity directory");
			Ok(Arc::new(directory))
		}
		IdentityProvider::Memory => {
			let directory = InMemoryIdentityDirectory::new();
			if let Some(seed_file) = &config.seed_file {
				let path = PathBuf::from(seed_file);
				let content = tokio::fs::read_to_string(&path)
					.await
					.map_err(|source| StartupError::SeedRead {
						path: path.clone(),
						source,
					})?;
				let users: HashMap<String, Vec<ActiveSeason>> = serde_json::from_str(&content)
					.map_err(|source| StartupError::SeedParse {
						path: path.clone(),
						source,
					})?;
				let count = users.len();
				for (subject, seasons) in users {
					directory.insert_user(subject, seasons).await;
				}
				info!(path = %path.display(), users = count, "seeded in-memory identity directory");
			} else {
				info!("using empty in-memory identity directory");
			}
			Ok(Arc::new(directory))
		}
	}
}
