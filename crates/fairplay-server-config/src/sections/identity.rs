// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity provider configuration.
//!
//! The API token is only read from the environment
//! (`FAIRPLAY_SERVER_IDENTITY_API_TOKEN` or `..._FILE`), never from TOML.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::secret::SecretString;

fn default_timeout_secs() -> u64 {
	10
}

/// Which identity directory backs the kudos service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProvider {
	/// Process-local directory, for development.
	#[default]
	Memory,
	/// Remote user-attribute API.
	Http,
}

impl fmt::Display for IdentityProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IdentityProvider::Memory => write!(f, "memory"),
			IdentityProvider::Http => write!(f, "http"),
		}
	}
}

impl FromStr for IdentityProvider {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"memory" => Ok(IdentityProvider::Memory),
			"http" => Ok(IdentityProvider::Http),
			other => Err(format!("unknown identity provider '{other}' (expected memory or http)")),
		}
	}
}

/// Identity configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct IdentityConfig {
	pub provider: IdentityProvider,
	pub base_url: Option<String>,
	pub api_token: Option<SecretString>,
	pub timeout_secs: u64,
	/// JSON file of `{subject: [active season, ...]}` loaded into the memory provider.
	pub seed_file: Option<String>,
}

impl Default for IdentityConfig {
	fn default() -> Self {
		IdentityConfigLayer::default().finalize()
	}
}

/// Identity configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfigLayer {
	#[serde(default)]
	pub provider: Option<IdentityProvider>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(skip)]
	pub api_token: Option<SecretString>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub seed_file: Option<String>,
}

impl IdentityConfigLayer {
	pub fn merge(&mut self, other: IdentityConfigLayer) {
		if other.provider.is_some() {
			self.provider = other.provider;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.api_token.is_some() {
			self.api_token = other.api_token;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.seed_file.is_some() {
			self.seed_file = other.seed_file;
		}
	}

	pub fn finalize(self) -> IdentityConfig {
		IdentityConfig {
			provider: self.provider.unwrap_or_default(),
			base_url: self.base_url,
			api_token: self.api_token,
			timeout_secs: self.timeout_secs.unwrap_or_else(default_timeout_secs),
			seed_file: self.seed_file,
		}
	}
}
