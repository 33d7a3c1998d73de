// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP identity directory client.
//!
//! Talks to a user-attribute API of the form:
//! - `GET  {base}/users/{subject}` → `{"id": "...", "attributes": {"active_seasons": "<json>"}}`
//! - `PUT  {base}/users/{subject}/attributes/active_seasons` ← `{"value": "<json>"}`

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use fairplay_kudos_core::{decode_active_seasons, encode_active_seasons, ActiveSeason};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, trace};

use crate::directory::{IdentityDirectory, IdentityUser, ACTIVE_SEASONS_ATTRIBUTE};
use crate::error::IdentityError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`IdentityDirectory`] backed by a remote user-attribute API.
#[derive(Debug, Clone)]
pub struct HttpIdentityDirectory {
	http_client: Client,
	base_url: Url,
	api_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
	id: String,
	#[serde(default)]
	attributes: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct AttributeUpdate<'a> {
	value: &'a str,
}

impl HttpIdentityDirectory {
	/// Create a client for the API rooted at `base_url`.
	///
	/// # Errors
	/// Returns [`IdentityError::Configuration`] if `base_url` cannot be used
	/// as a base for path segments.
	pub fn new(base_url: &str) -> Result<Self, IdentityError> {
		Self::with_timeout(base_url, DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, IdentityError> {
		let base_url = Url::parse(base_url)
			.map_err(|e| IdentityError::Configuration(format!("invalid base URL '{base_url}': {e}")))?;
		if base_url.cannot_be_a_base() {
			return Err(IdentityError::Configuration(format!(
				"base URL '{base_url}' cannot have path segments"
			)));
		}

		let http_client = Client::builder()
			.user_agent(concat!("fairplay/", env!("CARGO_PKG_VERSION")))
			.timeout(timeout)
			.build()?;

		Ok(Self {
			http_client,
			base_url,
			api_token: None,
		})
	}

	/// Send `Authorization: Bearer <token>` on every request.
	pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
		self.api_token = Some(token.into());
		self
	}

	fn user_url(&self, subject: &str, suffix: &[&str]) -> Result<Url, IdentityError> {
		let mut url = self.base_url.clone();
		url
			.path_segments_mut()
			.map_err(|_| IdentityError::Configuration("base URL cannot have path segments".to_string()))?
			.pop_if_empty()
			.push("users")
			.push(subject)
			.extend(suffix);
		Ok(url)
	}

	fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match &self.api_token {
			Some(token) => request.bearer_auth(token),
			None => request,
		}
	}

	async fn check_status(subject: &str, response: Response) -> Result<Response, IdentityError> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		let status_code = status.as_u16();
		match status_code {
			401 | 403 => {
				error!(status = status_code, "identity provider rejected credentials");
				Err(IdentityError::Unauthorized)
			}
			404 => Err(IdentityError::NotFound(subject.to_string())),
			_ => {
				let body = response.text().await.unwrap_or_default();
				error!(status = status_code, body = %body, "identity provider error");
				Err(IdentityError::Api {
					status: status_code,
					message: body,
				})
			}
		}
	}
}

fn map_send_error(e: reqwest::Error) -> IdentityError {
	if e.is_timeout() {
		error!("identity request timed out");
		return IdentityError::Timeout;
	}
	error!(error = %e, "network error during identity request");
	IdentityError::Network(e)
}

#[async_trait]
impl IdentityDirectory for HttpIdentityDirectory {
	#[instrument(skip(self), fields(subject = %subject, league = %league, season = %season))]
	async fn fetch_user_by_season_membership(
		&self,
		subject: &str,
		league: &str,
		season: &str,
	) -> Result<IdentityUser, IdentityError> {
		let url = self.user_url(subject, &[])?;
		debug!(url = %url, "fetching identity");

		let response = self
			.authorize(self.http_client.get(url))
			.send()
			.await
			.map_err(map_send_error)?;
		let response = Self::check_status(subject, response).await?;

		let body = response.text().await.map_err(map_send_error)?;
		trace!(body = %body, "identity response body");

		let user: UserResponse = serde_json::from_str(&body)
			.map_err(|e| IdentityError::InvalidResponse(format!("JSON parse error: {e}")))?;

		let blob = user
			.attributes
			.get(ACTIVE_SEASONS_ATTRIBUTE)
			.map(String::as_str)
			.unwrap_or_default();
		let active_seasons = decode_active_seasons(blob)
			.map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;

		debug!(seasons = active_seasons.len(), "identity fetched");
		Ok(IdentityUser {
			subject: user.id,
			active_seasons,
		})
	}

	#[instrument(skip(self, active_seasons), fields(subject = %subject, seasons = active_seasons.len()))]
	async fn rewrite_user_attribute_blob(
		&self,
		subject: &str,
		active_seasons: &[ActiveSeason],
	) -> Result<(), IdentityError> {
		let blob = encode_active_seasons(active_seasons)
			.map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
		let url = self.user_url(subject, &["attributes", ACTIVE_SEASONS_ATTRIBUTE])?;

		let response = self
			.authorize(self.http_client.put(url))
			.json(&AttributeUpdate { value: &blob })
			.send()
			.await
			.map_err(map_send_error)?;
		Self::check_status(subject, response).await?;

		debug!("active seasons rewritten");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_url_escapes_subject() {
		let directory = HttpIdentityDirectory::new("https://id.example.com/api/").unwrap();
		let url = directory.user_url("team/a b", &[]).unwrap();
		assert_eq!(url.as_str(), "https://id.example.com/api/users/team%2Fa%20b");
	}

	#[test]
	fn test_attribute_url() {
		let directory = HttpIdentityDirectory::new("https://id.example.com").unwrap();
		let url = directory
			.user_url("sub-1", &["attributes", ACTIVE_SEASONS_ATTRIBUTE])
			.unwrap();
		assert_eq!(
			url.as_str(),
			"https://id.example.com/users/sub-1/attributes/active_seasons"
		);
	}

	#[test]
	fn test_rejects_unusable_base_url() {
		assert!(matches!(
			HttpIdentityDirectory::new("not a url"),
			Err(IdentityError::Configuration(_))
		));
		assert!(matches!(
			HttpIdentityDirectory::new("mailto:someone@example.com"),
			Err(IdentityError::Configuration(_))
		));
	}

	#[test]
	fn test_with_api_token() {
		let directory = HttpIdentityDirectory::new("https://id.example.com")
			.unwrap()
			.with_api_token("secret");
		assert_eq!(directory.api_token.as_deref(), Some("secret"));
	}
}
