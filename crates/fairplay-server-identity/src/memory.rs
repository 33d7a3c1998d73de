// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory identity directory for local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use fairplay_kudos_core::ActiveSeason;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::directory::{IdentityDirectory, IdentityUser};
use crate::error::IdentityError;

#[derive(Debug, Default)]
pub struct InMemoryIdentityDirectory {
	users: RwLock<HashMap<String, Vec<ActiveSeason>>>,
}

impl InMemoryIdentityDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create or replace an identity with the given seasons.
	pub async fn insert_user(&self, subject: impl Into<String>, active_seasons: Vec<ActiveSeason>) {
		self.users.write().await.insert(subject.into(), active_seasons);
	}

	pub async fn active_seasons(&self, subject: &str) -> Option<Vec<ActiveSeason>> {
		self.users.read().await.get(subject).cloned()
	}
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
	#[instrument(skip(self))]
	async fn fetch_user_by_season_membership(
		&self,
		subject: &str,
		_league: &str,
		_season: &str,
	) -> Result<IdentityUser, IdentityError> {
		let users = self.users.read().await;
		let active_seasons = users
			.get(subject)
			.cloned()
			.ok_or_else(|| IdentityError::NotFound(subject.to_string()))?;

		Ok(IdentityUser {
			subject: subject.to_string(),
			active_seasons,
		})
	}

	#[instrument(skip(self, active_seasons))]
	async fn rewrite_user_attribute_blob(
		&self,
		subject: &str,
		active_seasons: &[ActiveSeason],
	) -> Result<(), IdentityError> {
		let mut users = self.users.write().await;
		let entry = users
			.get_mut(subject)
			.ok_or_else(|| IdentityError::NotFound(subject.to_string()))?;
		*entry = active_seasons.to_vec();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn season(team: &str) -> ActiveSeason {
		ActiveSeason {
			league: "Sunday League".to_string(),
			season: "2024".to_string(),
			team_name: team.to_string(),
			team_division: "Premier".to_string(),
			person_name: "Sam".to_string(),
			role: "player".to_string(),
			..Default::default()
		}
	}

	#[tokio::test]
	async fn test_fetch_and_rewrite() {
		let directory = InMemoryIdentityDirectory::new();
		directory.insert_user("auth|sam", vec![season("Home FC")]).await;

		let user = directory
			.fetch_user_by_season_membership("auth|sam", "Sunday League", "2024")
			.await
			.unwrap();
		assert_eq!(user.subject, "auth|sam");
		assert_eq!(user.active_seasons, vec![season("Home FC")]);

		let mut seasons = user.active_seasons;
		seasons[0].latest_kudos = vec![100];
		directory
			.rewrite_user_attribute_blob("auth|sam", &seasons)
			.await
			.unwrap();

		let stored = directory.active_seasons("auth|sam").await.unwrap();
		assert_eq!(stored[0].latest_kudos, vec![100]);
	}

	#[tokio::test]
	async fn test_unknown_subject() {
		let directory = InMemoryIdentityDirectory::new();
		let result = directory
			.fetch_user_by_season_membership("auth|nobody", "L", "S")
			.await;
		assert!(matches!(result, Err(IdentityError::NotFound(_))));

		let result = directory.rewrite_user_attribute_blob("auth|nobody", &[]).await;
		assert!(matches!(result, Err(IdentityError::NotFound(_))));
	}
}
