// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use fairplay_kudos_core::ActiveSeason;

use crate::error::IdentityError;

/// Name of the identity attribute holding the encoded active seasons.
pub const ACTIVE_SEASONS_ATTRIBUTE: &str = "active_seasons";

/// An identity record with its decoded season memberships.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityUser {
	pub subject: String,
	pub active_seasons: Vec<ActiveSeason>,
}

/// Whole-blob access to member season attributes on an identity provider.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
	/// Fetch the identity for `subject` together with all of its seasons.
	///
	/// `league` and `season` describe the membership the caller is about to
	/// act on; implementations may use them to narrow the lookup, but the
	/// returned record always carries the full list.
	async fn fetch_user_by_season_membership(
		&self,
		subject: &str,
		league: &str,
		season: &str,
	) -> Result<IdentityUser, IdentityError>;

	/// Replace the identity's entire active seasons attribute.
	async fn rewrite_user_attribute_blob(
		&self,
		subject: &str,
		active_seasons: &[ActiveSeason],
	) -> Result<(), IdentityError>;
}
