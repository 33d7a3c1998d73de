// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the kudos core.

use thiserror::Error;

/// A kudos submission failed one or more validation rules.
///
/// Carries every failing message in evaluation order so callers can show the
/// full set at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid kudos submission: {}", .messages.join("; "))]
pub struct ValidationError {
	pub messages: Vec<String>,
}

impl ValidationError {
	pub fn new(messages: Vec<String>) -> Self {
		Self { messages }
	}
}

/// Errors from merging a timestamp into a member's active seasons.
#[derive(Debug, Error)]
pub enum MergeError {
	/// The member has no active season for the given league/season/team.
	#[error("no active season for {league}/{season} team {team_name} in division {division}")]
	InvalidState {
		league: String,
		season: String,
		division: String,
		team_name: String,
	},

	/// The stored attribute blob is not a valid active-seasons array.
	#[error("malformed active seasons blob: {0}")]
	Malformed(#[from] serde_json::Error),
}
