// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Active season memberships stored on an identity record.
//!
//! The identity provider keeps a member's seasons as one opaque attribute:
//! a JSON array of [`ActiveSeason`] objects. It is always read and written
//! whole. Fields this crate does not know about are carried through
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MergeError;

/// How many recent kudos dates are kept per active season.
pub const LATEST_KUDOS_LIMIT: usize = 2;

/// One league/season/team membership of an identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveSeason {
	#[serde(default)]
	pub league: String,
	#[serde(default)]
	pub season: String,
	#[serde(default)]
	pub team_name: String,
	#[serde(default)]
	pub team_division: String,
	#[serde(default)]
	pub person_name: String,
	#[serde(default)]
	pub role: String,
	/// Match times (unix seconds) of the member's most recent kudos, ascending.
	#[serde(default)]
	pub latest_kudos: Vec<i64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl ActiveSeason {
	#[must_use]
	pub fn matches(&self, league: &str, season: &str, division: &str, team_name: &str) -> bool {
		self.league == league
			&& self.season == season
			&& self.team_division == division
			&& self.team_name == team_name
	}

	/// Whether `timestamp` is already reflected in `latest_kudos`: either it
	/// is present, or the list is full and every kept date is newer.
	#[must_use]
	pub fn has_latest_kudos(&self, timestamp: i64) -> bool {
		if self.latest_kudos.contains(&timestamp) {
			return true;
		}
		self.latest_kudos.len() >= LATEST_KUDOS_LIMIT
			&& self.latest_kudos.iter().all(|kept| *kept > timestamp)
	}
}

/// Record `new_timestamp` against the matching season entry.
///
/// Keeps only the [`LATEST_KUDOS_LIMIT`] most recent timestamps, stored
/// ascending. All other entries are returned unchanged and in order.
///
/// # Errors
/// Returns [`MergeError::InvalidState`] if no entry matches
/// (league, season, division, team).
pub fn append_latest_kudos(
	mut seasons: Vec<ActiveSeason>,
	league: &str,
	season: &str,
	division: &str,
	team_name: &str,
	new_timestamp: i64,
) -> Result<Vec<ActiveSeason>, MergeError> {
	let entry = seasons
		.iter_mut()
		.find(|s| s.matches(league, season, division, team_name))
		.ok_or_else(|| MergeError::InvalidState {
			league: league.to_string(),
			season: season.to_string(),
			division: division.to_string(),
			team_name: team_name.to_string(),
		})?;

	entry.latest_kudos.push(new_timestamp);
	entry.latest_kudos.sort_unstable_by(|a, b| b.cmp(a));
	entry.latest_kudos.truncate(LATEST_KUDOS_LIMIT);
	entry.latest_kudos.sort_unstable();

	Ok(seasons)
}

/// Decode the attribute blob. An empty blob is an empty list.
pub fn decode_active_seasons(blob: &str) -> Result<Vec<ActiveSeason>, MergeError> {
	if blob.trim().is_empty() {
		return Ok(Vec::new());
	}
	Ok(serde_json::from_str(blob)?)
}

pub fn encode_active_seasons(seasons: &[ActiveSeason]) -> Result<String, MergeError> {
	Ok(serde_json::to_string(seasons)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn membership(team: &str, latest: Vec<i64>) -> ActiveSeason {
		ActiveSeason {
			league: "Sunday League".to_string(),
			season: "2024".to_string(),
			team_name: team.to_string(),
			team_division: "Premier".to_string(),
			person_name: "Sam Taylor".to_string(),
			role: "player".to_string(),
			latest_kudos: latest,
			extra: Map::new(),
		}
	}

	#[test]
	fn test_oldest_timestamp_dropped() {
		let seasons = vec![membership("Home FC", vec![1000, 3000])];
		let merged =
			append_latest_kudos(seasons, "Sunday League", "2024", "Premier", "Home FC", 2000).unwrap();
		assert_eq!(merged[0].latest_kudos, vec![2000, 3000]);
	}

	#[test]
	fn test_older_timestamp_than_both_is_discarded() {
		let seasons = vec![membership("Home FC", vec![2000, 3000])];
		let merged =
			append_latest_kudos(seasons, "Sunday League", "2024", "Premier", "Home FC", 1000).unwrap();
		assert_eq!(merged[0].latest_kudos, vec![2000, 3000]);
	}

	#[test]
	fn test_first_kudos_on_empty_list() {
		let seasons = vec![membership("Home FC", vec![])];
		let merged =
			append_latest_kudos(seasons, "Sunday League", "2024", "Premier", "Home FC", 42).unwrap();
		assert_eq!(merged[0].latest_kudos, vec![42]);
	}

	#[test]
	fn test_other_entries_untouched() {
		let other = membership("Other FC", vec![1, 2]);
		let seasons = vec![other.clone(), membership("Home FC", vec![])];
		let merged =
			append_latest_kudos(seasons, "Sunday League", "2024", "Premier", "Home FC", 5).unwrap();
		assert_eq!(merged[0], other);
		assert_eq!(merged[1].latest_kudos, vec![5]);
	}

	#[test]
	fn test_missing_entry_is_invalid_state() {
		let seasons = vec![membership("Home FC", vec![])];
		let result = append_latest_kudos(seasons, "Sunday League", "2025", "Premier", "Home FC", 5);
		assert!(matches!(result, Err(MergeError::InvalidState { .. })));
	}

	#[test]
	fn test_unknown_fields_pass_through() {
		let blob = r#"[{"league":"L","season":"S","team_name":"T","team_division":"D","person_name":"P","role":"captain","latest_kudos":[10],"shirt_number":7,"preferences":{"email":true}}]"#;
		let seasons = decode_active_seasons(blob).unwrap();
		let merged = append_latest_kudos(seasons, "L", "S", "D", "T", 20).unwrap();
		let encoded = encode_active_seasons(&merged).unwrap();

		let value: Value = serde_json::from_str(&encoded).unwrap();
		assert_eq!(value[0]["shirt_number"], 7);
		assert_eq!(value[0]["preferences"]["email"], true);
		assert_eq!(value[0]["latest_kudos"], serde_json::json!([10, 20]));
	}

	#[test]
	fn test_has_latest_kudos() {
		let partial = membership("Home FC", vec![1000]);
		assert!(partial.has_latest_kudos(1000));
		assert!(!partial.has_latest_kudos(500));
		assert!(!partial.has_latest_kudos(2000));

		let full = membership("Home FC", vec![2000, 3000]);
		assert!(full.has_latest_kudos(3000));
		assert!(full.has_latest_kudos(1000));
		assert!(!full.has_latest_kudos(2500));
		assert!(!full.has_latest_kudos(4000));
	}

	#[test]
	fn test_decode_blank_blob() {
		assert!(decode_active_seasons("").unwrap().is_empty());
		assert!(decode_active_seasons("not json").is_err());
	}

	proptest! {
		#[test]
		fn keeps_two_largest_ascending(
			existing in proptest::collection::vec(0i64..1_000_000, 0..=2),
			new in 0i64..1_000_000,
		) {
			let mut sorted_existing = existing.clone();
			sorted_existing.sort_unstable();
			let seasons = vec![membership("Home FC", sorted_existing)];
			let merged = append_latest_kudos(seasons, "Sunday League", "2024", "Premier", "Home FC", new).unwrap();
			let latest = &merged[0].latest_kudos;

			let mut all = existing.clone();
			all.push(new);
			all.sort_unstable_by(|a, b| b.cmp(a));
			all.truncate(LATEST_KUDOS_LIMIT);
			all.sort_unstable();

			prop_assert!(latest.len() <= LATEST_KUDOS_LIMIT);
			prop_assert!(latest.windows(2).all(|w| w[0] <= w[1]));
			prop_assert_eq!(latest, &all);
		}
	}
}
