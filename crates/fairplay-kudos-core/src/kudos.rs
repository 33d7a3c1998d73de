// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kudos events, summaries and their natural keys.

use serde::{Deserialize, Serialize};

/// A single fair-play rating.
///
/// Serialized as the bare integer `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum KudosValue {
	Negative,
	Neutral,
	Positive,
}

impl KudosValue {
	#[must_use]
	pub fn as_i64(self) -> i64 {
		match self {
			KudosValue::Negative => -1,
			KudosValue::Neutral => 0,
			KudosValue::Positive => 1,
		}
	}

	/// Counter deltas `(positive, neutral, negative)` this value contributes to a summary.
	#[must_use]
	pub fn counter_deltas(self) -> (i64, i64, i64) {
		match self {
			KudosValue::Positive => (1, 0, 0),
			KudosValue::Neutral => (0, 1, 0),
			KudosValue::Negative => (0, 0, 1),
		}
	}
}

impl TryFrom<i64> for KudosValue {
	type Error = String;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		match value {
			-1 => Ok(KudosValue::Negative),
			0 => Ok(KudosValue::Neutral),
			1 => Ok(KudosValue::Positive),
			other => Err(format!("invalid kudos value: {other}")),
		}
	}
}

impl From<KudosValue> for i64 {
	fn from(value: KudosValue) -> Self {
		value.as_i64()
	}
}

impl std::fmt::Display for KudosValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_i64())
	}
}

/// Raw kudos input as received over the wire, before validation.
///
/// Missing string fields decode as empty so that validation reports them
/// alongside every other failing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KudosSubmission {
	pub league: String,
	pub season: String,
	pub division: String,
	pub receiving_team: String,
	pub home_team: String,
	pub away_team: String,
	/// Kick-off time, unix seconds.
	pub match_date_time: i64,
	pub giver_team: String,
	pub giver_person_name: String,
	pub giver_person_sub: String,
	pub kudos_value: Option<i64>,
}

/// A validated, immutable kudos event.
///
/// Identified by its natural key; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudosEvent {
	pub league: String,
	pub season: String,
	pub division: String,
	pub receiving_team: String,
	pub home_team: String,
	pub away_team: String,
	pub match_date_time: i64,
	pub giver_team: String,
	pub giver_person_name: String,
	pub giver_person_sub: String,
	pub kudos_value: KudosValue,
}

impl KudosEvent {
	#[must_use]
	pub fn key(&self) -> KudosEventKey {
		KudosEventKey {
			league: self.league.clone(),
			season: self.season.clone(),
			division: self.division.clone(),
			receiving_team: self.receiving_team.clone(),
			home_team: self.home_team.clone(),
			away_team: self.away_team.clone(),
			giver_person_sub: self.giver_person_sub.clone(),
		}
	}

	#[must_use]
	pub fn summary_key(&self) -> KudosSummaryKey {
		KudosSummaryKey {
			league: self.league.clone(),
			season: self.season.clone(),
			division: self.division.clone(),
			receiving_team: self.receiving_team.clone(),
			home_team: self.home_team.clone(),
			away_team: self.away_team.clone(),
		}
	}
}

/// Natural key of a kudos event: one per (match, receiving team, giver).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KudosEventKey {
	pub league: String,
	pub season: String,
	pub division: String,
	pub receiving_team: String,
	pub home_team: String,
	pub away_team: String,
	pub giver_person_sub: String,
}

impl KudosEventKey {
	/// The summary this event contributes to.
	#[must_use]
	pub fn summary_key(&self) -> KudosSummaryKey {
		KudosSummaryKey {
			league: self.league.clone(),
			season: self.season.clone(),
			division: self.division.clone(),
			receiving_team: self.receiving_team.clone(),
			home_team: self.home_team.clone(),
			away_team: self.away_team.clone(),
		}
	}
}

/// Natural key of a kudos summary: one per (match, receiving team).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KudosSummaryKey {
	pub league: String,
	pub season: String,
	pub division: String,
	pub receiving_team: String,
	pub home_team: String,
	pub away_team: String,
}

/// Running per-match totals for a receiving team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KudosSummary {
	pub league: String,
	pub season: String,
	pub division: String,
	pub receiving_team: String,
	pub home_team: String,
	pub away_team: String,
	pub match_date_time: i64,
	pub positive_count: u64,
	pub neutral_count: u64,
	pub negative_count: u64,
}

impl KudosSummary {
	#[must_use]
	pub fn key(&self) -> KudosSummaryKey {
		KudosSummaryKey {
			league: self.league.clone(),
			season: self.season.clone(),
			division: self.division.clone(),
			receiving_team: self.receiving_team.clone(),
			home_team: self.home_team.clone(),
			away_team: self.away_team.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kudos_value_serializes_as_integer() {
		assert_eq!(serde_json::to_string(&KudosValue::Negative).unwrap(), "-1");
		assert_eq!(serde_json::to_string(&KudosValue::Neutral).unwrap(), "0");
		assert_eq!(serde_json::to_string(&KudosValue::Positive).unwrap(), "1");
	}

	#[test]
	fn kudos_value_rejects_out_of_range() {
		assert!(serde_json::from_str::<KudosValue>("2").is_err());
		assert!(serde_json::from_str::<KudosValue>("-2").is_err());
		assert_eq!(KudosValue::try_from(-1), Ok(KudosValue::Negative));
	}

	#[test]
	fn counter_deltas_touch_one_counter() {
		assert_eq!(KudosValue::Positive.counter_deltas(), (1, 0, 0));
		assert_eq!(KudosValue::Neutral.counter_deltas(), (0, 1, 0));
		assert_eq!(KudosValue::Negative.counter_deltas(), (0, 0, 1));
	}

	#[test]
	fn submission_missing_fields_decode_as_blank() {
		let submission: KudosSubmission =
			serde_json::from_str(r#"{"league":"Sunday League","kudos_value":1}"#).unwrap();
		assert_eq!(submission.league, "Sunday League");
		assert_eq!(submission.season, "");
		assert_eq!(submission.match_date_time, 0);
		assert_eq!(submission.kudos_value, Some(1));
	}

	#[test]
	fn summary_key_drops_giver() {
		let event = KudosEvent {
			league: "L".to_string(),
			season: "2024".to_string(),
			division: "1".to_string(),
			receiving_team: "Away FC".to_string(),
			home_team: "Home FC".to_string(),
			away_team: "Away FC".to_string(),
			match_date_time: 1_700_000_000,
			giver_team: "Home FC".to_string(),
			giver_person_name: "Sam".to_string(),
			giver_person_sub: "auth|sam".to_string(),
			kudos_value: KudosValue::Positive,
		};

		assert_eq!(event.key().summary_key(), event.summary_key());
		assert_eq!(event.summary_key().receiving_team, "Away FC");
	}
}
