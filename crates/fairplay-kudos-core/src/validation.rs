// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kudos submission validation.
//!
//! Every rule is evaluated; nothing short-circuits. Blank strings compare
//! equal to each other, so an all-blank submission also trips the
//! giver-is-receiver rule.

use crate::error::ValidationError;
use crate::kudos::{KudosEvent, KudosSubmission, KudosValue};

/// Collect every validation message for a submission, in evaluation order.
pub fn validation_errors(submission: &KudosSubmission) -> Vec<String> {
	let mut errors = Vec::new();

	let required = [
		("League", &submission.league),
		("Season", &submission.season),
		("Division", &submission.division),
		("ReceivingTeam", &submission.receiving_team),
		("HomeTeam", &submission.home_team),
		("AwayTeam", &submission.away_team),
		("GiverTeam", &submission.giver_team),
		("GiverPersonName", &submission.giver_person_name),
		("GiverPersonSub", &submission.giver_person_sub),
	];
	for (field, value) in required {
		if value.trim().is_empty() {
			errors.push(format!("{field} is required"));
		}
	}

	if !plays_in_match(&submission.receiving_team, submission) {
		errors.push("ReceivingTeam must be either the HomeTeam or the AwayTeam.".to_string());
	}

	if !plays_in_match(&submission.giver_team, submission) {
		errors.push("GiverTeam must be either the HomeTeam or the AwayTeam.".to_string());
	}

	if submission.giver_team == submission.receiving_team {
		errors.push("GiverTeam cannot be the same as the ReceivingTeam.".to_string());
	}

	if parse_kudos_value(submission.kudos_value).is_none() {
		errors.push("KudosValue must be -1, 0, or 1.".to_string());
	}

	errors
}

/// Validate a submission into an immutable [`KudosEvent`].
///
/// # Errors
/// Returns [`ValidationError`] with the complete, ordered list of failures.
pub fn validate(submission: &KudosSubmission) -> Result<KudosEvent, ValidationError> {
	let errors = validation_errors(submission);
	if !errors.is_empty() {
		return Err(ValidationError::new(errors));
	}

	let kudos_value = parse_kudos_value(submission.kudos_value)
		.ok_or_else(|| ValidationError::new(vec!["KudosValue must be -1, 0, or 1.".to_string()]))?;

	Ok(KudosEvent {
		league: submission.league.clone(),
		season: submission.season.clone(),
		division: submission.division.clone(),
		receiving_team: submission.receiving_team.clone(),
		home_team: submission.home_team.clone(),
		away_team: submission.away_team.clone(),
		match_date_time: submission.match_date_time,
		giver_team: submission.giver_team.clone(),
		giver_person_name: submission.giver_person_name.clone(),
		giver_person_sub: submission.giver_person_sub.clone(),
		kudos_value,
	})
}

fn plays_in_match(team: &str, submission: &KudosSubmission) -> bool {
	team == submission.home_team || team == submission.away_team
}

fn parse_kudos_value(value: Option<i64>) -> Option<KudosValue> {
	value.and_then(|v| KudosValue::try_from(v).ok())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn valid_submission() -> KudosSubmission {
		KudosSubmission {
			league: "Sunday League".to_string(),
			season: "2024".to_string(),
			division: "Premier".to_string(),
			receiving_team: "Away FC".to_string(),
			home_team: "Home FC".to_string(),
			away_team: "Away FC".to_string(),
			match_date_time: 1_700_000_000,
			giver_team: "Home FC".to_string(),
			giver_person_name: "Sam Taylor".to_string(),
			giver_person_sub: "auth|sam".to_string(),
			kudos_value: Some(1),
		}
	}

	#[test]
	fn test_valid_submission_passes() {
		let submission = valid_submission();
		assert!(validation_errors(&submission).is_empty());

		let event = validate(&submission).unwrap();
		assert_eq!(event.kudos_value, KudosValue::Positive);
		assert_eq!(event.giver_person_sub, "auth|sam");
	}

	#[test]
	fn test_all_blank_yields_ten_errors() {
		let submission = KudosSubmission {
			kudos_value: Some(0),
			..Default::default()
		};

		let errors = validation_errors(&submission);
		assert_eq!(errors.len(), 10);
		assert_eq!(errors[0], "League is required");
		assert_eq!(errors[8], "GiverPersonSub is required");
		assert_eq!(errors[9], "GiverTeam cannot be the same as the ReceivingTeam.");
	}

	#[test]
	fn test_whitespace_counts_as_blank() {
		let submission = KudosSubmission {
			league: "   ".to_string(),
			..valid_submission()
		};
		assert_eq!(validation_errors(&submission), vec!["League is required"]);
	}

	#[test]
	fn test_receiving_team_not_in_match() {
		let submission = KudosSubmission {
			receiving_team: "Other FC".to_string(),
			..valid_submission()
		};
		assert_eq!(
			validation_errors(&submission),
			vec!["ReceivingTeam must be either the HomeTeam or the AwayTeam."]
		);
	}

	#[test]
	fn test_both_membership_rules_fire_together() {
		let submission = KudosSubmission {
			receiving_team: "Other FC".to_string(),
			giver_team: "Elsewhere FC".to_string(),
			..valid_submission()
		};
		assert_eq!(
			validation_errors(&submission),
			vec![
				"ReceivingTeam must be either the HomeTeam or the AwayTeam.",
				"GiverTeam must be either the HomeTeam or the AwayTeam.",
			]
		);
	}

	#[test]
	fn test_giver_cannot_rate_own_team() {
		let submission = KudosSubmission {
			giver_team: "Away FC".to_string(),
			..valid_submission()
		};
		assert_eq!(
			validation_errors(&submission),
			vec!["GiverTeam cannot be the same as the ReceivingTeam."]
		);
	}

	#[test]
	fn test_missing_kudos_value_rejected() {
		let submission = KudosSubmission {
			kudos_value: None,
			..valid_submission()
		};
		let err = validate(&submission).unwrap_err();
		assert_eq!(err.messages, vec!["KudosValue must be -1, 0, or 1."]);
	}

	proptest! {
		#[test]
		fn kudos_value_range(value in -10i64..10) {
			let submission = KudosSubmission {
				kudos_value: Some(value),
				..valid_submission()
			};
			let valid = validate(&submission).is_ok();
			prop_assert_eq!(valid, (-1..=1).contains(&value));
		}
	}
}
