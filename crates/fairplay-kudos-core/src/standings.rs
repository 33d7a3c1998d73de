// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Division fair-play standings.
//!
//! Standings tally matches, not kudos: a match with three positive kudos
//! adds one to the team's positive count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::kudos::KudosSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
	pub team: String,
	pub count: u64,
}

/// Two ranked tables for a division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
	/// Teams by number of matches with at least one positive kudos.
	pub positive_table: Vec<StandingsEntry>,
	/// Teams by number of matches with at least one negative kudos.
	pub negative_table: Vec<StandingsEntry>,
}

/// Build standings from one summary per (match, receiving team).
///
/// Teams with a zero count are left out of the respective table. Ties keep
/// the order in which teams first appear in `summaries`.
pub fn compute_standings(summaries: &[KudosSummary]) -> Standings {
	let mut index: HashMap<&str, usize> = HashMap::new();
	let mut tallies: Vec<(&str, u64, u64)> = Vec::new();

	for summary in summaries {
		let slot = *index
			.entry(summary.receiving_team.as_str())
			.or_insert_with(|| {
				tallies.push((summary.receiving_team.as_str(), 0, 0));
				tallies.len() - 1
			});

		let tally = &mut tallies[slot];
		if summary.positive_count >= 1 {
			tally.1 += 1;
		}
		if summary.negative_count >= 1 {
			tally.2 += 1;
		}
	}

	let positive_table = ranked(tallies.iter().map(|(team, pos, _)| (*team, *pos)));
	let negative_table = ranked(tallies.iter().map(|(team, _, neg)| (*team, *neg)));

	Standings {
		positive_table,
		negative_table,
	}
}

fn ranked<'a>(tallies: impl Iterator<Item = (&'a str, u64)>) -> Vec<StandingsEntry> {
	let mut table: Vec<StandingsEntry> = tallies
		.filter(|(_, count)| *count > 0)
		.map(|(team, count)| StandingsEntry {
			team: team.to_string(),
			count,
		})
		.collect();
	// sort_by is stable
	table.sort_by(|a, b| b.count.cmp(&a.count));
	table
}

#[cfg(test)]
mod tests {
	use super::*;

	fn summary(team: &str, away: &str, pos: u64, neg: u64) -> KudosSummary {
		KudosSummary {
			league: "L".to_string(),
			season: "2024".to_string(),
			division: "1".to_string(),
			receiving_team: team.to_string(),
			home_team: team.to_string(),
			away_team: away.to_string(),
			match_date_time: 0,
			positive_count: pos,
			neutral_count: 0,
			negative_count: neg,
		}
	}

	fn entry(team: &str, count: u64) -> StandingsEntry {
		StandingsEntry {
			team: team.to_string(),
			count,
		}
	}

	#[test]
	fn test_tally_counts_matches_not_kudos() {
		let summaries = vec![
			summary("A", "X", 1, 0),
			summary("A", "Y", 2, 0),
			summary("B", "X", 1, 0),
			summary("B", "Y", 0, 1),
			summary("C", "X", 0, 1),
			summary("C", "Y", 0, 1),
		];

		let standings = compute_standings(&summaries);
		assert_eq!(standings.positive_table, vec![entry("A", 2), entry("B", 1)]);
		assert_eq!(standings.negative_table, vec![entry("C", 2), entry("B", 1)]);
	}

	#[test]
	fn test_ties_keep_first_seen_order() {
		let summaries = vec![
			summary("Zebras", "X", 1, 0),
			summary("Ants", "X", 1, 0),
			summary("Moles", "X", 3, 0),
			summary("Moles", "Y", 1, 0),
		];

		let standings = compute_standings(&summaries);
		assert_eq!(
			standings.positive_table,
			vec![entry("Moles", 2), entry("Zebras", 1), entry("Ants", 1)]
		);
		assert!(standings.negative_table.is_empty());
	}

	#[test]
	fn test_grouping_does_not_need_adjacent_rows() {
		let summaries = vec![
			summary("A", "X", 1, 0),
			summary("B", "X", 1, 0),
			summary("A", "Y", 1, 0),
		];

		let standings = compute_standings(&summaries);
		assert_eq!(standings.positive_table, vec![entry("A", 2), entry("B", 1)]);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(compute_standings(&[]), Standings::default());
	}
}
