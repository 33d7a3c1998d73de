// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use fairplay_kudos_core::{KudosEvent, KudosSubmission, KudosValue};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Single-connection in-memory pool with the kudos schema applied.
pub async fn create_test_pool() -> SqlitePool {
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.unwrap();
	crate::run_migrations(&pool).await.unwrap();
	pool
}

/// Home FC player `giver_person_sub` rating Away FC.
pub fn sample_event(giver_person_sub: &str, kudos_value: KudosValue) -> KudosEvent {
	KudosEvent {
		league: "Sunday League".to_string(),
		season: "2024".to_string(),
		division: "Premier".to_string(),
		receiving_team: "Away FC".to_string(),
		home_team: "Home FC".to_string(),
		away_team: "Away FC".to_string(),
		match_date_time: 1_717_243_200,
		giver_team: "Home FC".to_string(),
		giver_person_name: "Sam Taylor".to_string(),
		giver_person_sub: giver_person_sub.to_string(),
		kudos_value,
	}
}

pub fn sample_submission(giver_person_sub: &str, kudos_value: i64) -> KudosSubmission {
	KudosSubmission {
		league: "Sunday League".to_string(),
		season: "2024".to_string(),
		division: "Premier".to_string(),
		receiving_team: "Away FC".to_string(),
		home_team: "Home FC".to_string(),
		away_team: "Away FC".to_string(),
		match_date_time: 1_717_243_200,
		giver_team: "Home FC".to_string(),
		giver_person_name: "Sam Taylor".to_string(),
		giver_person_sub: giver_person_sub.to_string(),
		kudos_value: Some(kudos_value),
	}
}
