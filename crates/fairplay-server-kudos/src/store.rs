// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Repository layer for kudos events and summaries.
//!
//! Writes go through a single transaction that couples "this exact event has
//! never been recorded" with "apply it to the match summary". A duplicate
//! event aborts the transaction before the summary is touched.

use async_trait::async_trait;
use chrono::Utc;
use fairplay_kudos_core::{
	KudosEvent, KudosEventKey, KudosSummary, KudosSummaryKey, KudosValue,
};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::error::KudosStoreError;

type Result<T> = std::result::Result<T, KudosStoreError>;

/// What a write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
	/// The event was inserted and its summary counter incremented.
	Recorded,
	/// An event with the same natural key already existed; nothing changed.
	AlreadyRecorded,
}

/// Repository trait for kudos operations.
#[async_trait]
pub trait KudosStore: Send + Sync {
	// Write path
	async fn record_kudos(&self, event: &KudosEvent) -> Result<RecordOutcome>;

	// Point lookups
	async fn get_event(&self, key: &KudosEventKey) -> Result<Option<KudosEvent>>;
	async fn get_summary(&self, key: &KudosSummaryKey) -> Result<Option<KudosSummary>>;

	// Range queries
	async fn list_given_by_player(
		&self,
		league: &str,
		season: &str,
		giver_person_sub: &str,
		division: &str,
		giver_team: &str,
	) -> Result<Vec<KudosEvent>>;
	async fn list_summaries_for_team(
		&self,
		league: &str,
		season: &str,
		division: &str,
		team_name: &str,
	) -> Result<Vec<KudosSummary>>;
	/// Ordered by `receiving_team` ascending.
	async fn list_summaries_for_division(
		&self,
		league: &str,
		season: &str,
		division: &str,
	) -> Result<Vec<KudosSummary>>;

	async fn health_check(&self) -> Result<()>;
}

/// SQLite implementation of the kudos store.
#[derive(Clone)]
pub struct SqliteKudosStore {
	pool: SqlitePool,
}

impl SqliteKudosStore {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}
}

// Database row structs for mapping
#[derive(sqlx::FromRow)]
struct EventRow {
	league: String,
	season: String,
	division: String,
	receiving_team: String,
	home_team: String,
	away_team: String,
	giver_person_sub: String,
	match_date_time: i64,
	giver_team: String,
	giver_person_name: String,
	kudos_value: i64,
}

impl TryFrom<EventRow> for KudosEvent {
	type Error = KudosStoreError;

	fn try_from(row: EventRow) -> Result<Self> {
		Ok(KudosEvent {
			kudos_value: KudosValue::try_from(row.kudos_value).map_err(KudosStoreError::InvalidData)?,
			league: row.league,
			season: row.season,
			division: row.division,
			receiving_team: row.receiving_team,
			home_team: row.home_team,
			away_team: row.away_team,
			match_date_time: row.match_date_time,
			giver_team: row.giver_team,
			giver_person_name: row.giver_person_name,
			giver_person_sub: row.giver_person_sub,
		})
	}
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
	league: String,
	season: String,
	division: String,
	receiving_team: String,
	home_team: String,
	away_team: String,
	match_date_time: i64,
	positive_count: i64,
	neutral_count: i64,
	negative_count: i64,
}

fn count(value: i64, column: &str) -> Result<u64> {
	u64::try_from(value)
		.map_err(|_| KudosStoreError::InvalidData(format!("negative {column}: {value}")))
}

impl TryFrom<SummaryRow> for KudosSummary {
	type Error = KudosStoreError;

	fn try_from(row: SummaryRow) -> Result<Self> {
		Ok(KudosSummary {
			positive_count: count(row.positive_count, "positive_count")?,
			neutral_count: count(row.neutral_count, "neutral_count")?,
			negative_count: count(row.negative_count, "negative_count")?,
			league: row.league,
			season: row.season,
			division: row.division,
			receiving_team: row.receiving_team,
			home_team: row.home_team,
			away_team: row.away_team,
			match_date_time: row.match_date_time,
		})
	}
}

const EVENT_COLUMNS: &str = r#"
	league, season, division, receiving_team, home_team, away_team, giver_person_sub,
	match_date_time, giver_team, giver_person_name, kudos_value
"#;

const SUMMARY_COLUMNS: &str = r#"
	league, season, division, receiving_team, home_team, away_team,
	match_date_time, positive_count, neutral_count, negative_count
"#;

#[async_trait]
impl KudosStore for SqliteKudosStore {
	#[instrument(
		skip(self, event),
		fields(
			league = %event.league,
			division = %event.division,
			receiving_team = %event.receiving_team,
			giver_person_sub = %event.giver_person_sub,
			kudos_value = %event.kudos_value,
		)
	)]
	async fn record_kudos(&self, event: &KudosEvent) -> Result<RecordOutcome> {
		let now = Utc::now().to_rfc3339();
		let mut tx = self.pool.begin().await?;

		let inserted = sqlx::query(
			r#"
			INSERT INTO kudos_events (
				league, season, division, receiving_team, home_team, away_team, giver_person_sub,
				match_date_time, giver_team, giver_person_name, kudos_value, created_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			ON CONFLICT (league, season, division, receiving_team, home_team, away_team, giver_person_sub)
			DO NOTHING
			"#,
		)
		.bind(&event.league)
		.bind(&event.season)
		.bind(&event.division)
		.bind(&event.receiving_team)
		.bind(&event.home_team)
		.bind(&event.away_team)
		.bind(&event.giver_person_sub)
		.bind(event.match_date_time)
		.bind(&event.giver_team)
		.bind(&event.giver_person_name)
		.bind(event.kudos_value.as_i64())
		.bind(&now)
		.execute(&mut *tx)
		.await?;

		if inserted.rows_affected() == 0 {
			tx.rollback().await?;
			tracing::debug!("kudos event already recorded, skipping summary update");
			return Ok(RecordOutcome::AlreadyRecorded);
		}

		// Descriptive columns are only written on first insert; later events
		// for the same match only move the counters.
		let (positive, neutral, negative) = event.kudos_value.counter_deltas();
		sqlx::query(
			r#"
			INSERT INTO kudos_summaries (
				league, season, division, receiving_team, home_team, away_team,
				match_date_time, positive_count, neutral_count, negative_count,
				created_at, updated_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			ON CONFLICT (league, season, division, receiving_team, home_team, away_team)
			DO UPDATE SET
				positive_count = positive_count + excluded.positive_count,
				neutral_count = neutral_count + excluded.neutral_count,
				negative_count = negative_count + excluded.negative_count,
				updated_at = excluded.updated_at
			"#,
		)
		.bind(&event.league)
		.bind(&event.season)
		.bind(&event.division)
		.bind(&event.receiving_team)
		.bind(&event.home_team)
		.bind(&event.away_team)
		.bind(event.match_date_time)
		.bind(positive)
		.bind(neutral)
		.bind(negative)
		.bind(&now)
		.bind(&now)
		.execute(&mut *tx)
		.await?;

		tx.commit().await?;

		tracing::debug!("kudos event recorded");
		Ok(RecordOutcome::Recorded)
	}

	#[instrument(skip(self, key), fields(league = %key.league, receiving_team = %key.receiving_team, giver_person_sub = %key.giver_person_sub))]
	async fn get_event(&self, key: &KudosEventKey) -> Result<Option<KudosEvent>> {
		let row = sqlx::query_as::<_, EventRow>(&format!(
			r#"
			SELECT {EVENT_COLUMNS}
			FROM kudos_events
			WHERE league = ? AND season = ? AND division = ? AND receiving_team = ?
			  AND home_team = ? AND away_team = ? AND giver_person_sub = ?
			"#
		))
		.bind(&key.league)
		.bind(&key.season)
		.bind(&key.division)
		.bind(&key.receiving_team)
		.bind(&key.home_team)
		.bind(&key.away_team)
		.bind(&key.giver_person_sub)
		.fetch_optional(&self.pool)
		.await?;

		row.map(TryInto::try_into).transpose()
	}

	#[instrument(skip(self, key), fields(league = %key.league, receiving_team = %key.receiving_team))]
	async fn get_summary(&self, key: &KudosSummaryKey) -> Result<Option<KudosSummary>> {
		let row = sqlx::query_as::<_, SummaryRow>(&format!(
			r#"
			SELECT {SUMMARY_COLUMNS}
			FROM kudos_summaries
			WHERE league = ? AND season = ? AND division = ? AND receiving_team = ?
			  AND home_team = ? AND away_team = ?
			"#
		))
		.bind(&key.league)
		.bind(&key.season)
		.bind(&key.division)
		.bind(&key.receiving_team)
		.bind(&key.home_team)
		.bind(&key.away_team)
		.fetch_optional(&self.pool)
		.await?;

		row.map(TryInto::try_into).transpose()
	}

	#[instrument(skip(self))]
	async fn list_given_by_player(
		&self,
		league: &str,
		season: &str,
		giver_person_sub: &str,
		division: &str,
		giver_team: &str,
	) -> Result<Vec<KudosEvent>> {
		let rows = sqlx::query_as::<_, EventRow>(&format!(
			r#"
			SELECT {EVENT_COLUMNS}
			FROM kudos_events
			WHERE league = ? AND season = ? AND giver_person_sub = ?
			  AND division = ? AND giver_team = ?
			ORDER BY match_date_time ASC, receiving_team ASC
			"#
		))
		.bind(league)
		.bind(season)
		.bind(giver_person_sub)
		.bind(division)
		.bind(giver_team)
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(TryInto::try_into).collect()
	}

	#[instrument(skip(self))]
	async fn list_summaries_for_team(
		&self,
		league: &str,
		season: &str,
		division: &str,
		team_name: &str,
	) -> Result<Vec<KudosSummary>> {
		let rows = sqlx::query_as::<_, SummaryRow>(&format!(
			r#"
			SELECT {SUMMARY_COLUMNS}
			FROM kudos_summaries
			WHERE league = ? AND season = ? AND division = ? AND receiving_team = ?
			ORDER BY match_date_time ASC
			"#
		))
		.bind(league)
		.bind(season)
		.bind(division)
		.bind(team_name)
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(TryInto::try_into).collect()
	}

	#[instrument(skip(self))]
	async fn list_summaries_for_division(
		&self,
		league: &str,
		season: &str,
		division: &str,
	) -> Result<Vec<KudosSummary>> {
		let rows = sqlx::query_as::<_, SummaryRow>(&format!(
			r#"
			SELECT {SUMMARY_COLUMNS}
			FROM kudos_summaries
			WHERE league = ? AND season = ? AND division = ?
			ORDER BY receiving_team ASC, match_date_time ASC
			"#
		))
		.bind(league)
		.bind(season)
		.bind(division)
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(TryInto::try_into).collect()
	}

	async fn health_check(&self) -> Result<()> {
		sqlx::query("SELECT 1").execute(&self.pool).await?;
		Ok(())
	}
}
