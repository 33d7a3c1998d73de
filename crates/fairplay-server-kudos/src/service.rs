// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kudos orchestration: validate, record, then update the giver's identity.
//!
//! The store write and the identity update are not atomic with each other.
//! A failure after the store commit is reported to the caller but never
//! undone; retrying the same submission is a no-op for the counters and
//! finishes the identity update if it is still missing.

use std::sync::Arc;

use fairplay_kudos_core::{
	append_latest_kudos, compute_standings, validate, KudosEvent, KudosEventKey, KudosSubmission,
	KudosSummary, KudosSummaryKey, Standings,
};
use fairplay_server_identity::IdentityDirectory;
use tracing::{debug, info, instrument, warn};

use crate::error::KudosError;
use crate::store::{KudosStore, RecordOutcome};

#[derive(Clone)]
pub struct KudosService {
	store: Arc<dyn KudosStore>,
	identity: Arc<dyn IdentityDirectory>,
}

impl KudosService {
	pub fn new(store: Arc<dyn KudosStore>, identity: Arc<dyn IdentityDirectory>) -> Self {
		Self { store, identity }
	}

	pub fn store(&self) -> &Arc<dyn KudosStore> {
		&self.store
	}

	/// Validate and record a submission, then append its match time to the
	/// giver's latest kudos.
	///
	/// # Errors
	/// - [`KudosError::Validation`] before anything is stored.
	/// - [`KudosError::Store`] if the write failed; nothing was applied.
	/// - [`KudosError::InvalidState`] or [`KudosError::Identity`] if the event
	///   was stored but the identity update failed.
	#[instrument(
		skip(self, submission),
		fields(
			league = %submission.league,
			division = %submission.division,
			receiving_team = %submission.receiving_team,
			giver_person_sub = %submission.giver_person_sub,
		)
	)]
	pub async fn save_kudos(&self, submission: KudosSubmission) -> Result<KudosEvent, KudosError> {
		let event = validate(&submission)?;
		let outcome = self.store.record_kudos(&event).await?;

		if let Err(e) = self.record_latest_kudos(&event, outcome).await {
			warn!(error = %e, outcome = ?outcome, "kudos stored but identity update failed");
			return Err(e);
		}

		info!(outcome = ?outcome, kudos_value = %event.kudos_value, "kudos saved");
		Ok(event)
	}

	async fn record_latest_kudos(
		&self,
		event: &KudosEvent,
		outcome: RecordOutcome,
	) -> Result<(), KudosError> {
		let user = self
			.identity
			.fetch_user_by_season_membership(&event.giver_person_sub, &event.league, &event.season)
			.await?;

		// A duplicate only rewrites when an earlier attempt left the blob behind.
		if outcome == RecordOutcome::AlreadyRecorded
			&& user.active_seasons.iter().any(|s| {
				s.matches(&event.league, &event.season, &event.division, &event.giver_team)
					&& s.has_latest_kudos(event.match_date_time)
			}) {
			debug!("latest kudos already up to date");
			return Ok(());
		}

		let merged = append_latest_kudos(
			user.active_seasons,
			&event.league,
			&event.season,
			&event.division,
			&event.giver_team,
			event.match_date_time,
		)?;

		self
			.identity
			.rewrite_user_attribute_blob(&event.giver_person_sub, &merged)
			.await?;
		Ok(())
	}

	#[instrument(skip(self, key), fields(league = %key.league, receiving_team = %key.receiving_team))]
	pub async fn get_event(&self, key: &KudosEventKey) -> Result<KudosEvent, KudosError> {
		self
			.store
			.get_event(key)
			.await?
			.ok_or_else(|| {
				KudosError::NotFound(format!(
					"kudos from {} to {} in {} v {}",
					key.giver_person_sub, key.receiving_team, key.home_team, key.away_team
				))
			})
	}

	#[instrument(skip(self, key), fields(league = %key.league, receiving_team = %key.receiving_team))]
	pub async fn get_summary(&self, key: &KudosSummaryKey) -> Result<KudosSummary, KudosError> {
		self
			.store
			.get_summary(key)
			.await?
			.ok_or_else(|| {
				KudosError::NotFound(format!(
					"kudos summary for {} in {} v {}",
					key.receiving_team, key.home_team, key.away_team
				))
			})
	}

	pub async fn list_given_by_player(
		&self,
		league: &str,
		season: &str,
		giver_person_sub: &str,
		division: &str,
		giver_team: &str,
	) -> Result<Vec<KudosEvent>, KudosError> {
		Ok(
			self
				.store
				.list_given_by_player(league, season, giver_person_sub, division, giver_team)
				.await?,
		)
	}

	pub async fn list_summaries_for_team(
		&self,
		league: &str,
		season: &str,
		division: &str,
		team_name: &str,
	) -> Result<Vec<KudosSummary>, KudosError> {
		Ok(
			self
				.store
				.list_summaries_for_team(league, season, division, team_name)
				.await?,
		)
	}

	pub async fn list_summaries_for_division(
		&self,
		league: &str,
		season: &str,
		division: &str,
	) -> Result<Vec<KudosSummary>, KudosError> {
		Ok(
			self
				.store
				.list_summaries_for_division(league, season, division)
				.await?,
		)
	}

	#[instrument(skip(self))]
	pub async fn division_standings(
		&self,
		league: &str,
		season: &str,
		division: &str,
	) -> Result<Standings, KudosError> {
		let summaries = self.list_summaries_for_division(league, season, division).await?;
		Ok(compute_standings(&summaries))
	}
}
