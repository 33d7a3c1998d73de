// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kudos HTTP handlers.
//!
//! - Submit a kudos rating for a match
//! - Look up single events and per-match summaries
//! - List kudos given by a player and summaries for a team or division
//! - Division fair-play standings

use axum::{
	extract::{Query, State},
	Json,
};
use fairplay_kudos_core::{
	KudosEvent, KudosEventKey, KudosSubmission, KudosSummary, KudosSummaryKey, Standings,
};
use serde::Deserialize;

use crate::{api::AppState, error::ServerError};

#[derive(Debug, Deserialize)]
pub struct GivenByPlayerQuery {
	pub league: String,
	pub season: String,
	pub giver_person_sub: String,
	pub division: String,
	pub giver_team: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
	pub league: String,
	pub season: String,
	pub division: String,
	pub team_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DivisionQuery {
	pub league: String,
	pub season: String,
	pub division: String,
}

/// POST /api/kudos
///
/// Resubmitting an identical rating returns the same event and changes nothing.
pub async fn save_kudos(
	State(state): State<AppState>,
	Json(submission): Json<KudosSubmission>,
) -> Result<Json<KudosEvent>, ServerError> {
	let event = state.kudos.save_kudos(submission).await?;
	Ok(Json(event))
}

/// GET /api/kudos/event
pub async fn get_event(
	State(state): State<AppState>,
	Query(key): Query<KudosEventKey>,
) -> Result<Json<KudosEvent>, ServerError> {
	Ok(Json(state.kudos.get_event(&key).await?))
}

/// GET /api/kudos/summary
pub async fn get_summary(
	State(state): State<AppState>,
	Query(key): Query<KudosSummaryKey>,
) -> Result<Json<KudosSummary>, ServerError> {
	Ok(Json(state.kudos.get_summary(&key).await?))
}

/// GET /api/kudos/given
pub async fn list_given_by_player(
	State(state): State<AppState>,
	Query(q): Query<GivenByPlayerQuery>,
) -> Result<Json<Vec<KudosEvent>>, ServerError> {
	let events = state
		.kudos
		.list_given_by_player(
			&q.league,
			&q.season,
			&q.giver_person_sub,
			&q.division,
			&q.giver_team,
		)
		.await?;
	Ok(Json(events))
}

/// GET /api/kudos/team
pub async fn list_summaries_for_team(
	State(state): State<AppState>,
	Query(q): Query<TeamQuery>,
) -> Result<Json<Vec<KudosSummary>>, ServerError> {
	let summaries = state
		.kudos
		.list_summaries_for_team(&q.league, &q.season, &q.division, &q.team_name)
		.await?;
	Ok(Json(summaries))
}

/// GET /api/kudos/division
pub async fn list_summaries_for_division(
	State(state): State<AppState>,
	Query(q): Query<DivisionQuery>,
) -> Result<Json<Vec<KudosSummary>>, ServerError> {
	let summaries = state
		.kudos
		.list_summaries_for_division(&q.league, &q.season, &q.division)
		.await?;
	Ok(Json(summaries))
}

/// GET /api/kudos/standings
pub async fn division_standings(
	State(state): State<AppState>,
	Query(q): Query<DivisionQuery>,
) -> Result<Json<Standings>, ServerError> {
	let standings = state
		.kudos
		.division_standings(&q.league, &q.season, &q.division)
		.await?;
	Ok(Json(standings))
}
