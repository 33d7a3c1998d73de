// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use axum::{
	routing::{get, post},
	Router,
};
use fairplay_server_kudos::KudosService;

use crate::routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub kudos: KudosService,
}

impl AppState {
	pub fn new(kudos: KudosService) -> Self {
		Self { kudos }
	}
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/kudos", post(routes::kudos::save_kudos))
		.route("/api/kudos/event", get(routes::kudos::get_event))
		.route("/api/kudos/summary", get(routes::kudos::get_summary))
		.route("/api/kudos/given", get(routes::kudos::list_given_by_player))
		.route("/api/kudos/team", get(routes::kudos::list_summaries_for_team))
		.route(
			"/api/kudos/division",
			get(routes::kudos::list_summaries_for_division),
		)
		.route("/api/kudos/standings", get(routes::kudos::division_standings))
		.with_state(state)
}
