// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub database: &'static str,
	pub version: &'static str,
}

/// GET /health - liveness plus a database probe.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let (status_code, status, database) = match state.kudos.store().health_check().await {
		Ok(()) => (StatusCode::OK, "healthy", "ok"),
		Err(e) => {
			tracing::warn!(error = %e, "database health check failed");
			(StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "unavailable")
		}
	};

	(
		status_code,
		Json(HealthResponse {
			status,
			database,
			version: env!("CARGO_PKG_VERSION"),
		}),
	)
}
