// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP error mapping for kudos operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fairplay_server_kudos::KudosError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
	pub error: String,
	pub messages: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error(transparent)]
	Kudos(#[from] KudosError),
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let ServerError::Kudos(err) = self;

		let (status, error, message) = match &err {
			KudosError::Validation(validation) => {
				let body = ValidationErrorResponse {
					error: "validation_failed".to_string(),
					messages: validation.messages.clone(),
				};
				return (StatusCode::BAD_REQUEST, Json(body)).into_response();
			}
			KudosError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
			KudosError::InvalidState(msg) => (StatusCode::CONFLICT, "invalid_state", msg.clone()),
			KudosError::Identity(e) => {
				tracing::error!(error = %e, retryable = e.is_retryable(), "identity provider failure");
				(
					StatusCode::BAD_GATEWAY,
					"identity_unavailable",
					"identity provider request failed".to_string(),
				)
			}
			KudosError::Store(e) => {
				tracing::error!(error = %e, "kudos store failure");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					"internal_error",
					"internal server error".to_string(),
				)
			}
		};

		let body = ErrorResponse {
			error: error.to_string(),
			message,
		};
		(status, Json(body)).into_response()
	}
}
