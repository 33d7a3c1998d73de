// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for kudos storage and the kudos service.

use fairplay_kudos_core::{MergeError, ValidationError};
use fairplay_server_identity::IdentityError;
use thiserror::Error;

/// Errors from the kudos store.
#[derive(Debug, Error)]
pub enum KudosStoreError {
	/// Database error
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	/// A stored row could not be mapped back to a domain value
	#[error("invalid kudos data: {0}")]
	InvalidData(String),

	/// Schema migration failed
	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),
}

/// Errors surfaced by [`crate::KudosService`].
#[derive(Debug, Error)]
pub enum KudosError {
	/// The submission failed validation. Never retried.
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// The requested event or summary does not exist.
	#[error("not found: {0}")]
	NotFound(String),

	/// Storage failure. Safe to retry the whole operation.
	#[error(transparent)]
	Store(#[from] KudosStoreError),

	/// The giver's identity record lacks the expected season membership.
	#[error("invalid state: {0}")]
	InvalidState(String),

	/// Transport or API failure from the identity provider.
	#[error("identity provider error: {0}")]
	Identity(IdentityError),
}

impl KudosError {
	/// Whether the caller may retry the operation unchanged.
	pub fn is_retryable(&self) -> bool {
		match self {
			KudosError::Store(_) => true,
			KudosError::Identity(e) => e.is_retryable(),
			KudosError::Validation(_) | KudosError::NotFound(_) | KudosError::InvalidState(_) => false,
		}
	}
}

impl From<IdentityError> for KudosError {
	fn from(e: IdentityError) -> Self {
		match e {
			IdentityError::NotFound(subject) => {
				KudosError::InvalidState(format!("no identity record for {subject}"))
			}
			other => KudosError::Identity(other),
		}
	}
}

impl From<MergeError> for KudosError {
	fn from(e: MergeError) -> Self {
		KudosError::InvalidState(e.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_retry_policy() {
		assert!(KudosError::Store(KudosStoreError::InvalidData("x".into())).is_retryable());
		assert!(KudosError::from(IdentityError::Timeout).is_retryable());
		assert!(!KudosError::from(IdentityError::Unauthorized).is_retryable());
		assert!(!KudosError::Validation(ValidationError::new(vec![])).is_retryable());
		assert!(!KudosError::InvalidState("missing".into()).is_retryable());
	}

	#[test]
	fn test_missing_identity_is_invalid_state() {
		let err = KudosError::from(IdentityError::NotFound("auth|x".into()));
		assert!(matches!(err, KudosError::InvalidState(_)));
	}
}
