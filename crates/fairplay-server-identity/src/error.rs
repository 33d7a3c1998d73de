// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for identity provider access.

use thiserror::Error;

/// Errors that can occur when talking to the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
	/// No identity exists for the subject.
	#[error("identity not found: {0}")]
	NotFound(String),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The provider rejected our credentials.
	#[error("Unauthorized")]
	Unauthorized,

	/// Invalid or unparseable response body or attribute blob.
	#[error("Invalid response from identity provider: {0}")]
	InvalidResponse(String),

	/// The directory was configured with an unusable base URL.
	#[error("Invalid identity provider configuration: {0}")]
	Configuration(String),

	/// The provider returned an error status.
	#[error("Identity provider error: {status} - {message}")]
	Api { status: u16, message: String },
}

impl IdentityError {
	/// Whether retrying the whole operation may succeed.
	pub fn is_retryable(&self) -> bool {
		match self {
			IdentityError::Network(e) => e.is_timeout() || e.is_connect() || e.is_request(),
			IdentityError::Timeout => true,
			IdentityError::Api { status, .. } => *status >= 500 || *status == 429,
			IdentityError::NotFound(_)
			| IdentityError::Unauthorized
			| IdentityError::InvalidResponse(_)
			| IdentityError::Configuration(_) => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_retryable_classification() {
		assert!(IdentityError::Timeout.is_retryable());
		assert!(IdentityError::Api {
			status: 503,
			message: "unavailable".to_string()
		}
		.is_retryable());
		assert!(IdentityError::Api {
			status: 429,
			message: "slow down".to_string()
		}
		.is_retryable());
		assert!(!IdentityError::Api {
			status: 400,
			message: "bad".to_string()
		}
		.is_retryable());
		assert!(!IdentityError::Unauthorized.is_retryable());
		assert!(!IdentityError::NotFound("auth|x".to_string()).is_retryable());
	}
}
