// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Fairplay kudos rating system.
//!
//! A kudos event is one person's fair-play rating (-1, 0 or +1) for the
//! opposing team in a single match. This crate holds everything about kudos
//! that does not need I/O:
//! - [`KudosSubmission`] / [`KudosEvent`]: raw input and its validated form
//! - [`validate`]: structural and business-rule checks
//! - [`compute_standings`]: per-division fair-play tables
//! - [`append_latest_kudos`]: bookkeeping for a member's recent kudos dates

pub mod active_season;
pub mod error;
pub mod kudos;
pub mod standings;
pub mod validation;

pub use active_season::{
	append_latest_kudos, decode_active_seasons, encode_active_seasons, ActiveSeason,
	LATEST_KUDOS_LIMIT,
};
pub use error::{MergeError, ValidationError};
pub use kudos::{
	KudosEvent, KudosEventKey, KudosSubmission, KudosSummary, KudosSummaryKey, KudosValue,
};
pub use standings::{compute_standings, Standings, StandingsEntry};
pub use validation::{validate, validation_errors};
