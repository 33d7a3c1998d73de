// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kudos storage and service layer for the Fairplay server.
//!
//! - [`KudosStore`]: idempotent event + summary writes and the read queries
//! - [`SqliteKudosStore`]: the SQLite implementation
//! - [`KudosService`]: validation, storage and identity bookkeeping in one call

pub mod error;
pub mod pool;
pub mod service;
pub mod store;

#[cfg(test)]
mod testing;

pub use error::{KudosError, KudosStoreError};
pub use pool::{create_pool, run_migrations};
pub use service::KudosService;
pub use store::{KudosStore, RecordOutcome, SqliteKudosStore};
