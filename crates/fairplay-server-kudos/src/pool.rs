// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqliteSynchronous};
use std::str::FromStr;

use crate::error::KudosStoreError;

/// Create a SqlitePool with WAL mode and common settings.
///
/// # Arguments
/// * `database_url` - SQLite connection string (e.g., "sqlite:./fairplay.db")
///
/// # Errors
/// Returns `KudosStoreError::InvalidData` if the URL is invalid, or
/// `KudosStoreError::Database` if the connection fails.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, KudosStoreError> {
	let options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| KudosStoreError::InvalidData(format!("Invalid database URL: {e}")))?
		.journal_mode(SqliteJournalMode::Wal)
		.synchronous(SqliteSynchronous::Normal)
		.create_if_missing(true);

	let pool = SqlitePool::connect_with(options).await?;

	tracing::debug!("database pool created");
	Ok(pool)
}

/// Apply the embedded kudos schema migrations.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), KudosStoreError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	tracing::debug!("kudos migrations applied");
	Ok(())
}
