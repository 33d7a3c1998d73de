// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fairplay kudos HTTP server.

pub mod api;
pub mod error;
pub mod logging;
pub mod routes;
pub mod startup;
pub mod version;

pub use api::{create_router, AppState};
pub use error::ServerError;
pub use startup::{build_identity_directory, StartupError};
