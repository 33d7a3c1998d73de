// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for fairplay-server.

pub mod database;
pub mod http;
pub mod identity;
pub mod logging;

pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use identity::{IdentityConfig, IdentityConfigLayer, IdentityProvider};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
