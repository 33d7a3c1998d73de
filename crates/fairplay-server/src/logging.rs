// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup.

use fairplay_server_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides `config.level`.
pub fn init_tracing(config: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.level.clone().into());

	let (json, pretty) = match config.format {
		LogFormat::Json => (Some(fmt::layer().json()), None),
		LogFormat::Pretty => (None, Some(fmt::layer())),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(json)
		.with(pretty)
		.init();
}
