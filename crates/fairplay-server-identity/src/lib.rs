// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Identity provider access for Fairplay.
//!
//! Member season data lives on the identity provider as a single
//! `active_seasons` attribute. This crate exposes the narrow contract the
//! kudos service needs (read the whole blob, rewrite the whole blob) behind
//! [`IdentityDirectory`], with an HTTP client and an in-memory directory.

mod directory;
mod error;
mod http;
mod memory;

pub use directory::{IdentityDirectory, IdentityUser, ACTIVE_SEASONS_ATTRIBUTE};
pub use error::IdentityError;
pub use http::HttpIdentityDirectory;
pub use memory::InMemoryIdentityDirectory;
