// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presslauf — core types, error definitions, and diagnostics shared across
// all crates.

pub mod config;
pub mod diagnose;
pub mod error;
pub mod types;

pub use config::SubmitConfig;
pub use error::PresslaufError;
pub use types::*;
