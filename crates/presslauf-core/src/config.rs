// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Submission configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by every submission through one pipeline instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Upper bound in seconds for one round trip to the device. Slow or
    /// unreachable devices must never block the calling context
    /// indefinitely.
    pub transport_timeout_secs: u64,
    /// Job name used when a request carries an empty filename.
    pub fallback_job_name: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            transport_timeout_secs: 30,
            fallback_job_name: "presslauf document".into(),
        }
    }
}

impl SubmitConfig {
    /// The transport timeout as a [`Duration`].
    pub fn transport_timeout(&self) -> Duration {
        Duration::from_secs(self.transport_timeout_secs)
    }

    /// The job name for a request, falling back to the configured default
    /// for empty filenames.
    pub fn job_name<'a>(&'a self, original_name: &'a str) -> &'a str {
        let trimmed = original_name.trim();
        if trimmed.is_empty() {
            &self.fallback_job_name
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_bounded() {
        let config = SubmitConfig::default();
        assert!(config.transport_timeout() > Duration::ZERO);
    }

    #[test]
    fn blank_filename_falls_back() {
        let config = SubmitConfig::default();
        assert_eq!(config.job_name("   "), "presslauf document");
        assert_eq!(config.job_name("report.pdf"), "report.pdf");
    }
}
