// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The transport seam between the submission orchestrator and the wire.
//
// Callers need to tell a device that said "no" apart from a device that
// could not be reached at all, so the transport reports a three-way status
// instead of a flat error.

use crate::attributes::JobAttributes;

/// Result of one transport-level submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The device accepted the job and assigned it an identifier.
    Success { printer_job_id: i32 },
    /// The device answered with a non-success protocol status.
    DeviceError { status: String },
    /// The device could not be reached or the exchange broke off.
    TransportError { detail: String },
}

/// Carries one finished payload to an IPP device.
///
/// Implementations never panic; every failure flows through the returned
/// [`SubmitStatus`]. The round trip must be bounded by the configured
/// timeout so a dead device cannot block the calling context indefinitely.
#[allow(async_fn_in_trait)]
pub trait IppTransport {
    /// Submit one job phase to the device at `device_uri`.
    async fn submit(
        &self,
        device_uri: &str,
        job_name: &str,
        format_tag: &'static str,
        attributes: &JobAttributes,
        payload: Vec<u8>,
    ) -> SubmitStatus;
}
