// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async IPP client for communicating with network printers.
//
// Uses the `ipp` crate's async API to send standard IPP operations:
//   - Print-Job               (RFC 8011 §4.2.1)
//   - Get-Printer-Attributes  (RFC 8011 §4.2.5)

use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;

use ipp::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use presslauf_core::SubmitConfig;
use presslauf_core::error::{PresslaufError, Result};

use crate::attributes::JobAttributes;
use crate::transport::{IppTransport, SubmitStatus};

/// Attributes returned by a Get-Printer-Attributes response, flattened to a
/// name → human-readable-value map.
pub type PrinterAttributes = HashMap<String, String>;

/// Async IPP client bound to a single printer URI.
///
/// All methods are async and require a Tokio runtime.
pub struct IppClient {
    uri: Uri,
}

impl IppClient {
    /// Create a client targeting the given `ipp://` or `ipps://` URI.
    pub fn new(uri: &str) -> Result<Self> {
        let parsed: Uri = uri
            .parse()
            .map_err(|e| PresslaufError::Ipp(format!("invalid URI '{uri}': {e}")))?;
        Ok(Self { uri: parsed })
    }

    /// The printer URI this client is targeting.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Query the device for its capabilities and current state.
    ///
    /// Useful when diagnosing a failed submission: an unreachable device
    /// and a device that dislikes the job attributes answer this probe very
    /// differently.
    #[instrument(skip(self), fields(uri = %self.uri))]
    pub async fn printer_attributes(&self) -> Result<PrinterAttributes> {
        let operation = IppOperationBuilder::get_printer_attributes(self.uri.clone()).build();
        let client = AsyncIppClient::new(self.uri.clone());

        debug!("sending Get-Printer-Attributes");
        let response = client
            .send(operation)
            .await
            .map_err(|e| PresslaufError::Ipp(format!("Get-Printer-Attributes: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "Get-Printer-Attributes failed");
            return Err(PresslaufError::Ipp(format!(
                "Get-Printer-Attributes returned status {code:?}"
            )));
        }

        let attrs = flatten_attributes(response.attributes());
        debug!(count = attrs.len(), "received printer attributes");
        Ok(attrs)
    }

    /// Submit a document as a Print-Job and report the three-way result.
    ///
    /// Device rejections (non-success IPP status) and transport breakdowns
    /// are reported separately so the caller can tell a device that said
    /// "no" from a device that never answered.
    #[instrument(skip(self, payload, attributes), fields(uri = %self.uri, job_name = %job_name, bytes = payload.len()))]
    pub async fn print_job(
        &self,
        payload: Vec<u8>,
        format_tag: &str,
        job_name: &str,
        attributes: &JobAttributes,
    ) -> SubmitStatus {
        let ipp_payload = IppPayload::new(Cursor::new(payload));

        let mut builder = IppOperationBuilder::print_job(self.uri.clone(), ipp_payload)
            .job_title(job_name)
            .document_format(format_tag);
        for (name, keyword) in attributes.keyword_pairs() {
            builder = builder.attribute(IppAttribute::new(
                name,
                IppValue::Keyword(keyword.to_string()),
            ));
        }
        let operation = builder.build();

        let client = AsyncIppClient::new(self.uri.clone());

        info!(format_tag, "sending Print-Job");
        let response = match client.send(operation).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Print-Job transport failure");
                return SubmitStatus::TransportError {
                    detail: format!("Print-Job: {e}"),
                };
            }
        };

        let code = response.header().status_code();
        if !code.is_success() {
            warn!(status = ?code, "device rejected Print-Job");
            return SubmitStatus::DeviceError {
                status: format!("{code:?}"),
            };
        }

        match extract_job_id(response.attributes()) {
            Some(printer_job_id) => {
                info!(printer_job_id, "print job accepted by device");
                SubmitStatus::Success { printer_job_id }
            }
            // Success status but no job-id is a protocol violation on the
            // device's side; surface it as a device error.
            None => SubmitStatus::DeviceError {
                status: "Print-Job response missing job-id attribute".into(),
            },
        }
    }
}

/// Production transport: one IPP Print-Job per submission phase, bounded by
/// the configured timeout.
pub struct IppDeviceTransport {
    timeout: Duration,
}

impl IppDeviceTransport {
    pub fn new(config: &SubmitConfig) -> Self {
        Self {
            timeout: config.transport_timeout(),
        }
    }
}

impl IppTransport for IppDeviceTransport {
    async fn submit(
        &self,
        device_uri: &str,
        job_name: &str,
        format_tag: &'static str,
        attributes: &JobAttributes,
        payload: Vec<u8>,
    ) -> SubmitStatus {
        let client = match IppClient::new(device_uri) {
            Ok(client) => client,
            Err(e) => {
                return SubmitStatus::TransportError {
                    detail: e.to_string(),
                };
            }
        };

        let round_trip = client.print_job(payload, format_tag, job_name, attributes);
        match tokio::time::timeout(self.timeout, round_trip).await {
            Ok(status) => status,
            Err(_) => SubmitStatus::TransportError {
                detail: format!(
                    "Print-Job timed out after {}s",
                    self.timeout.as_secs()
                ),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for parsing IPP responses
// ---------------------------------------------------------------------------

/// Flatten all attribute groups in an IPP response into a single map.
///
/// Multi-valued attributes are joined by the value's display form. This
/// intentionally discards group-level context in favour of a simpler lookup
/// interface.
fn flatten_attributes(attrs: &IppAttributes) -> PrinterAttributes {
    let mut map = HashMap::new();
    for group in attrs.groups() {
        for (name, attr) in group.attributes() {
            map.insert(name.clone(), format!("{}", attr.value()));
        }
    }
    map
}

/// Extract the `job-id` integer from a response's Job Attributes group.
fn extract_job_id(attrs: &IppAttributes) -> Option<i32> {
    for group in attrs.groups_of(DelimiterTag::JobAttributes) {
        if let Some(attr) = group.attributes().get("job-id")
            && let IppValue::Integer(id) = attr.value()
        {
            return Some(*id);
        }
    }
    None
}
