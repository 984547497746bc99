// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The submission orchestrator: one request in, one outcome out.
//
// Sequences range resolution, page splitting, attribute construction, and
// the transport call, then maps the transport's answer onto a normalized
// outcome. Every submission is self-contained — no state outlives the call,
// so any number of submissions may run concurrently on independent tasks.

use presslauf_core::SubmitConfig;
use presslauf_core::error::{PresslaufError, Result};
use presslauf_core::types::{DuplexDirective, Parity, PrintRequest, SubmissionOutcome};
use presslauf_document::{PdfSlice, resolve};
use tracing::{debug, info, instrument, warn};

use crate::attributes::JobAttributes;
use crate::spool::SpoolFile;
use crate::transport::{IppTransport, SubmitStatus};

/// Drives print requests through transformation and submission.
pub struct Submitter<T: IppTransport> {
    transport: T,
    config: SubmitConfig,
}

impl<T: IppTransport> Submitter<T> {
    pub fn new(transport: T, config: SubmitConfig) -> Self {
        Self { transport, config }
    }

    /// Run one submission phase end to end.
    ///
    /// Missing inputs, a useless page range, and document-model failures
    /// abort before the device is contacted. Device rejections and
    /// transport breakdowns complete the call with the corresponding
    /// outcome variant instead, carrying the detail verbatim; nothing is
    /// retried automatically.
    ///
    /// Cancellation: dropping the returned future before the transport call
    /// begins releases the staged payload without contacting the device.
    /// Once the transport call has started, cancellation is best-effort
    /// only — the device may still receive and print the job.
    #[instrument(
        skip(self, request),
        fields(kind = ?request.kind, duplex = ?request.duplex, bytes = request.content.len())
    )]
    pub async fn submit(
        &self,
        request: &PrintRequest,
        device_uri: &str,
    ) -> Result<SubmissionOutcome> {
        if request.content.is_empty() {
            return Err(PresslaufError::MissingInput("document content"));
        }
        if device_uri.trim().is_empty() {
            return Err(PresslaufError::MissingInput("device address"));
        }

        let transformed = transform(request)?;
        let attributes = JobAttributes::for_job(request.grayscale, request.duplex);

        let spool = SpoolFile::stage(&transformed.payload)?;
        info!(
            bytes = spool.len(),
            hash = %spool.content_hash(),
            "payload staged for submission"
        );

        let job_name = self.config.job_name(&request.original_name);
        let status = self
            .transport
            .submit(
                device_uri,
                job_name,
                request.kind.ipp_format_tag(),
                &attributes,
                transformed.payload,
            )
            .await;

        let outcome = match status {
            SubmitStatus::Success { printer_job_id } => {
                info!(
                    printer_job_id,
                    needs_second_phase = transformed.needs_second_phase,
                    "job accepted by device"
                );
                SubmissionOutcome::Accepted {
                    printer_job_id,
                    needs_second_phase: transformed.needs_second_phase,
                    page_directives_ignored: transformed.directives_ignored,
                }
            }
            SubmitStatus::DeviceError { status } => {
                warn!(%status, "device rejected the job");
                SubmissionOutcome::DeviceRejected { status }
            }
            SubmitStatus::TransportError { detail } => {
                warn!(%detail, "device unreachable");
                SubmissionOutcome::TransportFailure { detail }
            }
        };

        // The spool guard lives until here so the staged copy spans the
        // whole device round trip.
        drop(spool);
        Ok(outcome)
    }
}

/// The final payload of one submission phase, plus what the caller must be
/// told about how it was produced.
struct Transformed {
    payload: Vec<u8>,
    /// This was the odd phase of a manual-duplex job and an even phase
    /// exists; the caller must prompt for the flip and resubmit.
    needs_second_phase: bool,
    /// Page-selection directives were supplied for a payload that has no
    /// pages to select.
    directives_ignored: bool,
}

/// Apply page range and duplex parity to the request's content.
///
/// The range filter runs first; parity then alternates over the *filtered*
/// sequence, which is what "print these pages, half at a time" means at the
/// device. A full-document submission passes the original bytes through
/// untouched instead of round-tripping them through the document model.
fn transform(request: &PrintRequest) -> Result<Transformed> {
    let parity = request.duplex.parity();
    let range_requested = !request.page_range.trim().is_empty();

    if !request.kind.is_paginated() {
        let directives_ignored = range_requested || parity.is_some();
        if directives_ignored {
            warn!(
                kind = ?request.kind,
                "payload is not paginated; page-selection directives ignored"
            );
        }
        return Ok(Transformed {
            payload: request.content.clone(),
            needs_second_phase: false,
            directives_ignored,
        });
    }

    let slice = PdfSlice::from_bytes(&request.content)?;
    let total = slice.page_count();
    let selection = resolve(&request.page_range, total)?;

    if !selection.is_constrained() && parity.is_none() {
        debug!(total, "no page transformation needed, passing document through");
        return Ok(Transformed {
            payload: request.content.clone(),
            needs_second_phase: false,
            directives_ignored: false,
        });
    }

    let base = selection.resolved_indices(total);
    let needs_second_phase = request.duplex == DuplexDirective::ManualOdd
        && !Parity::Even.select(&base).is_empty();

    let final_indices = match parity {
        Some(parity) => parity.select(&base),
        None => base,
    };
    if final_indices.is_empty() {
        // Only reachable through parity: an even phase over a single
        // surviving page, or an empty document.
        return Err(PresslaufError::Transform(
            "the requested duplex phase selects no pages".into(),
        ));
    }

    debug!(
        total,
        selected = final_indices.len(),
        "extracting pages for this phase"
    );
    let payload = slice.extract_pages(&final_indices)?;

    Ok(Transformed {
        payload,
        needs_second_phase,
        directives_ignored: false,
    })
}
