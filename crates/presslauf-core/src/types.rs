// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Presslauf submission pipeline.

use serde::{Deserialize, Serialize};

/// Payload format classification for an uploaded document.
///
/// Only paginated container formats support page-level transformation; every
/// other upload is forwarded to the device untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Pdf,
    /// Anything we cannot paginate — forwarded byte-for-byte.
    OpaqueBinary,
}

impl ContentKind {
    /// Classify an upload by its MIME type.
    ///
    /// Unrecognized MIME types map to [`ContentKind::OpaqueBinary`], never an
    /// error — the device gets to decide whether it can render the payload.
    pub fn from_mime_type(mime: &str) -> Self {
        match mime.trim().to_ascii_lowercase().as_str() {
            "application/pdf" | "application/x-pdf" => Self::Pdf,
            _ => Self::OpaqueBinary,
        }
    }

    /// IPP `document-format` tag (RFC 8011 §5.1.9) for this payload.
    pub fn ipp_format_tag(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::OpaqueBinary => "application/octet-stream",
        }
    }

    /// Whether page counting, extraction, and recomposition apply.
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// How the caller wants double-sided output produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplexDirective {
    /// Single-sided, no duplex handling.
    Simplex,
    /// Device hardware flips the sheet (`sides` job attribute).
    AutoHardware,
    /// First phase of manual duplex: odd-numbered pages only.
    ManualOdd,
    /// Second phase of manual duplex: even-numbered pages only.
    ManualEven,
}

impl DuplexDirective {
    /// The page parity this directive selects, if any.
    ///
    /// `AutoHardware` returns `None`: hardware duplex prints every page and
    /// two-sidedness is expressed as a job attribute instead.
    pub fn parity(&self) -> Option<Parity> {
        match self {
            Self::ManualOdd => Some(Parity::Odd),
            Self::ManualEven => Some(Parity::Even),
            Self::Simplex | Self::AutoHardware => None,
        }
    }
}

/// Page parity within an ordered page sequence.
///
/// Parity is positional: it is evaluated against a page's index in whatever
/// sequence is being split, not against the page's number in the original
/// document. Splitting a range-filtered sequence therefore alternates over
/// the filtered order, which is what "print these pages, half at a time"
/// means to the person standing at the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    /// Positions 0, 2, 4, … — the human-numbered odd pages 1, 3, 5, …
    Odd,
    /// Positions 1, 3, 5, … — the human-numbered even pages 2, 4, 6, …
    Even,
}

impl Parity {
    /// Whether the given zero-based position belongs to this parity.
    pub fn matches(&self, position: usize) -> bool {
        match self {
            Self::Odd => position % 2 == 0,
            Self::Even => position % 2 == 1,
        }
    }

    /// Select the elements of `indices` at positions of this parity,
    /// preserving order.
    pub fn select(&self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .enumerate()
            .filter(|(position, _)| self.matches(*position))
            .map(|(_, idx)| *idx)
            .collect()
    }
}

/// One print submission as handed over by the file receiver / client app.
///
/// Immutable once constructed; the orchestrator never mutates the request,
/// so the client can resubmit the same value for the second manual-duplex
/// phase with only the directive changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintRequest {
    /// Raw uploaded bytes, complete in memory.
    pub content: Vec<u8>,
    pub kind: ContentKind,
    /// Original filename, used as the IPP job name.
    pub original_name: String,
    /// Page-range expression, e.g. `"1-3, 5"`. Empty means no constraint.
    pub page_range: String,
    pub grayscale: bool,
    pub duplex: DuplexDirective,
}

impl PrintRequest {
    /// Build a request with default directives (full document, colour,
    /// single-sided). Callers set the directive fields they need.
    pub fn new(content: Vec<u8>, mime_type: &str, original_name: impl Into<String>) -> Self {
        Self {
            content,
            kind: ContentKind::from_mime_type(mime_type),
            original_name: original_name.into(),
            page_range: String::new(),
            grayscale: false,
            duplex: DuplexDirective::Simplex,
        }
    }
}

/// Result of resolving a page-range expression against a page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSelection {
    /// No range expression was supplied — the full document is used.
    ///
    /// Distinct from a selection of zero pages, which is unrepresentable:
    /// an expression resolving to nothing is rejected at resolution time.
    NoConstraint,
    /// Strictly ascending, duplicate-free, zero-based page indices.
    Pages(Vec<usize>),
}

impl PageSelection {
    /// Whether a range constraint is in effect.
    pub fn is_constrained(&self) -> bool {
        matches!(self, Self::Pages(_))
    }

    /// The concrete index list for a document of `total_pages` pages.
    pub fn resolved_indices(&self, total_pages: usize) -> Vec<usize> {
        match self {
            Self::NoConstraint => (0..total_pages).collect(),
            Self::Pages(indices) => indices.clone(),
        }
    }
}

/// Terminal result of one submission, rendered by the client app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The device accepted the job.
    Accepted {
        /// Job identifier assigned by the device (IPP `job-id`).
        printer_job_id: i32,
        /// The odd phase of a manual-duplex job went out; the client must
        /// prompt for the physical page flip and resubmit the original
        /// content with [`DuplexDirective::ManualEven`].
        needs_second_phase: bool,
        /// Page-selection directives were supplied but the payload is not
        /// paginated, so they had no effect.
        page_directives_ignored: bool,
    },
    /// The device answered with a non-success protocol status, reproduced
    /// verbatim for diagnostic display. Not retried automatically.
    DeviceRejected { status: String },
    /// The device could not be reached or the connection broke mid-request.
    /// Retry policy is the caller's decision.
    TransportFailure { detail: String },
}

impl SubmissionOutcome {
    /// Plain acceptance with no second phase and nothing ignored.
    pub fn accepted(printer_job_id: i32) -> Self {
        Self::Accepted {
            printer_job_id,
            needs_second_phase: false,
            page_directives_ignored: false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Classification of a failure for the caller's retry policy.
///
/// Advisory only — the pipeline itself never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClass {
    /// Network blip, timeout, busy device — safe to retry.
    Transient,
    /// User must take action (fix the range, add paper, pick a device).
    UserAction,
    /// Retrying with the same inputs cannot help.
    Permanent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_mime_types_are_paginated() {
        assert_eq!(ContentKind::from_mime_type("application/pdf"), ContentKind::Pdf);
        assert_eq!(
            ContentKind::from_mime_type(" Application/PDF "),
            ContentKind::Pdf
        );
        assert!(ContentKind::from_mime_type("application/pdf").is_paginated());
    }

    #[test]
    fn unknown_mime_type_is_opaque_not_an_error() {
        let kind = ContentKind::from_mime_type("application/vnd.weird.thing");
        assert_eq!(kind, ContentKind::OpaqueBinary);
        assert_eq!(kind.ipp_format_tag(), "application/octet-stream");
        assert!(!kind.is_paginated());
    }

    #[test]
    fn directive_parity_mapping() {
        assert_eq!(DuplexDirective::ManualOdd.parity(), Some(Parity::Odd));
        assert_eq!(DuplexDirective::ManualEven.parity(), Some(Parity::Even));
        assert_eq!(DuplexDirective::Simplex.parity(), None);
        assert_eq!(DuplexDirective::AutoHardware.parity(), None);
    }

    #[test]
    fn parity_is_positional() {
        // Filtered page set 2-4 of a larger document: indices [1, 2, 3].
        // Odd phase takes positions 0 and 2 — original pages 2 and 4.
        assert_eq!(Parity::Odd.select(&[1, 2, 3]), vec![1, 3]);
        assert_eq!(Parity::Even.select(&[1, 2, 3]), vec![2]);
    }

    #[test]
    fn parity_of_empty_sequence_is_empty() {
        assert_eq!(Parity::Odd.select(&[]), Vec::<usize>::new());
        assert_eq!(Parity::Even.select(&[]), Vec::<usize>::new());
    }

    #[test]
    fn odd_selection_alternates_on_reapplication() {
        let first = Parity::Odd.select(&[0, 1, 2, 3, 4]);
        assert_eq!(first, vec![0, 2, 4]);
        // The survivors re-index as positions 0, 1, 2; a second odd pass is
        // again positional and keeps positions 0 and 2.
        let positions: Vec<usize> = (0..first.len()).collect();
        assert_eq!(Parity::Odd.select(&positions), vec![0, 2]);
    }

    #[test]
    fn no_constraint_resolves_to_full_document() {
        assert_eq!(
            PageSelection::NoConstraint.resolved_indices(3),
            vec![0, 1, 2]
        );
        assert!(!PageSelection::NoConstraint.is_constrained());
    }

    #[test]
    fn explicit_pages_resolve_to_themselves() {
        let sel = PageSelection::Pages(vec![0, 4]);
        assert_eq!(sel.resolved_indices(10), vec![0, 4]);
        assert!(sel.is_constrained());
    }
}
