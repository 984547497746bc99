// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Presslauf.

use thiserror::Error;

/// Top-level error type for all Presslauf operations.
///
/// Device rejections and transport failures are *not* errors — the
/// submission completed with a reportable result, carried by
/// [`crate::types::SubmissionOutcome`]. Everything here aborts a submission
/// before the device is contacted.
#[derive(Debug, Error)]
pub enum PresslaufError {
    /// A required input was absent. Surfaced immediately, no device contact.
    #[error("required input missing: {0}")]
    MissingInput(&'static str),

    /// A page-range expression was supplied but none of its tokens resolve
    /// to an in-bounds page. Distinct from an absent expression, which
    /// simply means "print everything".
    #[error("page range '{expr}' selects no pages (document has {total_pages} pages)")]
    MalformedRangeExpression { expr: String, total_pages: usize },

    /// The document model could not parse, extract from, or recompose the
    /// uploaded content.
    #[error("document transform failed: {0}")]
    Transform(String),

    /// An IPP operation outside the submission path failed (e.g. a
    /// capabilities probe).
    #[error("IPP request failed: {0}")]
    Ipp(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PresslaufError>;
