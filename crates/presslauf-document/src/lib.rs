// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// presslauf-document — Document processing for the Presslauf submission
// pipeline.
//
// Provides the page-range resolver (human expression to concrete page set)
// and PDF page extraction (explicit indices or odd/even parity) on top of
// `lopdf`. Only paginated container formats pass through here; opaque
// payloads bypass this crate entirely.

pub mod pdf;
pub mod range;

pub use pdf::slicer::PdfSlice;
pub use range::resolve;
