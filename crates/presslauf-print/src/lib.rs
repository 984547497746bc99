// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// presslauf-print — IPP job attributes, transport, and the submission
// orchestrator. This crate bridges between the domain types defined in
// `presslauf-core` and the wire-level printing infrastructure.

pub mod attributes;
pub mod ipp_client;
pub mod spool;
pub mod submit;
pub mod transport;

pub use attributes::JobAttributes;
pub use ipp_client::{IppClient, IppDeviceTransport};
pub use spool::SpoolFile;
pub use submit::Submitter;
pub use transport::{IppTransport, SubmitStatus};
