// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable diagnosis of submission failures.
//
// Every failure path is mapped to plain English plus an actionable
// suggestion, so a person can fix a wrong device address, an unreachable
// network, or a device-side attribute rejection without reading logs.
// The classification also tells the caller whether retrying can help.

use crate::error::PresslaufError;
use crate::types::{ErrorClass, SubmissionOutcome};

/// A human-readable account of what went wrong and what to do about it.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same submission can succeed.
    pub retriable: bool,
    pub class: ErrorClass,
}

/// Diagnose an error that aborted a submission before the device was
/// contacted.
pub fn diagnose_error(err: &PresslaufError) -> Diagnosis {
    match err {
        PresslaufError::MissingInput(field) => Diagnosis {
            message: format!("Nothing to print: no {field} was provided."),
            suggestion: "Choose a document and a printer, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        },

        PresslaufError::MalformedRangeExpression { expr, total_pages } => Diagnosis {
            message: format!("The page range \"{expr}\" doesn't match any pages."),
            suggestion: format!(
                "This document has {total_pages} pages. Use numbers like \"1-3, 5\" within that range, or clear the field to print everything."
            ),
            retriable: false,
            class: ErrorClass::UserAction,
        },

        PresslaufError::Transform(_) => Diagnosis {
            message: "There's a problem with this document.".into(),
            suggestion: "The file may be damaged. Try opening it on a computer to check it works, or re-export it as a PDF.".into(),
            retriable: false,
            class: ErrorClass::Permanent,
        },

        PresslaufError::Ipp(detail) => diagnose_transport_detail(detail),

        PresslaufError::Io(_) => Diagnosis {
            message: "There was a problem reading or writing a file.".into(),
            suggestion: "Try again. If this keeps happening, the device's storage may be full.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        },

        PresslaufError::Serialization(_) => Diagnosis {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        },
    }
}

/// Diagnose a completed submission. Returns `None` for accepted jobs.
pub fn diagnose_outcome(outcome: &SubmissionOutcome) -> Option<Diagnosis> {
    match outcome {
        SubmissionOutcome::Accepted { .. } => None,
        SubmissionOutcome::DeviceRejected { status } => Some(diagnose_device_status(status)),
        SubmissionOutcome::TransportFailure { detail } => Some(diagnose_transport_detail(detail)),
    }
}

/// Map an IPP status string reported by the device to a diagnosis.
///
/// Statuses arrive either as RFC 8011 keywords
/// (`client-error-document-format-not-supported`) or as the transport's
/// debug rendering of the same code (`ClientErrorDocumentFormatNotSupported`),
/// so matching is done hyphen- and case-insensitively.
fn diagnose_device_status(status: &str) -> Diagnosis {
    let lower = status.to_ascii_lowercase().replace('-', "");

    if lower.contains("clienterrordocumentformat") {
        Diagnosis {
            message: "The printer doesn't understand this file type.".into(),
            suggestion: "Try saving the file as a PDF first, then print the PDF.".into(),
            retriable: false,
            class: ErrorClass::Permanent,
        }
    } else if lower.contains("clienterrornotpossible") || lower.contains("clienterrorattributes") {
        Diagnosis {
            message: "The printer can't handle those settings.".into(),
            suggestion: "Try changing the print settings (duplex, colour) and print again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else if lower.contains("mediaempty") || lower.contains("out of paper") {
        Diagnosis {
            message: "The printer is out of paper.".into(),
            suggestion: "Add paper to the printer's tray, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else if lower.contains("tonerempty") || lower.contains("markersupply") {
        Diagnosis {
            message: "The printer needs new ink or toner.".into(),
            suggestion: "Replace the cartridge, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else if lower.contains("dooropen") || lower.contains("coveropen") {
        Diagnosis {
            message: "A door or cover is open on the printer.".into(),
            suggestion: "Close all doors and covers on the printer, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else if lower.contains("paperjam") || lower.contains("mediajam") {
        Diagnosis {
            message: "Paper is stuck in the printer.".into(),
            suggestion: "Gently pull the stuck paper out and close all doors, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else if lower.contains("servererror") {
        Diagnosis {
            message: "The printer reported an internal error.".into(),
            suggestion: "Turn the printer off, wait ten seconds, and turn it back on.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        }
    } else {
        Diagnosis {
            message: format!("The printer declined the job ({status})."),
            suggestion: "Check the printer's display for details, then try again.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    }
}

/// Map a transport-level failure detail to a diagnosis.
fn diagnose_transport_detail(detail: &str) -> Diagnosis {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("timed out") || lower.contains("timeout") {
        Diagnosis {
            message: "The printer didn't respond in time.".into(),
            suggestion: "The printer might be busy or turned off. Check it's on and connected, then try again.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        }
    } else if lower.contains("connection refused") {
        Diagnosis {
            message: "The printer refused the connection.".into(),
            suggestion: "The printer may be off or not accepting network connections. Try turning it off and on again.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        }
    } else if lower.contains("connection reset") || lower.contains("broken pipe") {
        Diagnosis {
            message: "The connection to the printer was interrupted.".into(),
            suggestion: "This sometimes happens on Wi-Fi. Try again.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        }
    } else if lower.contains("invalid uri") || lower.contains("invalid url") {
        Diagnosis {
            message: "The printer address doesn't look right.".into(),
            suggestion: "Check the address. It should look like ipp://192.168.1.100:631/ipp/print.".into(),
            retriable: false,
            class: ErrorClass::UserAction,
        }
    } else {
        Diagnosis {
            message: "The printer couldn't be reached.".into(),
            suggestion: format!(
                "Make sure this device and the printer are on the same network, then try again. (Detail: {detail})"
            ),
            retriable: true,
            class: ErrorClass::Transient,
        }
    }
}
