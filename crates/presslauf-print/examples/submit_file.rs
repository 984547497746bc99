// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end demo: submit a file to an IPP printer.
//
//   cargo run --example submit_file -- document.pdf ipp://192.168.1.50:631/ipp/print "1-3, 5"
//
// For a manual-duplex run, pass "odd" as the fourth argument, wait for the
// first half to print, reload the stack, and run again with "even".

use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use presslauf_core::diagnose;
use presslauf_core::types::{DuplexDirective, PrintRequest, SubmissionOutcome};
use presslauf_core::SubmitConfig;
use presslauf_print::{IppDeviceTransport, Submitter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(device_uri)) = (args.next(), args.next()) else {
        eprintln!("usage: submit_file <document> <device-uri> [page-range] [odd|even|duplex]");
        process::exit(2);
    };
    let page_range = args.next().unwrap_or_default();
    let duplex = match args.next().as_deref() {
        Some("odd") => DuplexDirective::ManualOdd,
        Some("even") => DuplexDirective::ManualEven,
        Some("duplex") => DuplexDirective::AutoHardware,
        _ => DuplexDirective::Simplex,
    };

    let content = match std::fs::read(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            process::exit(1);
        }
    };
    let mime = if path.to_ascii_lowercase().ends_with(".pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    };
    let name = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut request = PrintRequest::new(content, mime, name);
    request.page_range = page_range;
    request.duplex = duplex;

    let config = SubmitConfig::default();
    let submitter = Submitter::new(IppDeviceTransport::new(&config), config);

    match submitter.submit(&request, &device_uri).await {
        Ok(outcome) => match diagnose::diagnose_outcome(&outcome) {
            None => {
                if let SubmissionOutcome::Accepted {
                    printer_job_id,
                    needs_second_phase,
                    page_directives_ignored,
                } = outcome
                {
                    println!("accepted as job {printer_job_id}");
                    if page_directives_ignored {
                        println!("note: page selection has no effect on this file type");
                    }
                    if needs_second_phase {
                        println!(
                            "odd pages sent — reload the printed stack, then rerun with \"even\""
                        );
                    }
                }
            }
            Some(diag) => {
                eprintln!("{}", diag.message);
                eprintln!("{}", diag.suggestion);
                process::exit(1);
            }
        },
        Err(err) => {
            let diag = diagnose::diagnose_error(&err);
            eprintln!("{}", diag.message);
            eprintln!("{}", diag.suggestion);
            process::exit(1);
        }
    }
}
