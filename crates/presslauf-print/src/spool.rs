// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scoped spool file for the in-flight payload of one submission.
//
// The staged copy lives exactly as long as the `SpoolFile` value: dropping
// it removes the file, so every exit path of a submission — success,
// transform failure, transport failure, or an abandoned future — releases
// the staging area without per-branch cleanup code.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use presslauf_core::error::Result;

/// SHA-256 content hash as lowercase hex.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// A payload staged on disk for the duration of one device round trip.
pub struct SpoolFile {
    file: NamedTempFile,
    len: u64,
    content_hash: String,
}

impl SpoolFile {
    /// Write `payload` to a fresh spool file.
    #[instrument(skip_all, fields(bytes_len = payload.len()))]
    pub fn stage(payload: &[u8]) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(payload)?;
        file.flush()?;

        let content_hash = hash_bytes(payload);
        debug!(path = %file.path().display(), hash = %content_hash, "payload staged");

        Ok(Self {
            file,
            len: payload.len() as u64,
            content_hash,
        })
    }

    /// Size of the staged payload in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// SHA-256 hash of the staged payload, for traceability across the two
    /// phases of a manual-duplex job.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Location of the staged copy on disk.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the staged payload back from disk.
    pub fn read_back(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.file.path())?)
    }
}
