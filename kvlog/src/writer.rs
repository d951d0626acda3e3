// SPDX-License-Identifier: MIT OR Apache-2.0
use std::io::Write;
use std::sync::Mutex;

/**
A writer shared by encoders, serializing whole records.

Each record is written with a single call under the lock, so lines from
concurrent loggers never interleave.
 */
pub struct SyncWriter {
    inner: Mutex<Box<dyn Write + Send>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Implemented manually - the boxed writer has no Debug bound
// - Clone: NOT implemented - the writer is a unique resource; share via Arc
// - PartialEq/Eq/Hash: NOT implemented - no meaningful equality for writers
// - Default: Implemented - writes to stderr
// - Send/Sync: Automatically implemented via Mutex<Box<dyn Write + Send>>

impl std::fmt::Debug for SyncWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncWriter").finish_non_exhaustive()
    }
}

impl Default for SyncWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl SyncWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Writes one encoded record and flushes.
    pub fn write_record(&self, record: &[u8]) -> std::io::Result<()> {
        let mut lock = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        lock.write_all(record)?;
        lock.flush()
    }
}
