// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides an in-memory [`Log`] implementation for testing and debugging purposes.
//! The `InMemoryLogger` captures records in memory rather than encoding them to a writer,
//! making it ideal for:
//!
//! - Unit testing code that logs through a [`Logger`](crate::Logger)
//! - Inspecting the exact key order and values a record was emitted with
//! - Programmatically examining log output
//!
//! ## Architecture
//!
//! The logger keeps a `Mutex<Vec<Vec<Value>>>` internally, one entry per record, exactly as
//! the record reached the end of the logging pipeline (valuers already bound).  Records can
//! be taken back raw or rendered as logfmt lines.

use crate::error::Result;
use crate::logfmt;
use crate::logger::Log;
use crate::value::Value;
use std::sync::Mutex;

/// An in-memory logger that stores every record it receives.
///
/// # Thread Safety
///
/// The `InMemoryLogger` is thread-safe and can be shared across multiple threads using
/// `Arc`. All operations on the internal buffer are protected by a mutex.
///
/// # Example
///
/// ```rust
/// use kvlog::{InMemoryLogger, Logger, Value};
/// use std::sync::Arc;
///
/// let memory = Arc::new(InMemoryLogger::new());
/// let logger = Logger::from_arc(memory.clone());
///
/// logger.log(vec![Value::from("msg"), Value::from("Test message")]).unwrap();
///
/// let logs = memory.drain_logs();
/// assert_eq!(logs, "msg=\"Test message\"");
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    records: Mutex<Vec<Vec<Value>>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes and required by Log trait
// - Default: Implemented with obvious zero-value (empty buffer)
// - Clone: NOT implemented - share through Arc so every handle sees the same buffer
// - PartialEq/Eq/Hash: NOT implemented - equality semantics unclear for loggers
// - Send/Sync: Automatically implemented due to Mutex usage (required for Log trait)

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Removes and returns every captured record, oldest first.
    pub fn drain_records(&self) -> Vec<Vec<Value>> {
        let mut records = self.records.lock().unwrap_or_else(|p| p.into_inner());
        std::mem::take(&mut *records)
    }

    /// Drains all records into a single string of logfmt lines joined by newlines.
    ///
    /// The internal buffer is cleared after this operation, so subsequent calls
    /// return an empty string unless new records have been added.
    pub fn drain_logs(&self) -> String {
        self.drain_records()
            .iter()
            .map(|record| logfmt::encode(record))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Log for InMemoryLogger {
    fn log(&self, keyvals: Vec<Value>) -> Result<()> {
        let mut records = self.records.lock().unwrap_or_else(|p| p.into_inner());
        records.push(keyvals);
        Ok(())
    }
}
