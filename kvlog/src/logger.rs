// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Log`] trait and the [`Logger`] handle.

use crate::error::Result;
use crate::value::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// Something that consumes a finished record.
///
/// Encoders, filters and test fixtures implement this.  A record is a flat
/// sequence of alternating keys and values, already stripped of any
/// [`Valuer`](crate::Valuer)s.
pub trait Log: Debug + Send + Sync {
    fn log(&self, keyvals: Vec<Value>) -> Result<()>;
}

/**
A handle to a [`Log`] plus key/value pairs bound to every record it emits.

Deriving with [`Logger::with`] or [`Logger::with_prefix`] returns a new handle;
the original is unchanged.  Derived handles never nest: the bound pairs are
flattened into one prefix and one suffix around the same underlying [`Log`].
This keeps the number of stack frames between [`Logger::log`] and the
point where valuers run fixed, which is what [`Caller`](crate::Caller) counts on.
*/
#[derive(Clone)]
pub struct Logger {
    inner: Arc<dyn Log>,
    prefix: Vec<Value>,
    suffix: Vec<Value>,
    has_valuer: bool,
}

impl Logger {
    pub fn new<L: Log + 'static>(log: L) -> Self {
        Self::from_arc(Arc::new(log))
    }

    pub fn from_arc(inner: Arc<dyn Log>) -> Self {
        Self {
            inner,
            prefix: Vec::new(),
            suffix: Vec::new(),
            has_valuer: false,
        }
    }

    /// Returns a logger that appends `keyvals` after the per-call pairs of every record.
    pub fn with(&self, keyvals: impl IntoIterator<Item = Value>) -> Self {
        let mut next = self.clone();
        for kv in keyvals {
            next.has_valuer |= matches!(kv, Value::Valuer(_));
            next.suffix.push(kv);
        }
        next
    }

    /// Returns a logger that places `keyvals` before everything already bound.
    pub fn with_prefix(&self, keyvals: impl IntoIterator<Item = Value>) -> Self {
        let mut next = self.clone();
        let mut prefix: Vec<Value> = keyvals.into_iter().collect();
        next.has_valuer |= prefix.iter().any(|kv| matches!(kv, Value::Valuer(_)));
        prefix.extend(self.prefix.iter().cloned());
        next.prefix = prefix;
        next
    }

    /**
    Emits one record: bound prefix, then `keyvals`, then bound suffix.

    Bound valuers are evaluated here, on the emitting thread, before the
    record reaches the underlying [`Log`].  Valuers passed in `keyvals` are
    forwarded as they are.
    */
    // frame counted by Caller
    #[inline(never)]
    pub fn log(&self, keyvals: Vec<Value>) -> Result<()> {
        let mut record = Vec::with_capacity(self.prefix.len() + keyvals.len() + self.suffix.len());
        record.extend(self.prefix.iter().cloned());
        record.extend(keyvals);
        record.extend(self.suffix.iter().cloned());
        if self.has_valuer {
            let tail = record.len() - self.suffix.len();
            bind_values(&mut record[..self.prefix.len()]);
            bind_values(&mut record[tail..]);
        }
        self.inner.log(record)
    }

    /// Pairs bound ahead of every record.
    pub fn prefix(&self) -> &[Value] {
        &self.prefix
    }

    /// Pairs bound behind every record.
    pub fn suffix(&self) -> &[Value] {
        &self.suffix
    }
}

// frame counted by Caller
#[inline(never)]
fn bind_values(record: &mut [Value]) {
    for slot in record.iter_mut().skip(1).step_by(2) {
        if let Value::Valuer(valuer) = slot {
            let bound = valuer.value();
            *slot = bound;
        }
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("inner", &self.inner)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .finish()
    }
}

/// A [`Log`] that discards every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NopLogger;

impl Log for NopLogger {
    fn log(&self, _keyvals: Vec<Value>) -> Result<()> {
        Ok(())
    }
}
