// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::{LogSink, RuntimeInfo};
use crate::value::{ErrorRef, Value};
use std::sync::Arc;

/// Frames between the application's call and the sink: `Logger::info` or `Logger::error`.
const CALL_DEPTH: usize = 1;

/**
The handle application code logs through.

A `Logger` is a cheap, cloneable value: a shared sink plus a verbosity.
Deriving (`v`, `with_name`, `with_values`, `with_call_depth`) returns a new
`Logger`; the one it came from is unchanged.

```rust
use logface::{kvs, Logger};

let log = Logger::discard().with_name("worker").with_values(&kvs!["id", 7]);
log.info("started", &kvs!["queue", "default"]);
log.v(2).info("polling", &[]);
log.error(None, "gave up", &kvs!["attempts", 3]);
```
*/
#[derive(Debug, Clone, Default)]
pub struct Logger {
    sink: Option<Arc<dyn LogSink>>,
    level: usize,
}

impl Logger {
    /// Wraps `sink`, calling [`LogSink::init`] on it.
    pub fn new<S: LogSink>(mut sink: S) -> Self {
        sink.init(RuntimeInfo {
            call_depth: CALL_DEPTH,
        });
        Self {
            sink: Some(Arc::new(sink)),
            level: 0,
        }
    }

    /// A logger that drops everything.
    pub fn discard() -> Self {
        Self {
            sink: None,
            level: 0,
        }
    }

    fn derived(&self, sink: Box<dyn LogSink>) -> Self {
        Self {
            sink: Some(Arc::from(sink)),
            level: self.level,
        }
    }

    /// Returns a logger `level` steps more verbose.  Nested calls add up.
    pub fn v(&self, level: usize) -> Self {
        Self {
            sink: self.sink.clone(),
            level: self.level.saturating_add(level),
        }
    }

    pub fn verbosity(&self) -> usize {
        self.level
    }

    /// Whether [`Logger::info`] would reach the sink at the current verbosity.
    pub fn enabled(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| sink.enabled(self.level))
    }

    /**
    Logs a non-error message with the given key/value pairs.

    Dropped unless the sink reports the current verbosity as enabled.

    This function always occupies exactly one stack frame between the caller
    and the sink ([`RuntimeInfo::call_depth`]), in every build profile.
    */
    #[inline(never)]
    pub fn info(&self, msg: &str, keys_and_values: &[Value]) {
        if let Some(sink) = &self.sink {
            if sink.enabled(self.level) {
                sink.info(self.level, msg, keys_and_values);
            }
        }
        frame_barrier();
    }

    /**
    Logs an error with the given message and key/value pairs.

    Always reaches the sink, whatever the verbosity.  `err` may be `None`.
    */
    #[inline(never)]
    pub fn error(&self, err: Option<ErrorRef>, msg: &str, keys_and_values: &[Value]) {
        if let Some(sink) = &self.sink {
            sink.error(err, msg, keys_and_values);
        }
        frame_barrier();
    }

    pub fn with_values(&self, keys_and_values: &[Value]) -> Self {
        match &self.sink {
            Some(sink) => self.derived(sink.with_values(keys_and_values)),
            None => self.clone(),
        }
    }

    pub fn with_name(&self, name: &str) -> Self {
        match &self.sink {
            Some(sink) => self.derived(sink.with_name(name)),
            None => self.clone(),
        }
    }

    /// Attributes records `depth` frames further up the stack, when the sink supports it.
    pub fn with_call_depth(&self, depth: usize) -> Self {
        match self.sink.as_ref().and_then(|sink| sink.as_call_depth()) {
            Some(sink) => self.derived(sink.with_call_depth(depth)),
            None => self.clone(),
        }
    }

    pub fn sink(&self) -> Option<&dyn LogSink> {
        self.sink.as_deref()
    }

    pub fn is_discard(&self) -> bool {
        self.sink.is_none()
    }
}

/// Keeps the sink call out of tail position so optimized builds cannot drop the calling frame.
#[inline(always)]
fn frame_barrier() {
    std::hint::black_box(());
}
