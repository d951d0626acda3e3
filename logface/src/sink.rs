// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::value::{ErrorRef, Value};
use std::any::Any;
use std::fmt::Debug;

/// Information about the facade handed to a sink once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuntimeInfo {
    /// Stack frames between the application's logging call and the sink's
    /// `info`/`error`.
    pub call_depth: usize,
}

/**
The implementation behind a [`Logger`](crate::Logger).

Sinks are immutable once handed to a `Logger`: every `with_*` derivation
returns a new sink and must not affect the one it was derived from.

Optional capabilities are discovered through probe methods that default to
"absent" ([`LogSink::as_call_depth`]) or by downcasting through
[`LogSink::as_any`].
*/
pub trait LogSink: Any + Debug + Send + Sync {
    /**
    Receives runtime information about the facade.

    Called exactly once by [`Logger::new`](crate::Logger::new), before any
    other method.
    */
    fn init(&mut self, info: RuntimeInfo);

    /// Whether records at `level` verbosity may be emitted.
    fn enabled(&self, level: usize) -> bool;

    /// Emits a non-error record at `level` verbosity.
    fn info(&self, level: usize, msg: &str, keys_and_values: &[Value]);

    /// Emits an error record.  `err` may be absent.
    fn error(&self, err: Option<ErrorRef>, msg: &str, keys_and_values: &[Value]);

    fn with_values(&self, keys_and_values: &[Value]) -> Box<dyn LogSink>;

    fn with_name(&self, name: &str) -> Box<dyn LogSink>;

    fn as_any(&self) -> &dyn Any;

    /// Probe for [`CallDepthLogSink`].
    fn as_call_depth(&self) -> Option<&dyn CallDepthLogSink> {
        None
    }
}

/// Optional capability: sinks that attribute records to a caller further up the stack.
pub trait CallDepthLogSink {
    /**
    Returns a sink that skips `depth` additional frames when attributing a
    record's call site.  Successive calls add up.
    */
    fn with_call_depth(&self, depth: usize) -> Box<dyn LogSink>;
}
