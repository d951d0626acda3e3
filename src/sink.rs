// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
The [`LogSink`] implementation backed by a [`kvlog::Logger`].

A [`KitSink`] holds everything a derived logger has accumulated: its dotted
name, its fixed key/value pairs and its caller offset.  Deriving clones the
sink and changes the clone, so a parent sink never observes its children.

Records are assembled in this order:

```text
<with_values pairs> <call pairs> msg=<msg> [error=<err>] [logger=<name>]
```

and written with exactly one call to the backend.
*/

use crate::config::Config;
use crate::level::{DEBUG_VERBOSITY, severity};
use crate::render::render;
use kvlog::{Caller, Level};
use logface::{CallDepthLogSink, ErrorRef, LogSink, RuntimeInfo, Value};
use std::any::Any;
use std::sync::Arc;

/// Frames between the frontend's call into the sink and the backend's caller valuer:
/// `Caller::value`, value binding, `kvlog::Logger::log` and `KitSink::info`/`KitSink::error`.
const ADAPTER_FRAMES: usize = 4;

/**
Escape hatch to the backend logger.

Implemented by [`KitSink`].  Code that only holds a [`logface::Logger`] can
probe for it with [`underlier`] and use backend features directly.

```rust
use kvlog::{InMemoryLogger, Logger as Backend};
use std::sync::Arc;

let memory = Arc::new(InMemoryLogger::new());
let log = kvlogr::new(Backend::from_arc(memory.clone()));

if let Some(kit) = kvlogr::underlier(&log) {
    let _ = kit.underlying().log(vec!["msg".into(), "direct".into()]);
}
assert_eq!(memory.drain_logs(), "msg=direct");
```
*/
pub trait Underlier {
    /// The backend logger this sink writes through.
    fn underlying(&self) -> kvlog::Logger;
}

/// Returns the [`Underlier`] behind `logger`, if its sink offers one.
pub fn underlier(logger: &logface::Logger) -> Option<&dyn Underlier> {
    let sink = logger.sink()?;
    sink.as_any()
        .downcast_ref::<KitSink>()
        .map(|kit| kit as &dyn Underlier)
}

/// A [`LogSink`] writing through a [`kvlog::Logger`].
#[derive(Debug, Clone)]
pub struct KitSink {
    /// The backend as handed to us, before any caller annotation.
    origin: kvlog::Logger,
    /// The backend records are written to.
    backend: kvlog::Logger,
    config: Arc<Config>,
    name: String,
    values: Vec<Value>,
    depth: usize,
    call_depth_offset: usize,
}

impl KitSink {
    pub fn new(backend: kvlog::Logger, config: Config) -> Self {
        Self {
            origin: backend.clone(),
            backend,
            config: Arc::new(config),
            name: String::new(),
            values: Vec::new(),
            depth: 0,
            call_depth_offset: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The accumulated logger name, empty when `with_name` was never called.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Total frames added with `with_call_depth` along this derivation chain.
    pub fn call_depth_offset(&self) -> usize {
        self.call_depth_offset
    }

    /// Builds the rendered record.  Does not log.
    /// `err` is `None` for info records and `Some(err)` for error records.
    fn record(
        &self,
        err: Option<Option<ErrorRef>>,
        msg: &str,
        keys_and_values: &[Value],
    ) -> Vec<kvlog::Value> {
        let mut kvs = Vec::with_capacity(self.values.len() + keys_and_values.len() + 6);
        kvs.extend_from_slice(&self.values);
        kvs.extend_from_slice(keys_and_values);
        kvs.push(Value::from(self.config.message_key.as_str()));
        kvs.push(Value::from(msg));
        if let Some(err) = err {
            kvs.push(Value::from(self.config.error_key.as_str()));
            kvs.push(err.map_or(Value::Null, Value::Error));
        }
        if !self.name.is_empty() {
            kvs.push(Value::from(self.config.name_key.as_str()));
            kvs.push(Value::from(self.name.as_str()));
        }
        render(&kvs)
    }
}

impl LogSink for KitSink {
    fn init(&mut self, info: RuntimeInfo) {
        self.depth = info.call_depth + ADAPTER_FRAMES;
    }

    fn enabled(&self, level: usize) -> bool {
        // info() picks the backend severity itself
        level <= DEBUG_VERBOSITY
    }

    #[inline(never)]
    fn info(&self, level: usize, msg: &str, keys_and_values: &[Value]) {
        let record = self.record(None, msg, keys_and_values);
        // backend.log must be called from this frame for caller depths to hold
        let _ = match severity(level) {
            Level::Debug => kvlog::level::debug(&self.backend).log(record),
            _ => kvlog::level::info(&self.backend).log(record),
        };
    }

    #[inline(never)]
    fn error(&self, err: Option<ErrorRef>, msg: &str, keys_and_values: &[Value]) {
        let record = self.record(Some(err), msg, keys_and_values);
        let _ = kvlog::level::error(&self.backend).log(record);
    }

    fn with_values(&self, keys_and_values: &[Value]) -> Box<dyn LogSink> {
        let mut next = self.clone();
        next.values.extend_from_slice(keys_and_values);
        Box::new(next)
    }

    fn with_name(&self, name: &str) -> Box<dyn LogSink> {
        let mut next = self.clone();
        if next.name.is_empty() {
            next.name = name.to_string();
        } else {
            next.name.push_str(&self.config.name_separator);
            next.name.push_str(name);
        }
        Box::new(next)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_call_depth(&self) -> Option<&dyn CallDepthLogSink> {
        Some(self)
    }
}

impl CallDepthLogSink for KitSink {
    /// Offsets are additive: `with_call_depth(1).with_call_depth(2)` equals `with_call_depth(3)`.
    fn with_call_depth(&self, depth: usize) -> Box<dyn LogSink> {
        let mut next = self.clone();
        next.call_depth_offset = self.call_depth_offset.saturating_add(depth);
        next.backend = self.origin.with([
            kvlog::Value::from(self.config.caller_key.as_str()),
            Caller::new(next.depth.saturating_add(next.call_depth_offset)).into(),
        ]);
        Box::new(next)
    }
}

impl Underlier for KitSink {
    fn underlying(&self) -> kvlog::Logger {
        self.backend.clone()
    }
}
