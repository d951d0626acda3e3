// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site annotation.
//!
//! [`Caller`] is a [`Valuer`] that resolves a source location at the moment a
//! record is emitted, by walking the stack a fixed number of frames above
//! itself.  Depth 0 is the valuer's own frame, 1 is the function that
//! evaluated it, and so on.  When bound to a [`Logger`](crate::Logger) with
//! `with`, depth 3 ([`DEFAULT_CALLER`]) names the function that called
//! [`Logger::log`](crate::Logger::log):
//!
//! | depth | frame                      |
//! |-------|----------------------------|
//! | 0     | `Caller::value`            |
//! | 1     | value binding              |
//! | 2     | `Logger::log`              |
//! | 3     | caller of `Logger::log`    |
//!
//! Every wrapper placed between the application and `Logger::log` adds one to
//! the depth needed to reach the application.
//!
//! Frames are counted after inlined functions are expanded, so inlining does
//! not change the count.  Tail calls do: a wrapper whose last action is the
//! call into the logger may have its frame replaced by the callee's in an
//! optimized build.  Wrappers that are counted must do something after that
//! call, such as `std::hint::black_box(())`.  Without symbols the location
//! renders as `"???:0"`.

use crate::value::{Valuer, Value};
use backtrace::{Backtrace, BacktraceSymbol};
use std::path::Path;

/// Depth that attributes a record to the direct caller of [`Logger::log`](crate::Logger::log).
pub const DEFAULT_CALLER: usize = 3;

const ANCHOR: &str = "caller::capture_location";
const UNKNOWN: &str = "???:0";

/// A resolved source location, rendered as `file:line` with the file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Valuer resolving the call site `depth` frames above itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    depth: usize,
}

impl Caller {
    pub const fn new(depth: usize) -> Self {
        Self { depth }
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Caller {
    fn default() -> Self {
        Self::new(DEFAULT_CALLER)
    }
}

impl Valuer for Caller {
    #[inline(never)]
    fn value(&self) -> Value {
        match capture_location(self.depth) {
            Some(location) => Value::Str(location.to_string()),
            None => Value::Str(UNKNOWN.to_string()),
        }
    }
}

impl From<Caller> for Value {
    fn from(caller: Caller) -> Self {
        Value::valuer(caller)
    }
}

/// Resolves the frame `depth` levels above the frame that called this function.
#[inline(never)]
fn capture_location(depth: usize) -> Option<Location> {
    let backtrace = Backtrace::new();
    // one entry per logical frame, inlined functions included
    let mut frames: Vec<Option<&BacktraceSymbol>> = Vec::new();
    for frame in backtrace.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            frames.push(None);
        } else {
            frames.extend(symbols.iter().map(Some));
        }
    }
    let anchor = frames.iter().position(|symbol| {
        symbol
            .and_then(|s| s.name())
            .is_some_and(|name| name.to_string().contains(ANCHOR))
    })?;
    let symbol = (*frames.get(anchor + 1 + depth)?)?;
    let file = symbol.filename()?;
    let line = symbol.lineno()?;
    Some(Location {
        file: base_name(file),
        line,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
