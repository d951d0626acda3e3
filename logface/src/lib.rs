// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logface

logface is a leveled, structured logging facade.

Application code holds a [`Logger`] and never sees what is behind it.  The
actual work happens in a [`LogSink`], which decides how records are
filtered, formatted and written.

# Verbosity

There is no fixed set of levels.  Verbosity is a number: 0 is the default,
and each [`Logger::v`] step asks for more detail.  Errors are not a
verbosity; [`Logger::error`] always reaches the sink.

# Structured values

Every call takes a flat list of alternating keys and values, usually built
with [`kvs!`].  Values that need special treatment implement [`LogValue`],
offering a structured form, a display form, or both.

```rust
use logface::{kvs, Logger, Value};

#[derive(Debug)]
struct Job { id: u32 }

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "job-{}", self.id)
    }
}

let log = Logger::discard();
log.info("scheduled", &kvs!["job", Value::display(Job { id: 4 })]);
```

# Sinks

[`LogSink`] is the required contract.  Capabilities beyond it, like
[`CallDepthLogSink`], are optional and discovered at runtime.
*/

mod logger;
mod sink;
mod value;

pub use logger::Logger;
pub use sink::{CallDepthLogSink, LogSink, RuntimeInfo};
pub use value::{ErrorRef, LogValue, Marshaler, Value};
