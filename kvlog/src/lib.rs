// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# kvlog

kvlog is a small structured logger.  A record is a flat list of alternating
keys and values; a [`Logger`] handle binds extra pairs to every record and
hands the result to a [`Log`] implementation that filters or encodes it.

```rust
use kvlog::{level, Caller, JsonLogger, Logger, Value, DEFAULT_CALLER};

let logger = level::Filter::new(Logger::new(JsonLogger::stderr()), level::Allow::Info).into_logger();
let logger = logger.with(vec![Value::from("caller"), Value::from(Caller::new(DEFAULT_CALLER))]);

level::info(&logger)
    .log(vec![Value::from("msg"), Value::from("hello")])
    .unwrap();
```

# Pieces

* [`Value`]: what a record is made of, including [`Valuer`]s bound at emit time.
* [`Logger`]: derivation with `with` / `with_prefix`, and `log`.
* [`level`]: severities and [`level::Filter`].
* [`Caller`] and [`Timestamp`]: the built-in valuers.
* [`JsonLogger`], [`LogfmtLogger`]: encoders writing through a [`SyncWriter`].
* [`InMemoryLogger`], [`NopLogger`]: capture or discard.
*/

mod caller;
mod error;
mod inmemory_logger;
mod json;
pub mod level;
mod logfmt;
mod logger;
mod timestamp;
mod value;
mod writer;

pub use caller::{Caller, DEFAULT_CALLER, Location};
pub use error::{LogError, Result};
pub use inmemory_logger::InMemoryLogger;
pub use json::{JsonLogger, MISSING_VALUE, to_object};
pub use level::Level;
pub use logfmt::{LogfmtLogger, encode as encode_logfmt};
pub use logger::{Log, Logger, NopLogger};
pub use timestamp::Timestamp;
pub use value::{Valuer, Value};
pub use writer::SyncWriter;
