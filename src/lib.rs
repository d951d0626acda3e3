//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# kvlogr

kvlogr lets code written against the [`logface`] facade log through a
[`kvlog`] key/value logger.

# The problem

Libraries want to log without picking a logging implementation for their
users.  [`logface`] gives them a small, leveled, structured API to write
against.  Applications, meanwhile, already have a [`kvlog::Logger`]
configured with their encoder, filter, caller annotation and so on.  kvlogr
is the piece in between: it turns a `kvlog::Logger` into a
`logface::Logger` and does nothing else.

# Usage

```rust
use kvlog::{JsonLogger, Logger as Backend};
use kvlog::level::{Allow, Filter};
use logface::kvs;

let backend = Backend::new(Filter::new(Backend::new(JsonLogger::stderr()), Allow::Info));
let log = kvlogr::new(backend).with_name("MyName").with_values(&kvs!["module", "example"]);

log.info("hello", &kvs!["val1", 1]);
log.v(1).info("you should see this", &[]);
log.v(2).info("filtered out by the backend", &[]);
log.error(None, "uh oh", &kvs!["trouble", true]);
```

# How the two map onto each other

| facade                  | backend                                                 |
|-------------------------|---------------------------------------------------------|
| `info` at V(0), V(1)    | `level::info`                                           |
| `info` at V(2) and up   | `level::debug`                                          |
| `error`                 | `level::error`, with the error under `error`            |
| `with_name`             | `logger` key, nested names joined with `/`              |
| `with_values`           | pairs placed before the call's own pairs                |
| `with_call_depth`       | a [`kvlog::Caller`] pair under `caller`                 |

The backend's `warn` level is never used.  Verbosities above 2 are reported
as disabled and never reach the backend.

Field keys and the separator are set per logger with [`Config`]; see
[`config`] for the process-wide default used by [`new`].

# Values

Each value is looked at once before it is handed to the backend.  A value
with a structured form ([`logface::Marshaler`]) is replaced by that form; a
value with only a display form is replaced by its string; anything else is
left to the backend to encode.

# Getting at the backend

[`underlier`] returns the [`Underlier`] behind a `logface::Logger` built by
this crate, for when backend-specific features are needed.
*/

pub mod config;
mod level;
mod render;
mod sink;

pub use config::Config;
pub use sink::{KitSink, Underlier, underlier};

/**
Builds a [`logface::Logger`] writing through `backend`, using the current
[process-wide default configuration](config::default_config).

```rust
let log = kvlogr::new(kvlog::Logger::new(kvlog::NopLogger));
log.info("dropped by the backend", &[]);
```
*/
pub fn new(backend: kvlog::Logger) -> logface::Logger {
    new_with_config(backend, config::default_config())
}

/// Builds a [`logface::Logger`] writing through `backend` with the given keys and separator.
pub fn new_with_config(backend: kvlog::Logger, config: Config) -> logface::Logger {
    logface::Logger::new(KitSink::new(backend, config))
}
