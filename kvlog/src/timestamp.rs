// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timestamp valuers.

use crate::value::{Valuer, Value};
use chrono::{Local, SecondsFormat, Utc};

/// Valuer rendering the current time as RFC 3339 with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp {
    local: bool,
}

impl Timestamp {
    pub const fn utc() -> Self {
        Self { local: false }
    }

    pub const fn local() -> Self {
        Self { local: true }
    }
}

impl Valuer for Timestamp {
    fn value(&self) -> Value {
        let rendered = if self.local {
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
        } else {
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        };
        Value::Str(rendered)
    }
}

impl From<Timestamp> for Value {
    fn from(timestamp: Timestamp) -> Self {
        Value::valuer(timestamp)
    }
}
