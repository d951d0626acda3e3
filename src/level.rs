// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verbosity to severity mapping.
//!
//! | verbosity | severity |
//! |-----------|----------|
//! | 0, 1      | info     |
//! | 2 and up  | debug    |
//!
//! Error records are always `error`.  The backend's `warn` severity is never
//! produced: the facade has no notion of a warning.

use kvlog::Level;

/// Highest verbosity [`KitSink::enabled`](crate::KitSink) reports as enabled.
pub(crate) const DEBUG_VERBOSITY: usize = 2;

/// Verbosities above this map to [`Level::Debug`].
const INFO_VERBOSITY: usize = 1;

/// Severity for an `info` call at `verbosity`.
pub(crate) fn severity(verbosity: usize) -> Level {
    if verbosity > INFO_VERBOSITY {
        Level::Debug
    } else {
        Level::Info
    }
}
