// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels and level filtering.
//!
//! A record carries its severity as a `"level"` key whose value is a
//! [`Value::Level`].  [`debug`], [`info`], [`warn`] and [`error`] derive a
//! logger that prefixes that pair; [`Filter`] drops records below a threshold.

use crate::error::{LogError, Result};
use crate::logger::{Log, Logger};
use crate::value::Value;

/// The key under which the level is recorded.
pub const KEY: &str = "level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn leveled(logger: &Logger, level: Level) -> Logger {
    logger.with_prefix(vec![Value::from(KEY), Value::Level(level)])
}

pub fn debug(logger: &Logger) -> Logger {
    leveled(logger, Level::Debug)
}

pub fn info(logger: &Logger) -> Logger {
    leveled(logger, Level::Info)
}

pub fn warn(logger: &Logger) -> Logger {
    leveled(logger, Level::Warn)
}

pub fn error(logger: &Logger) -> Logger {
    leveled(logger, Level::Error)
}

/// Lowest level a [`Filter`] lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Allow {
    #[default]
    All,
    Debug,
    Info,
    Warn,
    Error,
    None,
}

impl Allow {
    fn allows(self, level: Level) -> bool {
        match self {
            Allow::All | Allow::Debug => true,
            Allow::Info => level >= Level::Info,
            Allow::Warn => level >= Level::Warn,
            Allow::Error => level >= Level::Error,
            Allow::None => false,
        }
    }
}

/**
A [`Log`] that forwards only records whose level is allowed.

The first level value found in the record decides.  Records without a level
are forwarded unless [`Filter::squelch_no_level`] is set.  Dropped records
return `Ok(())` unless [`Filter::error_on_rejected`] is set.
*/
#[derive(Debug, Clone)]
pub struct Filter {
    next: Logger,
    allow: Allow,
    squelch_no_level: bool,
    error_on_rejected: bool,
}

impl Filter {
    pub fn new(next: Logger, allow: Allow) -> Self {
        Self {
            next,
            allow,
            squelch_no_level: false,
            error_on_rejected: false,
        }
    }

    /// Drop records that carry no level.
    pub fn squelch_no_level(mut self, squelch: bool) -> Self {
        self.squelch_no_level = squelch;
        self
    }

    /// Report dropped records as [`LogError::NotAllowed`] or [`LogError::NoLevel`].
    pub fn error_on_rejected(mut self, error: bool) -> Self {
        self.error_on_rejected = error;
        self
    }

    /// Wraps the filter in a [`Logger`] handle.
    pub fn into_logger(self) -> Logger {
        Logger::new(self)
    }

    fn reject(&self, error: LogError) -> Result<()> {
        if self.error_on_rejected { Err(error) } else { Ok(()) }
    }
}

impl Log for Filter {
    fn log(&self, keyvals: Vec<Value>) -> Result<()> {
        let level = keyvals.iter().skip(1).step_by(2).find_map(|v| match v {
            Value::Level(level) => Some(*level),
            _ => None,
        });
        match level {
            Some(level) if self.allow.allows(level) => self.next.log(keyvals),
            Some(_) => self.reject(LogError::NotAllowed),
            None if self.squelch_no_level => self.reject(LogError::NoLevel),
            None => self.next.log(keyvals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryLogger;
    use std::sync::Arc;

    fn filtered(allow: Allow) -> (Arc<InMemoryLogger>, Filter) {
        let memory = Arc::new(InMemoryLogger::new());
        let filter = Filter::new(Logger::from_arc(memory.clone()), allow);
        (memory, filter)
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_leveled_logger_prefixes_level() {
        let memory = Arc::new(InMemoryLogger::new());
        let logger = Logger::from_arc(memory.clone());
        info(&logger).log(vec![Value::from("msg"), Value::from("x")]).unwrap();
        let records = memory.drain_records();
        assert_eq!(records[0][0].as_str(), Some(KEY));
        assert!(matches!(records[0][1], Value::Level(Level::Info)));
    }

    #[test]
    fn test_allow_info_drops_debug() {
        let (memory, filter) = filtered(Allow::Info);
        let logger = filter.into_logger();
        debug(&logger).log(vec![Value::from("msg"), Value::from("hidden")]).unwrap();
        info(&logger).log(vec![Value::from("msg"), Value::from("shown")]).unwrap();
        error(&logger).log(vec![Value::from("msg"), Value::from("shown")]).unwrap();
        assert_eq!(memory.drain_records().len(), 2);
    }

    #[test]
    fn test_allow_none_and_all() {
        let (memory, filter) = filtered(Allow::None);
        assert!(error(&filter.into_logger()).log(Vec::new()).is_ok());
        assert!(memory.drain_records().is_empty());

        let (memory, filter) = filtered(Allow::All);
        debug(&filter.into_logger()).log(Vec::new()).unwrap();
        assert_eq!(memory.drain_records().len(), 1);
    }

    #[test]
    fn test_rejection_errors_when_configured() {
        let (_memory, filter) = filtered(Allow::Warn);
        let logger = filter.error_on_rejected(true).squelch_no_level(true).into_logger();
        assert!(matches!(info(&logger).log(Vec::new()), Err(LogError::NotAllowed)));
        assert!(matches!(logger.log(Vec::new()), Err(LogError::NoLevel)));
    }

    #[test]
    fn test_no_level_forwarded_by_default() {
        let (memory, filter) = filtered(Allow::Error);
        filter.into_logger().log(vec![Value::from("k"), Value::from("v")]).unwrap();
        assert_eq!(memory.drain_records().len(), 1);
    }
}
