// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field keys and name separator used when rendering records.
//!
//! Each logger carries its own [`Config`], fixed when it is built with
//! [`new_with_config`](crate::new_with_config).  [`new`](crate::new) uses the
//! process-wide default, which starts out as [`Config::default`] and can be
//! replaced with [`set_default_config`].
//!
//! # Process-wide default
//!
//! The default is meant to be set once, early, before any logger is built.
//! Loggers copy the default when they are constructed, so replacing it later
//! affects only loggers built afterwards.
//!
//! ```
//! use kvlogr::config::{default_config, set_default_config, Config};
//!
//! set_default_config(Config::default().name_key("component"));
//! assert_eq!(default_config().name_key, "component");
//! # set_default_config(Config::default());
//! ```

use std::sync::{OnceLock, RwLock};

/// Rendering configuration for one logger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Key for the logger name built by `with_name`.
    pub name_key: String,
    /// Separator placed between nested names.
    pub name_separator: String,
    /// Key for the error passed to `error`.
    pub error_key: String,
    /// Key for the call site added by `with_call_depth`.
    ///
    /// With a JSON backend, use the same key the backend's own caller valuer
    /// uses so the adapter's more precise value replaces it.  With logfmt, use
    /// a different key; both pairs are written.
    pub caller_key: String,
    /// Key for the message.
    pub message_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_key: "logger".to_string(),
            name_separator: "/".to_string(),
            error_key: "error".to_string(),
            caller_key: "caller".to_string(),
            message_key: "msg".to_string(),
        }
    }
}

impl Config {
    pub fn name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    pub fn name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    pub fn error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = key.into();
        self
    }

    pub fn caller_key(mut self, key: impl Into<String>) -> Self {
        self.caller_key = key.into();
        self
    }

    pub fn message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }
}

static DEFAULT_CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

fn slot() -> &'static RwLock<Config> {
    DEFAULT_CONFIG.get_or_init(|| RwLock::new(Config::default()))
}

/// Returns a copy of the process-wide default configuration.
pub fn default_config() -> Config {
    slot()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/**
Replaces the process-wide default configuration.

Call this before building loggers with [`new`](crate::new).  Loggers that
already exist keep the configuration they were built with.
*/
pub fn set_default_config(config: Config) {
    *slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

#[cfg(test)]
pub(crate) static TEST_CONFIG_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.name_key, "logger");
        assert_eq!(config.name_separator, "/");
        assert_eq!(config.error_key, "error");
        assert_eq!(config.caller_key, "caller");
        assert_eq!(config.message_key, "msg");
    }

    #[test]
    fn test_setters_chain() {
        let config = Config::default()
            .name_key("component")
            .name_separator(".")
            .error_key("err")
            .caller_key("src")
            .message_key("message");
        assert_eq!(config.name_key, "component");
        assert_eq!(config.name_separator, ".");
        assert_eq!(config.error_key, "err");
        assert_eq!(config.caller_key, "src");
        assert_eq!(config.message_key, "message");
    }

    #[test]
    fn test_set_default_config() {
        let _guard = TEST_CONFIG_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        let original = default_config();

        set_default_config(Config::default().error_key("err"));
        assert_eq!(default_config().error_key, "err");

        set_default_config(original.clone());
        assert_eq!(default_config(), original);
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let _guard = TEST_CONFIG_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        let original = default_config();

        let handle = thread::spawn(|| {
            set_default_config(Config::default().name_separator("::"));
        });
        let _ = default_config();
        handle.join().expect("Thread should complete successfully");

        assert_eq!(default_config().name_separator, "::");
        set_default_config(original);
    }
}
