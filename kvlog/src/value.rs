// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values carried by key/value records.
//!
//! A record is a flat `Vec<Value>` of alternating keys and values.  Keys are
//! values too; encoders render non-string keys with their [`Display`] form.
//! Nothing here checks that a record has an even length or that keys are
//! strings.  Encoders make a best effort with malformed input.

use crate::level::Level;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// A value computed when a record is emitted rather than when it is bound.
///
/// [`Logger::log`](crate::Logger::log) replaces every `Value::Valuer` in the
/// record with the result of [`Valuer::value`] before forwarding it.
pub trait Valuer: Send + Sync {
    fn value(&self) -> Value;
}

impl<F> Valuer for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn value(&self) -> Value {
        self()
    }
}

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// Rendered as the error's message.
    Error(Arc<dyn std::error::Error + Send + Sync>),
    /// Composite data, embedded as-is by the JSON encoder.
    Json(serde_json::Value),
    /// Opaque data, rendered with its `Debug` form.
    Debug(Arc<dyn Debug + Send + Sync>),
    Level(Level),
    Valuer(Arc<dyn Valuer>),
}

impl Value {
    pub fn valuer<V: Valuer + 'static>(valuer: V) -> Self {
        Value::Valuer(Arc::new(valuer))
    }

    pub fn debug<T: Debug + Send + Sync + 'static>(value: T) -> Self {
        Value::Debug(Arc::new(value))
    }

    pub fn error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Value::Error(Arc::new(error))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string an encoder uses when this value sits in a key position.
    pub fn key_string(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Converts to a JSON value the way [`JsonLogger`](crate::JsonLogger) encodes it.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::from(*i),
            Value::Uint(u) => Json::from(*u),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or_else(|| Json::String(f.to_string())),
            Value::Str(s) => Json::String(s.clone()),
            Value::Error(e) => Json::String(e.to_string()),
            Value::Json(j) => j.clone(),
            Value::Debug(d) => Json::String(format!("{:?}", d)),
            Value::Level(l) => Json::String(l.as_str().to_string()),
            Value::Valuer(v) => v.value().to_json(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => f.write_str(s),
            Value::Error(e) => write!(f, "{}", e),
            Value::Json(j) => write!(f, "{}", j),
            Value::Debug(d) => write!(f, "{:?}", d),
            Value::Level(l) => f.write_str(l.as_str()),
            Value::Valuer(v) => write!(f, "{}", v.value()),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Value::Json(j) => f.debug_tuple("Json").field(j).finish(),
            Value::Debug(d) => f.debug_tuple("Debug").field(d).finish(),
            Value::Level(l) => f.debug_tuple("Level").field(l).finish(),
            Value::Valuer(_) => f.write_str("Valuer(..)"),
        }
    }
}

macro_rules! from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

from_int!(Int, i64, i8, i16, i32, i64, isize);
from_int!(Uint, u64, u8, u16, u32, u64, usize);
from_int!(Float, f64, f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Level> for Value {
    fn from(v: Level) -> Self {
        Value::Level(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Broken;

    impl Display for Broken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("it broke")
        }
    }

    impl std::error::Error for Broken {}

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::error(Broken).to_string(), "it broke");
        assert_eq!(Value::from(Level::Warn).to_string(), "warn");
        assert_eq!(Value::debug(vec![1, 2]).to_string(), "[1, 2]");
    }

    #[test]
    fn test_key_string_uses_display_for_non_strings() {
        assert_eq!(Value::from("k").key_string(), "k");
        assert_eq!(Value::from(7u8).key_string(), "7");
        assert_eq!(Value::Null.key_string(), "null");
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Value::from(1).to_json(), serde_json::json!(1));
        assert_eq!(Value::error(Broken).to_json(), serde_json::json!("it broke"));
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::json!("NaN"));
        assert_eq!(
            Value::from(serde_json::json!({"k": 1})).to_json(),
            serde_json::json!({"k": 1})
        );
    }

    #[test]
    fn test_valuer_evaluates_when_rendered() {
        let v = Value::valuer(|| Value::from("computed"));
        assert_eq!(v.to_string(), "computed");
        assert_eq!(v.to_json(), serde_json::json!("computed"));
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some("x")).as_str(), Some("x"));
    }
}
