// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured values attached to log calls.

use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Error carried by [`Value::Error`] and passed to [`Logger::error`](crate::Logger::error).
pub type ErrorRef = Arc<dyn std::error::Error + Send + Sync>;

/**
A value the sink may want to render differently from its raw form.

Both capabilities are optional.  A sink that renders values asks for
[`LogValue::marshal_log`] first and falls back to [`LogValue::display_log`];
when neither is offered the value is handed on as opaque data.

Implement this directly when a type offers both representations.  For one
capability, use [`Value::marshaler`] or [`Value::display`].
*/
pub trait LogValue: Debug + Send + Sync {
    /// A structured stand-in for this value.
    fn marshal_log(&self) -> Option<Value> {
        None
    }

    /// A human-readable rendering of this value.
    fn display_log(&self) -> Option<String> {
        None
    }
}

/// Types that know how to present themselves as log data.
pub trait Marshaler {
    fn marshal_log(&self) -> Value;
}

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Error(ErrorRef),
    /// Composite data such as maps and sequences.
    Json(serde_json::Value),
    Object(Arc<dyn LogValue>),
}

impl Value {
    /// Wraps a [`Marshaler`]; renders as its marshaled form.
    pub fn marshaler<T>(value: T) -> Self
    where
        T: Marshaler + Debug + Send + Sync + 'static,
    {
        Value::Object(Arc::new(Marshaled(value)))
    }

    /// Wraps a [`Display`] type; renders as its display string.
    pub fn display<T>(value: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        Value::Object(Arc::new(Displayed(value)))
    }

    /// Wraps a value with no rendering capability.
    pub fn opaque<T>(value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Value::Object(Arc::new(Opaque(value)))
    }

    pub fn object<T: LogValue + 'static>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    pub fn error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Value::Error(Arc::new(error))
    }

    /// Serializes any [`serde::Serialize`] type into [`Value::Json`].
    ///
    /// Serialization failures are recorded as a string describing the failure.
    pub fn serialize<T: serde::Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Value::Json(json),
            Err(e) => Value::Str(format!("<serialization failed: {e}>")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
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
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
        }
    }
}

struct Marshaled<T>(T);

impl<T: Debug> Debug for Marshaled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Marshaler + Debug + Send + Sync> LogValue for Marshaled<T> {
    fn marshal_log(&self) -> Option<Value> {
        Some(self.0.marshal_log())
    }
}

struct Displayed<T>(T);

impl<T: Debug> Debug for Displayed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Display + Debug + Send + Sync> LogValue for Displayed<T> {
    fn display_log(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

struct Opaque<T>(T);

impl<T: Debug> Debug for Opaque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Debug + Send + Sync> LogValue for Opaque<T> {}

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

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<ErrorRef> for Value {
    fn from(v: ErrorRef) -> Self {
        Value::Error(v)
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

/**
Builds a flat list of alternating keys and values.

Every argument is converted with `Value::from`, so keys and values may be
anything that converts.  Nothing checks that the list has an even length.

```rust
use logface::{kvs, Value};

let pairs = kvs!["user", "alice", "attempt", 3];
assert_eq!(pairs.len(), 4);
assert!(matches!(pairs[3], Value::Int(3)));
```
*/
#[macro_export]
macro_rules! kvs {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}
