// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converts facade values into backend values.
//!
//! Keys are converted as they are.  Values (every second slot, starting with
//! the second) are probed first: a [`LogValue`] offering a structured form is
//! replaced by that form; otherwise one offering a display form is replaced
//! by that string; otherwise it goes to the backend as opaque data for the
//! backend to encode.  The result of a probe is not probed again.

use kvlog::Value as Out;
use logface::{LogValue, Value};
use std::fmt::Debug;
use std::sync::Arc;

/// Renders a flat key/value list.  `keys_and_values` itself is left untouched.
pub(crate) fn render(keys_and_values: &[Value]) -> Vec<Out> {
    keys_and_values
        .iter()
        .enumerate()
        .map(|(i, v)| if i % 2 == 1 { render_value(v) } else { convert(v) })
        .collect()
}

/// Applies the capability probes to one value.
pub(crate) fn render_value(value: &Value) -> Out {
    match value {
        Value::Object(object) => {
            if let Some(marshaled) = object.marshal_log() {
                convert(&marshaled)
            } else if let Some(displayed) = object.display_log() {
                Out::Str(displayed)
            } else {
                Out::Debug(Arc::new(Opaque(object.clone())))
            }
        }
        other => convert(other),
    }
}

/// Variant-for-variant conversion with no probing.
pub(crate) fn convert(value: &Value) -> Out {
    match value {
        Value::Null => Out::Null,
        Value::Bool(b) => Out::Bool(*b),
        Value::Int(i) => Out::Int(*i),
        Value::Uint(u) => Out::Uint(*u),
        Value::Float(f) => Out::Float(*f),
        Value::Str(s) => Out::Str(s.clone()),
        Value::Error(e) => Out::Error(e.clone()),
        Value::Json(j) => Out::Json(j.clone()),
        Value::Object(object) => Out::Debug(Arc::new(Opaque(object.clone()))),
    }
}

/// A facade object handed to the backend unrendered.
struct Opaque(Arc<dyn LogValue>);

impl Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
