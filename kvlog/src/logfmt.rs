// SPDX-License-Identifier: MIT OR Apache-2.0

//! logfmt encoder.
//!
//! Records render as `key=value` pairs separated by single spaces, in record
//! order.  Duplicate keys are all written.  Values containing spaces, `=`,
//! quotes or control characters are quoted and escaped; an empty string
//! renders as `""`.  Characters that are invalid in a key are replaced with `_`.

use crate::error::Result;
use crate::json::MISSING_VALUE;
use crate::logger::Log;
use crate::value::Value;
use crate::writer::SyncWriter;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug)]
pub struct LogfmtLogger {
    writer: SyncWriter,
}

impl LogfmtLogger {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_writer(SyncWriter::new(writer))
    }

    pub fn with_writer(writer: SyncWriter) -> Self {
        Self { writer }
    }

    pub fn stderr() -> Self {
        Self::with_writer(SyncWriter::stderr())
    }
}

impl Log for LogfmtLogger {
    fn log(&self, keyvals: Vec<Value>) -> Result<()> {
        let mut line = encode(&keyvals);
        line.push('\n');
        self.writer.write_record(line.as_bytes())?;
        Ok(())
    }
}

/// Encodes a record as a single logfmt line, without the trailing newline.
pub fn encode(keyvals: &[Value]) -> String {
    let mut line = String::new();
    for pair in keyvals.chunks(2) {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&encode_key(&pair[0].key_string()));
        line.push('=');
        match pair.get(1) {
            Some(value) => line.push_str(&encode_value(&value.to_string())),
            None => line.push_str(&encode_value(MISSING_VALUE)),
        }
    }
    line
}

fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return "_".to_string();
    }
    key.chars()
        .map(|c| if c <= ' ' || c == '=' || c == '"' || c.is_control() { '_' } else { c })
        .collect()
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c <= ' ' || c == '=' || c == '"' || c == '\\' || c.is_control())
}

fn encode_value(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_encode_in_order() {
        let line = encode(&[
            Value::from("level"),
            Value::Level(Level::Info),
            Value::from("msg"),
            Value::from("hello"),
            Value::from("n"),
            Value::from(1),
        ]);
        assert_eq!(line, "level=info msg=hello n=1");
    }

    #[test]
    fn test_quoting() {
        let line = encode(&[
            Value::from("msg"),
            Value::from("hello world"),
            Value::from("q"),
            Value::from("say \"hi\""),
            Value::from("empty"),
            Value::from(""),
        ]);
        assert_eq!(line, r#"msg="hello world" q="say \"hi\"" empty="""#);
    }

    #[test]
    fn test_null_and_missing() {
        let line = encode(&[Value::from("error"), Value::Null, Value::from("odd")]);
        assert_eq!(line, "error=null odd=(MISSING)");
    }

    #[test]
    fn test_bad_key_characters() {
        assert_eq!(encode(&[Value::from("a b=c"), Value::from(1)]), "a_b_c=1");
        assert_eq!(encode(&[Value::from(""), Value::from(1)]), "_=1");
    }

    #[test]
    fn test_duplicates_kept() {
        let line = encode(&[
            Value::from("caller"),
            Value::from("a.rs:1"),
            Value::from("caller"),
            Value::from("b.rs:2"),
        ]);
        assert_eq!(line, "caller=a.rs:1 caller=b.rs:2");
    }
}
