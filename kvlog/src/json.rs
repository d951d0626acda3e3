// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON lines encoder.

use crate::error::Result;
use crate::logger::Log;
use crate::value::Value;
use crate::writer::SyncWriter;
use std::io::Write;

/// Value recorded for a key with no value.
pub const MISSING_VALUE: &str = "(MISSING)";

/**
Encodes each record as one JSON object per line.

Keys are emitted in sorted order.  When a key repeats, the last value wins.
An odd-length record gets [`MISSING_VALUE`] for its trailing key.

```rust
use kvlog::{JsonLogger, Logger, Value};

let logger = Logger::new(JsonLogger::new(std::io::sink()));
logger.log(vec![Value::from("msg"), Value::from("hello")]).unwrap();
```
*/
#[derive(Debug)]
pub struct JsonLogger {
    writer: SyncWriter,
}

impl JsonLogger {
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

/// Merges a record into a JSON object, last duplicate key winning.
pub fn to_object(keyvals: &[Value]) -> serde_json::Map<String, serde_json::Value> {
    let mut object = serde_json::Map::new();
    for pair in keyvals.chunks(2) {
        let key = pair[0].key_string();
        let value = match pair.get(1) {
            Some(value) => value.to_json(),
            None => serde_json::Value::String(MISSING_VALUE.to_string()),
        };
        object.insert(key, value);
    }
    object
}

impl Log for JsonLogger {
    fn log(&self, keyvals: Vec<Value>) -> Result<()> {
        let object = to_object(&keyvals);
        let mut line = serde_json::to_vec(&object)?;
        line.push(b'\n');
        self.writer.write_record(&line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Logger;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_sorted_keys_one_line() {
        let buffer = Shared::default();
        let logger = Logger::new(JsonLogger::new(buffer.clone()));
        logger
            .log(vec![
                Value::from("zeta"),
                Value::from(1),
                Value::from("alpha"),
                Value::from("a"),
            ])
            .unwrap();
        assert_eq!(buffer.text(), "{\"alpha\":\"a\",\"zeta\":1}\n");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let object = to_object(&[
            Value::from("k"),
            Value::from("first"),
            Value::from("k"),
            Value::from("second"),
        ]);
        assert_eq!(object.len(), 1);
        assert_eq!(object["k"], serde_json::json!("second"));
    }

    #[test]
    fn test_missing_value_and_null() {
        let object = to_object(&[Value::from("error"), Value::Null, Value::from("dangling")]);
        assert_eq!(object["error"], serde_json::Value::Null);
        assert_eq!(object["dangling"], serde_json::json!(MISSING_VALUE));
    }

    #[test]
    fn test_non_string_key() {
        let object = to_object(&[Value::from(42), Value::from(true)]);
        assert_eq!(object["42"], serde_json::json!(true));
    }
}
