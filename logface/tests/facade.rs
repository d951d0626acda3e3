// SPDX-License-Identifier: MIT OR Apache-2.0
use logface::{ErrorRef, LogSink, LogValue, Logger, RuntimeInfo, Value, kvs};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Renders every call as `msg k=v ...` into a shared buffer.
#[derive(Debug, Clone, Default)]
struct LineSink {
    lines: Arc<Mutex<Vec<String>>>,
    prefix: Vec<Value>,
}

impl LineSink {
    fn write(&self, msg: &str, keys_and_values: &[Value]) {
        let mut line = msg.to_string();
        let all: Vec<&Value> = self.prefix.iter().chain(keys_and_values).collect();
        for pair in all.chunks(2) {
            let value = match pair.get(1) {
                Some(Value::Object(o)) => o
                    .display_log()
                    .unwrap_or_else(|| format!("{:?}", o)),
                Some(v) => format!("{:?}", v),
                None => "(MISSING)".to_string(),
            };
            line.push_str(&format!(" {}={}", pair[0].as_str().unwrap_or("?"), value));
        }
        self.lines.lock().unwrap().push(line);
    }
}

impl LogSink for LineSink {
    fn init(&mut self, _info: RuntimeInfo) {}

    fn enabled(&self, level: usize) -> bool {
        level == 0
    }

    fn info(&self, _level: usize, msg: &str, keys_and_values: &[Value]) {
        self.write(msg, keys_and_values);
    }

    fn error(&self, _err: Option<ErrorRef>, msg: &str, keys_and_values: &[Value]) {
        self.write(msg, keys_and_values);
    }

    fn with_values(&self, keys_and_values: &[Value]) -> Box<dyn LogSink> {
        let mut next = self.clone();
        next.prefix.extend_from_slice(keys_and_values);
        Box::new(next)
    }

    fn with_name(&self, _name: &str) -> Box<dyn LogSink> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Port(u16);

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}", self.0)
    }
}

#[test]
fn custom_sink_receives_flat_pairs() {
    let sink = LineSink::default();
    let lines = sink.lines.clone();
    let log = Logger::new(sink).with_values(&kvs!["id", 3]);

    log.info("listening", &kvs!["port", Value::display(Port(80))]);
    log.v(1).info("quiet", &[]);
    log.v(1).error(None, "odd", &kvs!["dangling"]);

    assert_eq!(
        *lines.lock().unwrap(),
        vec![
            "listening id=Int(3) port=:80".to_string(),
            "odd id=Int(3) dangling=(MISSING)".to_string(),
        ]
    );
}

#[test]
fn empty_kvs_macro_builds_empty_list() {
    let empty = kvs![];
    assert!(empty.is_empty());
    assert_eq!(kvs!["a", 1, "b", true,].len(), 4);
}

#[test]
fn with_call_depth_is_ignored_without_the_capability() {
    let log = Logger::new(LineSink::default());
    let deeper = log.with_call_depth(4);
    assert!(deeper.sink().unwrap().as_any().is::<LineSink>());
}
