// SPDX-License-Identifier: MIT OR Apache-2.0
use kvlog::{Caller, LogfmtLogger, Logger as Backend, Timestamp, Value};
use kvlogr::Config;
use logface::{Logger, kvs};
use std::io::Write;
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
    fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.lock().unwrap())).unwrap()
    }
}

/// Splits one logfmt line into its pairs.  Values in these records never contain spaces.
fn pairs(line: &str) -> Vec<(&str, &str)> {
    line.split(' ')
        .map(|pair| pair.split_once('=').expect("key=value"))
        .collect()
}

fn at(line: u32) -> String {
    format!("logfmt_backend.rs:{line}")
}

/// Returns the line of its call into the facade.
#[inline(never)]
fn wrapper(log: &Logger) -> u32 {
    let line = line!() + 1;
    log.info("wrapped", &kvs!["n", 1]);
    line
}

fn backend(out: &Shared) -> Backend {
    Backend::new(LogfmtLogger::new(out.clone())).with([
        Value::from("ts"),
        Timestamp::utc().into(),
        Value::from("caller"),
        Caller::new(5).into(),
    ])
}

#[test]
fn logfmt_writes_both_caller_pairs_under_distinct_keys() {
    let out = Shared::default();
    let log = kvlogr::new_with_config(backend(&out), Config::default().caller_key("src"))
        .with_call_depth(1);

    let outer = line!() + 1;
    let inner = wrapper(&log);

    let text = out.take();
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);

    let record = pairs(lines[0]);
    let keys: Vec<&str> = record.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["level", "n", "msg", "ts", "caller", "src"]);
    assert_eq!(record[0].1, "info");
    assert_eq!(record[2].1, "wrapped");
    assert!(record[3].1.ends_with('Z'), "ts={}", record[3].1);
    // the backend's own valuer sees the facade call, the adapter's sees one frame further up
    assert_eq!(record[4].1, at(inner));
    assert_eq!(record[5].1, at(outer));
}

#[test]
fn logfmt_keeps_duplicate_caller_keys() {
    let out = Shared::default();
    let log = kvlogr::new(backend(&out));
    let deeper = log.with_call_depth(0);

    let line = line!() + 1;
    deeper.error(None, "failed", &[]);

    let text = out.take();
    let record = pairs(text.trim_end());
    let callers: Vec<&str> = record
        .iter()
        .filter(|(k, _)| *k == "caller")
        .map(|(_, v)| *v)
        .collect();
    let expected = at(line);
    assert_eq!(callers, [expected.as_str(), expected.as_str()]);
    assert!(record.contains(&("error", "null")));
}
