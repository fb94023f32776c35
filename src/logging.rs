//! One JSON object per event: `ts`, `level`, `event`, then caller fields.

use serde_json::{Map, Number, Value};
use std::cell::Cell;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(crate::config::DEFAULT_LOG_LEVEL) };
}

pub fn set_level(level: LogLevel) {
    MIN_LEVEL.with(|min| min.set(level));
}

pub fn enabled(level: LogLevel) -> bool {
    MIN_LEVEL.with(|min| level >= min.get())
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if !enabled(level) {
        return;
    }

    let payload = build_payload(now_unix_millis(), level, event, fields);
    emit(level, &payload.to_string());
}

/// Runs `f` and logs how long it took at debug level.
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = now_unix_millis();
    let result = f();
    log_event(
        LogLevel::Debug,
        "perf.measure",
        serde_json::json!({ "label": label, "elapsed_ms": now_unix_millis() - start }),
    );
    result
}

fn build_payload(ts: f64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert(
        "ts".to_string(),
        Number::from_f64(ts.floor()).map_or(Value::Null, Value::Number),
    );
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}
