//! Helper functions for integration tests
//!
// Note: Using #[allow(dead_code)] instead of #[expect] because test utility
// functions may be used by some test targets but not others.
#![allow(dead_code)]

use std::sync::Once;

use jinja_aot::{Map, Value};

static TRACING: Once = Once::new();

/// Install a test-writer fmt subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to `debug` for the runtime crate.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jinja_aot_runtime=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Build a template value from a JSON literal.
pub fn json(value: serde_json::Value) -> Value {
    Value::from(value)
}

/// Build user variables from a JSON object literal.
pub fn user_vars(value: serde_json::Value) -> Map {
    match Value::from(value) {
        Value::Object(map) => (*map).clone(),
        other => panic!("user variables must be a JSON object, got {}", other.kind()),
    }
}
