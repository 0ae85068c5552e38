//! Runtime support for ahead-of-time compiled Jinja-like templates.
//!
//! The root crate hosts the cross-module integration tests and benchmarks;
//! all runtime code lives in `jinja-aot-runtime`, re-exported here.

pub use jinja_aot_runtime::*;
