//! Runtime support for ahead-of-time compiled Jinja-like templates.
//!
//! Template code generated by the compiler calls into this crate for
//! everything whose semantics differ from plain Rust: truthiness, equality,
//! loops, the `in` operator, HTML escaping and the built-in filters.
//!
//! # Modules
//!
//! - [`value`]: the dynamic [`Value`] type and its [`Kind`] classification
//! - [`semantics`]: truthiness, deep equality, uniform iteration, membership
//! - [`mod@escape`]: HTML escaping for interpolation
//! - [`filters`]: the filter library and [`FilterRegistry`]
//! - [`context`]: [`Runtime`] (globals + filters) and per-render [`Context`]
//! - [`config`]: `runtime.toml` loading
//!
//! ```
//! use jinja_aot_runtime::{is_truthy, Runtime, Value};
//!
//! let runtime = Runtime::builder().global("site", "example.com").build();
//! let context = runtime.create_context(&Default::default());
//! assert!(is_truthy(&context.lookup("site")));
//!
//! let title = runtime
//!     .apply_filter("title", &Value::from("the QUICK fox"), &[])
//!     .unwrap();
//! assert_eq!(title.as_str(), Some("The Quick Fox"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod escape;
pub mod filters;
pub mod semantics;
pub mod value;

pub use config::RuntimeConfig;
pub use context::{Context, Runtime, RuntimeBuilder};
pub use error::{ConfigError, Result, RuntimeError};
pub use escape::{escape, escape_str};
pub use filters::{Filter, FilterRegistry};
pub use semantics::{contains, entries, equals, for_each, is_truthy, Entries, LoopKey};
pub use value::{classify, Function, Kind, Map, Value};
