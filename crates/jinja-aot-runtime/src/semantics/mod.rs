//! Template-language semantics layered over [`Value`](crate::Value).
//!
//! - [`truthiness`]: conditional coercion
//! - [`equality`]: structural `==`
//! - [`iteration`]: one loop entry point for sequences and mappings
//! - [`membership`]: the `in` operator

pub mod equality;
pub mod iteration;
pub mod membership;
pub mod truthiness;

pub use equality::equals;
pub use iteration::{entries, for_each, Entries, LoopKey};
pub use membership::contains;
pub use truthiness::is_truthy;
