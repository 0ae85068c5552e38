//! Filter library and the name-keyed registry generated code dispatches through.
//!
//! Each built-in filter is available as a typed function ([`text`],
//! [`collections`]) and as a registered [`Filter`] taking positional template
//! arguments. Registration replaces entries by name; aliases are resolved on
//! every lookup, so overriding `size` also changes what `length` does.

pub(crate) mod args;
mod builtins;
pub mod collections;
pub mod text;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RuntimeError};
use crate::value::Value;

/// A filter callable from template code.
pub trait Filter: Send + Sync {
    /// Apply the filter to `value` with positional `args`.
    fn filter(&self, value: &Value, args: &[Value]) -> Result<Value>;
}

impl<F> Filter for F
where
    F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync,
{
    fn filter(&self, value: &Value, args: &[Value]) -> Result<Value> {
        self(value, args)
    }
}

/// Filters by name, plus aliases pointing at other names.
#[derive(Clone, Default)]
pub struct FilterRegistry {
    filters: HashMap<String, Arc<dyn Filter>>,
    aliases: HashMap<String, String>,
}

impl FilterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in filter and alias.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register(&mut registry);
        registry
    }

    /// Register `filter` under `name`, replacing any filter of that name.
    pub fn register<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Filter + 'static,
    {
        let name = name.into();
        if self.filters.insert(name.clone(), Arc::new(filter)).is_some() {
            tracing::debug!(filter = %name, "filter overridden");
        } else {
            tracing::debug!(filter = %name, "filter registered");
        }
    }

    /// Make `alias` resolve to whatever `target` resolves to at lookup time.
    ///
    /// Returns `false` (and registers nothing) when `target` is unknown.
    pub fn alias(&mut self, alias: impl Into<String>, target: impl Into<String>) -> bool {
        let alias = alias.into();
        let target = target.into();
        let target = if self.filters.contains_key(&target) {
            target
        } else if let Some(resolved) = self.aliases.get(&target) {
            resolved.clone()
        } else {
            return false;
        };
        tracing::debug!(alias = %alias, target = %target, "filter alias registered");
        self.aliases.insert(alias, target);
        true
    }

    /// Look a filter up by name. A directly registered filter wins over an
    /// alias of the same name.
    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.filters
            .get(name)
            .or_else(|| {
                self.aliases
                    .get(name)
                    .and_then(|target| self.filters.get(target))
            })
            .map(|filter| filter.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Apply the filter registered as `name`.
    pub fn apply(&self, name: &str, value: &Value, args: &[Value]) -> Result<Value> {
        let Some(filter) = self.get(name) else {
            tracing::debug!(filter = %name, "unknown filter");
            return Err(RuntimeError::UnknownFilter(name.to_string()));
        };
        filter.filter(value, args)
    }

    /// Every resolvable name (filters and aliases), sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .filters
            .keys()
            .chain(self.aliases.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .field("aliases", &self.aliases)
            .finish()
    }
}
