//! Render contexts and the runtime that builds them.
//!
//! A [`Runtime`] owns the globals registry and the filter registry. It is
//! built once at startup through [`RuntimeBuilder`] and is read-only
//! afterwards; reconfiguring means building a new one with
//! [`Runtime::to_builder`].

use std::sync::Arc;

use serde::Serialize;

use crate::config::RuntimeConfig;
use crate::error::{ConfigError, Result, RuntimeError};
use crate::filters::{Filter, FilterRegistry};
use crate::value::{Function, Map, Value};

/// The variables visible to one render.
#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: Map,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from any value serializing to a mapping.
    ///
    /// `None`/unit serialize to null and produce an empty context.
    pub fn from_serialize<T: Serialize + ?Sized>(vars: &T) -> Result<Self> {
        match Value::from(serde_json::to_value(vars)?) {
            Value::Object(map) => Ok(Self {
                vars: Arc::unwrap_or_clone(map),
            }),
            Value::Null => Ok(Self::new()),
            other => Err(RuntimeError::InvalidContext(other.kind())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// The value bound to `name`, or undefined.
    pub fn lookup(&self, name: &str) -> Value {
        self.vars.get(name).cloned().unwrap_or_default()
    }

    /// Bind `name`, replacing an existing binding in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Call the function bound to `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.vars.get(name) {
            Some(Value::Function(func)) => func.call(args),
            _ => Err(RuntimeError::NotCallable(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.vars.iter()
    }

    pub fn into_map(self) -> Map {
        self.vars
    }

    /// The context as an object value.
    pub fn into_value(self) -> Value {
        Value::from(self.vars)
    }
}

/// Globals and filters shared by every render.
#[derive(Debug, Clone)]
pub struct Runtime {
    globals: Arc<Map>,
    filters: FilterRegistry,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// A runtime with the built-in filters and no globals.
    pub fn new() -> Self {
        RuntimeBuilder::new().build()
    }

    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// A builder seeded with this runtime's globals and filters.
    pub fn to_builder(&self) -> RuntimeBuilder {
        RuntimeBuilder {
            globals: (*self.globals).clone(),
            filters: self.filters.clone(),
        }
    }

    pub fn globals(&self) -> &Map {
        &self.globals
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// Apply the filter registered under `name`.
    pub fn apply_filter(&self, name: &str, value: &Value, args: &[Value]) -> Result<Value> {
        self.filters.apply(name, value, args)
    }

    /// Merge the globals with `user_vars` into a fresh context.
    ///
    /// User variables win on collision; an overridden global keeps its
    /// position in iteration order.
    pub fn create_context(&self, user_vars: &Map) -> Context {
        let mut vars = Map::with_capacity(self.globals.len() + user_vars.len());
        vars.extend(self.globals.iter().map(|(k, v)| (k.clone(), v.clone())));
        for (name, value) in user_vars {
            if let Some(shadowed) = vars.insert(name.clone(), value.clone()) {
                tracing::trace!(name = %name, kind = %shadowed.kind(), "user variable shadows global");
            }
        }
        Context { vars }
    }

    /// [`Runtime::create_context`] for user variables given as a serializable struct.
    pub fn create_context_from<T: Serialize + ?Sized>(&self, user_vars: &T) -> Result<Context> {
        let user = Context::from_serialize(user_vars)?;
        Ok(self.create_context(&user.vars))
    }
}

/// Configures a [`Runtime`] before any render.
#[derive(Debug, Clone)]
pub struct RuntimeBuilder {
    globals: Map,
    filters: FilterRegistry,
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeBuilder {
    /// Built-in filters, no globals.
    pub fn new() -> Self {
        Self {
            globals: Map::new(),
            filters: FilterRegistry::with_builtins(),
        }
    }

    /// Seed a builder from a loaded configuration file.
    pub fn from_config(config: RuntimeConfig) -> std::result::Result<Self, ConfigError> {
        let mut builder = Self::new();
        for (name, value) in config.globals {
            builder = builder.global(name, value);
        }
        for (alias, target) in config.filter_aliases {
            builder = builder.filter_alias(alias, target)?;
        }
        Ok(builder)
    }

    /// Add or override a global value.
    pub fn global(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if self.globals.insert(name.clone(), value.into()).is_some() {
            tracing::debug!(global = %name, "global overridden");
        } else {
            tracing::debug!(global = %name, "global registered");
        }
        self
    }

    /// Add or override a global extension function.
    pub fn function<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        let func = Function::new(name.as_str(), func);
        self.global(name, func)
    }

    /// Add or override a filter.
    pub fn filter<F>(mut self, name: impl Into<String>, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.register(name, filter);
        self
    }

    /// Make `alias` resolve to the filter named `target`.
    pub fn filter_alias(
        mut self,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let alias = alias.into();
        let target = target.into();
        if !self.filters.alias(alias.clone(), target.clone()) {
            return Err(ConfigError::UnknownAliasTarget { alias, target });
        }
        Ok(self)
    }

    pub fn build(self) -> Runtime {
        Runtime {
            globals: Arc::new(self.globals),
            filters: self.filters,
        }
    }
}
