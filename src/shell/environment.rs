use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Partial environment returned by a tool or typed inline after a command
pub type EnvUpdate = BTreeMap<String, Value>;

/// Parameters shared by every command of a session.
///
/// Values are replaced whole; there is no way to remove a key once set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Value of `key` when it holds a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn merge(&mut self, update: EnvUpdate) {
        self.vars.extend(update);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Indented JSON rendering used by `set` without arguments
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
