use crate::shell::Environment;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Problems converting the environment into a tool's arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("Must provide \"{name}\": {help}")]
    Missing { name: &'static str, help: &'static str },
    #[error("Must provide \"{name}\": {help}")]
    Invalid { name: &'static str, help: &'static str },
}

/// Typed arguments of a tool, read out of the shell environment.
///
/// Implementations ignore keys they do not know about.
pub trait FromEnvironment: Sized {
    fn from_environment(env: &Environment) -> Result<Self, ArgError>;
}

/// A named parameter and the explanation printed when it is unusable
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub help: &'static str,
}

impl Param {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self { name, help }
    }

    /// A path that must be present; `null` counts as absent
    pub fn required_path(&self, env: &Environment) -> Result<PathBuf, ArgError> {
        match env.get(self.name) {
            None | Some(Value::Null) => Err(ArgError::Missing {
                name: self.name,
                help: self.help,
            }),
            Some(value) => self.as_path(value),
        }
    }

    /// A path that may be left unset; an explicit `null` is rejected
    pub fn optional_path(&self, env: &Environment) -> Result<Option<PathBuf>, ArgError> {
        env.get(self.name).map(|value| self.as_path(value)).transpose()
    }

    fn as_path(&self, value: &Value) -> Result<PathBuf, ArgError> {
        match value {
            Value::String(s) if !s.is_empty() => Ok(PathBuf::from(s)),
            _ => Err(ArgError::Invalid {
                name: self.name,
                help: self.help,
            }),
        }
    }
}
