//! Tools attachable to the shell as commands

mod args;
mod parse_layout;

pub use args::{ArgError, FromEnvironment};
pub use parse_layout::{ParseLayoutArgs, ParseLayoutTool};

use crate::shell::{EnvUpdate, Environment};
use miette::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

/// A command contributed to the shell
pub trait Tool {
    /// Command name typed at the prompt
    fn name(&self) -> &'static str;

    /// One-line description shown by `help`
    fn describe(&self) -> &str;

    /// Run against the current environment.
    ///
    /// Returns the parameters to merge back into the environment, or `None` when the
    /// tool did nothing (for example a required parameter was missing). Errors end the
    /// session.
    fn execute(&self, env: &Environment, out: &mut dyn Write) -> Result<Option<EnvUpdate>>;
}

/// Tools available to a session, keyed by command name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool
    pub fn with_default_tools(default_layout_database: impl Into<PathBuf>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ParseLayoutTool::new(default_layout_database)));
        registry
    }

    /// Add a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.values().map(|tool| tool.as_ref())
    }
}
