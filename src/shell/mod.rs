//! Interactive command shell
//!
//! The shell keeps an [`Environment`] for the whole session. Builtins (`set`,
//! `shell`, `help`, `quit`) act on it directly; every registered tool runs with
//! the full environment and may hand back parameters for later commands, so the
//! output of one tool (e.g. `layout_database`) feeds the next.

mod builtin;
mod environment;
mod extras;

pub use builtin::BUILTINS;
pub use environment::{EnvUpdate, Environment};
pub use extras::{parse_extras, split_assignment, Extras};

use crate::config::Config;
use crate::tools::ToolRegistry;
use miette::{miette, IntoDiagnostic, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    env: Environment,
    tools: ToolRegistry,
    prompt: String,
    intro: String,
    history_file: Option<PathBuf>,
}

impl Shell {
    /// Create a shell seeded with the configured environment
    pub fn new(config: &Config, tools: ToolRegistry) -> Self {
        let mut env = Environment::new();
        for (key, value) in &config.env {
            env.set(key.clone(), value.clone());
        }

        Self {
            env,
            tools,
            prompt: config.shell.prompt.clone(),
            intro: config.shell.intro.clone(),
            history_file: config.shell.history_file.clone(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Execute one command line, writing user-facing output to `out`
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, args) = if let Some(rest) = line.strip_prefix('!') {
            ("shell", rest)
        } else if let Some(rest) = line.strip_prefix('?') {
            ("help", rest.trim_start())
        } else {
            line.split_once(char::is_whitespace).unwrap_or((line, ""))
        };
        debug!("Dispatching `{}`", command);

        match command {
            "set" => builtin::set(&mut self.env, args, out).into_diagnostic()?,
            "shell" => {
                out.flush().into_diagnostic()?;
                builtin::run_host_command(args);
            }
            "help" => builtin::help(&self.tools, args, out).into_diagnostic()?,
            "quit" => return Ok(Flow::Exit),
            _ if self.tools.get(command).is_some() => self.run_tool(command, args, out)?,
            _ => writeln!(out, "*** Unknown syntax: {}", line).into_diagnostic()?,
        }

        Ok(Flow::Continue)
    }

    fn run_tool(&mut self, name: &str, args: &str, out: &mut dyn Write) -> Result<()> {
        let extras = parse_extras(args);
        for token in &extras.ignored {
            writeln!(out, "Ignoring argument `{}` (expected key=value)", token).into_diagnostic()?;
        }
        self.env.merge(extras.update);

        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| miette!("Unknown tool: {}", name))?;

        if let Some(update) = tool.execute(&self.env, out)? {
            self.env.merge(update);
        }
        Ok(())
    }

    /// Read-eval-print loop on the terminal until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().into_diagnostic()?;
        if let Some(path) = &self.history_file {
            if let Err(e) = editor.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        println!("{}", self.intro);

        let result = loop {
            match editor.readline(&self.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            debug!("Failed to record history entry: {}", e);
                        }
                    }
                    match self.execute_line(&line, &mut io::stdout().lock()) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Exit) => break Ok(()),
                        Err(e) => break Err(e),
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break Ok(());
                }
                Err(e) => break Err(miette!("Failed to read input: {}", e)),
            }
        };

        if let Some(path) = &self.history_file {
            if let Err(e) = editor.save_history(path) {
                debug!("Failed to save history to {}: {}", path.display(), e);
            }
        }

        result
    }
}
