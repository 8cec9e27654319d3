use super::Environment;
use crate::tools::ToolRegistry;
use std::io::{self, Write};
use std::process::Command;
use tracing::{debug, warn};

/// Commands handled by the shell itself, with their help text
pub const BUILTINS: [(&str, &str); 4] = [
    ("help", "List available commands with \"help\" or detailed help with \"help <command>\" (also \"?\")"),
    ("quit", "Say goodbye"),
    ("set", "set key value; if none, print all current parameters"),
    ("shell", "Invoke a shell command (also \"!<command>\")"),
];

/// `set`, `set <key> <value>`
pub fn set(env: &mut Environment, args: &str, out: &mut dyn Write) -> io::Result<()> {
    let args = args.trim();
    if args.is_empty() {
        return writeln!(out, "{}", env.to_pretty_string());
    }

    match args.split_once(char::is_whitespace) {
        Some((key, value)) => {
            let value = value.trim();
            env.set(key, value);
            writeln!(out, "{} => {}", key, value)
        }
        None => writeln!(out, "Usage: set <key> <value>"),
    }
}

/// Run `command` through the host shell and wait for it; output goes straight to the terminal
pub fn run_host_command(command: &str) {
    let command = command.trim();
    if command.is_empty() {
        return;
    }

    match host_shell(command).status() {
        Ok(status) => debug!("`{}` exited with {}", command, status),
        Err(e) => warn!("Failed to run `{}`: {}", command, e),
    }
}

#[cfg(windows)]
fn host_shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn host_shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// `help`, `help <command>`
pub fn help(tools: &ToolRegistry, args: &str, out: &mut dyn Write) -> io::Result<()> {
    let topic = args.trim();

    let mut commands: Vec<(&str, &str)> = BUILTINS.to_vec();
    commands.extend(tools.iter().map(|tool| (tool.name(), tool.describe())));

    if !topic.is_empty() {
        return match commands.iter().find(|(name, _)| *name == topic) {
            Some((_, description)) => writeln!(out, "{}", description),
            None => writeln!(out, "*** No help on {}", topic),
        };
    }

    commands.sort_by_key(|(name, _)| *name);
    let width = commands.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    writeln!(out, "Commands (type help <command>):")?;
    for (name, description) in commands {
        writeln!(out, "  {:width$}  {}", name, description, width = width)?;
    }
    Ok(())
}
