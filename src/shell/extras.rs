use super::EnvUpdate;
use serde_json::Value;

/// Split `key=value` into its parts; the key must be non-empty
pub fn split_assignment(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Inline arguments typed after a tool name, e.g. `parse_layout disassembled=app/`
#[derive(Debug, Default)]
pub struct Extras {
    pub update: EnvUpdate,
    /// Tokens that are not `key=value`
    pub ignored: Vec<String>,
}

pub fn parse_extras(args: &str) -> Extras {
    let mut extras = Extras::default();

    for token in args.split_whitespace() {
        match split_assignment(token) {
            Some((key, value)) => {
                extras
                    .update
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
            None => extras.ignored.push(token.to_string()),
        }
    }

    extras
}
