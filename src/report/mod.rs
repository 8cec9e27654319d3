mod json;
mod terminal;

pub use json::{ExternalMethods, LayoutDatabase};
pub use terminal::TerminalReporter;
