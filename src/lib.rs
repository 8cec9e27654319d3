//! droidtools - interactive shell for Android app analysis tools
//!
//! The shell keeps a key/value environment across commands and runs registered
//! tools against it. Tools return updates to the environment, so one tool's
//! output can be the next tool's input.
//!
//! # Architecture
//!
//! 1. **Shell** - read-eval-print loop, builtins and the session environment
//! 2. **Tools** - registry of commands with typed arguments read from the environment
//! 3. **Layout analysis** - discover `res/layout*` files, parse them, collect
//!    view classes and onClick handlers
//! 4. **Reporting** - write the layout database as JSON

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod shell;
pub mod tools;

pub use analysis::{AnalysisError, AnalysisStats, LayoutAnalyzer};
pub use config::Config;
pub use discovery::FileFinder;
pub use parser::xml::LayoutParser;
pub use report::LayoutDatabase;
pub use shell::{Environment, Flow, Shell};
pub use tools::{Tool, ToolRegistry};
