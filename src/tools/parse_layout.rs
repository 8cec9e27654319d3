use super::args::Param;
use super::{FromEnvironment, Tool};
use crate::analysis::LayoutAnalyzer;
use crate::report::TerminalReporter;
use crate::shell::{EnvUpdate, Environment};
use crate::tools::ArgError;
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const DISASSEMBLED: Param = Param::new(
    "disassembled",
    "the path to the disassembled apk folder",
);
const LAYOUT_DATABASE: Param = Param::new(
    "layout_database",
    "the file path to store the parsed layout database",
);

/// Arguments of `parse_layout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutArgs {
    /// Decompiled apk folder; layouts are read from its `res` directory
    pub disassembled: PathBuf,
    /// Output file, when the environment names one
    pub layout_database: Option<PathBuf>,
}

impl FromEnvironment for ParseLayoutArgs {
    fn from_environment(env: &Environment) -> Result<Self, ArgError> {
        Ok(Self {
            disassembled: DISASSEMBLED.required_path(env)?,
            layout_database: LAYOUT_DATABASE.optional_path(env)?,
        })
    }
}

/// Builds the layout database of a disassembled apk
pub struct ParseLayoutTool {
    default_database: PathBuf,
}

impl ParseLayoutTool {
    pub fn new(default_database: impl Into<PathBuf>) -> Self {
        Self {
            default_database: default_database.into(),
        }
    }
}

impl Default for ParseLayoutTool {
    fn default() -> Self {
        Self::new("layout_database.json")
    }
}

impl Tool for ParseLayoutTool {
    fn name(&self) -> &'static str {
        "parse_layout"
    }

    fn describe(&self) -> &str {
        "Generate the layout database from a disassembled apk"
    }

    fn execute(&self, env: &Environment, out: &mut dyn Write) -> Result<Option<EnvUpdate>> {
        let args = match ParseLayoutArgs::from_environment(env) {
            Ok(args) => args,
            Err(e) => {
                writeln!(out, "{}", e).into_diagnostic()?;
                return Ok(None);
            }
        };

        let layout_database = args
            .layout_database
            .unwrap_or_else(|| self.default_database.clone());
        let res_dir = args.disassembled.join("res");
        info!("Parsing layouts under {}", res_dir.display());

        let mut analyzer = LayoutAnalyzer::new();
        let stats = analyzer.analyze(&res_dir).into_diagnostic()?;
        analyzer.output(&layout_database).into_diagnostic()?;

        TerminalReporter::new(out)
            .report_layout_database(
                &layout_database,
                &stats,
                analyzer.classes().len(),
                analyzer.on_clicks().len(),
            )
            .into_diagnostic()?;

        let mut update = EnvUpdate::new();
        update.insert(
            LAYOUT_DATABASE.name.to_string(),
            Value::String(layout_database.to_string_lossy().into_owned()),
        );
        Ok(Some(update))
    }
}
