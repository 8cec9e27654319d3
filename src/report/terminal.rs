use crate::analysis::AnalysisStats;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Terminal reporter for finished tool runs
pub struct TerminalReporter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> TerminalReporter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    /// Print where the layout database went and what it holds
    pub fn report_layout_database(
        &mut self,
        path: &Path,
        stats: &AnalysisStats,
        classes: usize,
        on_clicks: usize,
    ) -> io::Result<()> {
        writeln!(self.out, "{} saved to {}", "Done,".green().bold(), path.display())?;
        writeln!(
            self.out,
            "  {} layout files, {} classes, {} onClick handlers",
            stats.layout_files, classes, on_clicks
        )
    }
}
