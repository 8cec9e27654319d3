use super::AnalysisError;
use crate::discovery::FileFinder;
use crate::parser::xml::{LayoutParser, XmlParseResult};
use crate::report::LayoutDatabase;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Counts from one [`LayoutAnalyzer::analyze`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    pub layout_files: usize,
}

/// Collects view classes and onClick handlers from every layout under a `res` directory
pub struct LayoutAnalyzer {
    parser: LayoutParser,
    classes: BTreeSet<String>,
    on_clicks: BTreeSet<String>,
}

impl LayoutAnalyzer {
    pub fn new() -> Self {
        Self {
            parser: LayoutParser::new(),
            classes: BTreeSet::new(),
            on_clicks: BTreeSet::new(),
        }
    }

    /// Parse all XML files under `layout` and `layout-*` directories of `res_dir`.
    ///
    /// A malformed layout aborts the whole run; nothing from that run is kept.
    pub fn analyze(&mut self, res_dir: &Path) -> Result<AnalysisStats, AnalysisError> {
        let files = FileFinder::new(res_dir).find_layouts()?;

        let mut collected = XmlParseResult::new();
        for file in &files {
            let contents = file.read_contents().map_err(|source| AnalysisError::Read {
                path: file.path.clone(),
                source,
            })?;
            let result = self
                .parser
                .parse(&file.path, &contents)
                .map_err(|source| AnalysisError::Parse {
                    path: file.path.clone(),
                    source,
                })?;
            collected.merge(result);
        }

        debug!(
            "Collected {} classes and {} onClick handlers from {}",
            collected.class_references.len(),
            collected.on_click_methods.len(),
            res_dir.display()
        );

        self.classes.extend(collected.class_references);
        self.on_clicks.extend(collected.on_click_methods);

        Ok(AnalysisStats {
            layout_files: files.len(),
        })
    }

    /// Class names referenced by the analyzed layouts
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Method names declared through `android:onClick`
    pub fn on_clicks(&self) -> &BTreeSet<String> {
        &self.on_clicks
    }

    pub fn database(&self) -> LayoutDatabase {
        LayoutDatabase::new(&self.classes, &self.on_clicks)
    }

    /// Write the collected sets as a layout database to `path`
    pub fn output(&self, path: &Path) -> Result<(), AnalysisError> {
        self.database()
            .save(path)
            .map_err(|source| AnalysisError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Layout database written to {}", path.display());
        Ok(())
    }
}

impl Default for LayoutAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
