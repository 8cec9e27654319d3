use super::DiscoveryError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Directory name prefix shared by `layout` and its qualified variants (`layout-land`, ...)
pub const LAYOUT_DIR_PREFIX: &str = "layout";

/// Represents a discovered layout file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load and return owned contents
    pub fn read_contents(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// File finder for discovering layout resources under a `res` directory
pub struct FileFinder<'a> {
    res_dir: &'a Path,
}

impl<'a> FileFinder<'a> {
    pub fn new(res_dir: &'a Path) -> Self {
        Self { res_dir }
    }

    /// Immediate subdirectories of the resource root named `layout*`, sorted by name
    pub fn find_layout_dirs(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        debug!("Scanning for layout directories in: {}", self.res_dir.display());

        let read_dir_error = |source| DiscoveryError::ReadDir {
            path: self.res_dir.to_path_buf(),
            source,
        };

        let mut dirs = Vec::new();
        for entry in fs::read_dir(self.res_dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with(LAYOUT_DIR_PREFIX) {
                continue;
            }
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        debug!("Found {} layout directories", dirs.len());
        Ok(dirs)
    }

    /// Every `.xml` file below a layout directory, at any depth
    pub fn scan_directory(&self, dir: &Path) -> Result<Vec<SourceFile>, walkdir::Error> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("xml") {
                trace!("Skipping: {}", path.display());
                continue;
            }

            trace!("Found layout: {}", path.display());
            files.push(SourceFile::new(path.to_path_buf()));
        }

        Ok(files)
    }

    /// Find layout XML files across all layout directories
    pub fn find_layouts(&self) -> Result<Vec<SourceFile>, DiscoveryError> {
        let dirs = self.find_layout_dirs()?;

        let mut files = Vec::new();
        for dir in &dirs {
            files.extend(self.scan_directory(dir)?);
        }

        debug!("Found {} layout files", files.len());
        Ok(files)
    }
}
