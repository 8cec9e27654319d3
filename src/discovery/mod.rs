mod file_finder;

pub use file_finder::{FileFinder, SourceFile, LAYOUT_DIR_PREFIX};

use std::path::PathBuf;
use thiserror::Error;

/// Layout discovery errors
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to read resource directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to walk layout directory: {0}")]
    Walk(#[from] walkdir::Error),
}
