//! Layout resource analysis

mod layout;

pub use layout::{AnalysisStats, LayoutAnalyzer};

use crate::discovery::DiscoveryError;
use crate::parser::xml::LayoutParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Layout analysis errors
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error("Failed to read layout {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse layout {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: LayoutParseError,
    },
    #[error("Failed to write layout database {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
