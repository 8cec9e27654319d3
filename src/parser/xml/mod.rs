mod layout;

pub use layout::{LayoutParser, STRUCTURAL_TAGS};

use std::collections::BTreeSet;
use thiserror::Error;

/// Namespace of the `android:` attributes
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Reasons a layout document is rejected
#[derive(Error, Debug)]
pub enum LayoutParseError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),
    #[error("no root element found")]
    NoRootElement,
    #[error("unclosed element at end of document")]
    UnclosedElement,
    #[error("content after the root element")]
    TrailingContent,
    #[error("text outside the root element")]
    TextOutsideRoot,
    #[error("unbound namespace prefix `{0}`")]
    UnboundPrefix(String),
}

/// Result of parsing Android layout XML files
#[derive(Debug, Default)]
pub struct XmlParseResult {
    /// Class names referenced in the XML
    pub class_references: BTreeSet<String>,

    /// Method names declared through `android:onClick`
    pub on_click_methods: BTreeSet<String>,
}

impl XmlParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: XmlParseResult) {
        self.class_references.extend(other.class_references);
        self.on_click_methods.extend(other.on_click_methods);
    }
}
