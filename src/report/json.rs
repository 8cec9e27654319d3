use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk layout database written by `parse_layout`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDatabase {
    pub external_methods: ExternalMethods,
    pub classes: Vec<String>,
}

/// Methods the layouts expect to find on their hosting component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalMethods {
    #[serde(rename = "onClick")]
    pub on_click: Vec<String>,
}

impl LayoutDatabase {
    pub fn new(classes: &BTreeSet<String>, on_clicks: &BTreeSet<String>) -> Self {
        Self {
            external_methods: ExternalMethods {
                on_click: on_clicks.iter().cloned().collect(),
            },
            classes: classes.iter().cloned().collect(),
        }
    }

    /// Serialize with four-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
    }

    /// Write the database to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Load a database previously written by [`LayoutDatabase::save`]
    pub fn load(path: &Path) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
