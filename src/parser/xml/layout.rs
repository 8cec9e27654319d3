use super::{LayoutParseError, XmlParseResult, ANDROID_NS};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::path::Path;
use tracing::debug;

/// Tags that describe layout structure rather than naming a view class
pub const STRUCTURAL_TAGS: [&str; 5] = ["include", "merge", "requestFocus", "view", "fragment"];

/// Parser for Android layout XML files
pub struct LayoutParser;

impl LayoutParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a layout XML file and extract class references and onClick handlers
    pub fn parse(&self, path: &Path, contents: &str) -> Result<XmlParseResult, LayoutParseError> {
        let mut result = XmlParseResult::new();
        let mut reader = NsReader::from_str(contents);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut seen_root = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    check_single_root(depth, &mut seen_root)?;
                    self.visit_element(&reader, &e, &mut result)?;
                    depth += 1;
                }
                Event::Empty(e) => {
                    check_single_root(depth, &mut seen_root)?;
                    self.visit_element(&reader, &e, &mut result)?;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    if depth == 0 && !text.trim().is_empty() {
                        return Err(LayoutParseError::TextOutsideRoot);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(LayoutParseError::NoRootElement);
        }
        if depth > 0 {
            return Err(LayoutParseError::UnclosedElement);
        }

        debug!(
            "Parsed layout {}: {} class references, {} onClick handlers",
            path.display(),
            result.class_references.len(),
            result.on_click_methods.len()
        );

        Ok(result)
    }

    fn visit_element(
        &self,
        reader: &NsReader<&[u8]>,
        e: &BytesStart<'_>,
        result: &mut XmlParseResult,
    ) -> Result<(), LayoutParseError> {
        let tag_name = element_tag(reader, e)?;
        let is_structural = STRUCTURAL_TAGS.contains(&tag_name.as_str());

        // Custom views are usually written as the tag itself
        if !is_structural {
            result.class_references.insert(tag_name.clone());
        }

        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if is_reserved_attribute(attr.key.as_ref()) {
                continue;
            }
            let (ns, local) = reader.resolve_attribute(attr.key);
            let local = String::from_utf8_lossy(local.as_ref()).to_string();

            match ns {
                ResolveResult::Bound(Namespace(uri)) if uri == ANDROID_NS.as_bytes() => {}
                ResolveResult::Unknown(prefix) => {
                    return Err(LayoutParseError::UnboundPrefix(
                        String::from_utf8_lossy(&prefix).to_string(),
                    ));
                }
                _ => continue,
            }

            let value = attr.unescape_value()?.to_string();
            if value.is_empty() {
                continue;
            }

            match (tag_name.as_str(), local.as_str()) {
                // <view class="com.example.Widget"/>
                ("view", "class") => {
                    result.class_references.insert(value);
                }
                // <fragment android:name="com.example.MyFragment"/>
                ("fragment", "name") => {
                    result.class_references.insert(value);
                }
                (_, "onClick") => {
                    result.on_click_methods.insert(value);
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl Default for LayoutParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A second element at depth zero means content after the root
fn check_single_root(depth: usize, seen_root: &mut bool) -> Result<(), LayoutParseError> {
    if depth == 0 && *seen_root {
        return Err(LayoutParseError::TrailingContent);
    }
    *seen_root = true;
    Ok(())
}

/// `xmlns` declarations and `xml:*` attributes
fn is_reserved_attribute(key: &[u8]) -> bool {
    key == b"xmlns" || key.starts_with(b"xmlns:") || key.starts_with(b"xml:")
}

/// Element name as recorded in the database; namespaced tags use `{uri}local`
fn element_tag(reader: &NsReader<&[u8]>, e: &BytesStart<'_>) -> Result<String, LayoutParseError> {
    let (ns, local) = reader.resolve_element(e.name());
    let local = String::from_utf8_lossy(local.as_ref()).to_string();

    match ns {
        ResolveResult::Unbound => Ok(local),
        ResolveResult::Bound(Namespace(uri)) => {
            Ok(format!("{{{}}}{}", String::from_utf8_lossy(uri), local))
        }
        ResolveResult::Unknown(prefix) => Err(LayoutParseError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).to_string(),
        )),
    }
}
