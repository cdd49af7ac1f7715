//! Minimal owned element tree for navigating results documents
//!
//! IOF results documents are small (one class, one start list), so the
//! whole document is materialized as an owned tree rather than streamed.
//! Element and attribute names are stored as local names with any namespace
//! prefix stripped; the IOF namespace itself is not verified.
//!
//! Lookups come in two forms: `child`/`descendant`/`attr`/`text` return
//! `Option`, and the `require_*` variants return a typed error naming the
//! path that was absent, so extraction code can fail fast with `?`.

use crate::{ReportError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event as XmlEvent};

/// One element of a parsed results document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Parse a results document into its root element.
    ///
    /// The input should already be preprocessed (see
    /// [`crate::preprocess_results_xml`]). Only the first top-level
    /// element is kept.
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(XmlEvent::Start(e)) => {
                    stack.push(Element::from_start_tag(&e)?);
                }
                Ok(XmlEvent::Empty(e)) => {
                    let element = Element::from_start_tag(&e)?;
                    Element::close(element, &mut stack, &mut root);
                }
                Ok(XmlEvent::End(_)) => {
                    if let Some(element) = stack.pop() {
                        Element::close(element, &mut stack, &mut root);
                    }
                }
                Ok(XmlEvent::Text(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push_str(&e.unescape()?);
                    }
                }
                Ok(XmlEvent::CData(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(XmlEvent::Eof) => break,
                Err(e) => return Err(ReportError::Syntax(e)),
                _ => {}
            }
            buf.clear();
        }

        root.ok_or_else(|| ReportError::missing_element("document root"))
    }

    fn from_start_tag(tag: &BytesStart) -> Result<Element> {
        let name = String::from_utf8_lossy(tag.name().local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in tag.attributes() {
            let attr =
                attr.map_err(|e| ReportError::Syntax(quick_xml::Error::InvalidAttr(e)))?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
            attributes.push((key, value));
        }

        Ok(Element { name, attributes, children: Vec::new(), text: String::new() })
    }

    /// Completed element goes to its parent, or becomes the document root.
    fn close(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
        } else if root.is_none() {
            *root = Some(element);
        }
    }

    /// Local name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of an attribute by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed text content directly under this element, if non-empty.
    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// First descendant with the given local name, in document order.
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given local name, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Direct child lookup that fails with the missing path.
    pub fn require_child(&self, name: &str) -> Result<&Element> {
        self.child(name)
            .ok_or_else(|| ReportError::missing_element(format!("{}/{}", self.name, name)))
    }

    /// Descendant lookup that fails with the missing path.
    pub fn require_descendant(&self, name: &str) -> Result<&Element> {
        self.descendant(name)
            .ok_or_else(|| ReportError::missing_element(format!("{}//{}", self.name, name)))
    }

    /// Text lookup that fails with this element's name.
    pub fn require_text(&self) -> Result<&str> {
        self.text().ok_or_else(|| ReportError::missing_text(self.name.clone()))
    }

    /// Text content parsed as an integer, failing with the offending value.
    pub fn require_integer_text<T: std::str::FromStr>(&self) -> Result<T> {
        let text = self.require_text()?;
        text.parse()
            .map_err(|_| ReportError::invalid_integer(self.name.clone(), text))
    }
}
