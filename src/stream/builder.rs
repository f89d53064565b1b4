//! In-memory markup builder for a single node's own content.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Ordered element attributes.
///
/// Absent or empty values are dropped on insertion, so an optional field
/// that is missing never renders as `attr=""`.
///
/// ```
/// use findaid::stream::Attributes;
///
/// let attrs = Attributes::new()
///     .with("level", "series")
///     .with("otherlevel", "")
///     .with_opt("id", None::<&str>);
///
/// assert_eq!(attrs.len(), 1);
/// assert_eq!(attrs.get("level"), Some("series"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key="value"` unless `value` is empty.
    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.entries.push((key.into(), value.to_owned()));
        }
        self
    }

    /// Add `key="value"` when `value` is present and non-empty.
    pub fn with_opt<V: AsRef<str>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Escaping XML writer over an in-memory buffer.
///
/// Text nodes and attribute values are escaped by quick-xml; use a
/// [`FragmentRegistry`](super::FragmentRegistry) token for content that is
/// already markup.
pub struct MarkupBuilder {
    writer: Writer<Vec<u8>>,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    /// Write `<?xml version="1.0" encoding="UTF-8"?>` and a newline.
    pub fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.writer.get_mut().push(b'\n');
        Ok(())
    }

    pub fn start(&mut self, name: &str, attrs: &Attributes) -> Result<()> {
        self.writer.write_event(Event::Start(start_tag(name, attrs)))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &Attributes) -> Result<()> {
        self.writer.write_event(Event::Empty(start_tag(name, attrs)))?;
        Ok(())
    }

    /// Write an escaped text node.
    pub fn text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.writer.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.get_ref().is_empty()
    }

    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn start_tag<'n>(name: &'n str, attrs: &'n Attributes) -> BytesStart<'n> {
    let mut start = BytesStart::new(name);
    for (key, value) in attrs.iter() {
        start.push_attribute((key, value));
    }
    start
}
