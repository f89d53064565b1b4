//! The handle rendering code writes one node through.

use super::builder::{Attributes, MarkupBuilder};
use super::fragments::FragmentRegistry;
use super::sections::{SectionId, SectionScheduler};
use crate::error::Result;

/// Builder, fragment registry and section scheduler for one node.
///
/// Each deferred section gets its own context with a fresh builder and a
/// fresh registry; the scheduler is shared by the whole export. From the
/// rendering code's point of view this is a single nested builder: raw
/// markup goes through [`fragment`](Self::fragment), whole subtrees through
/// [`defer`](Self::defer), and everything else is escaped text.
pub struct RenderContext<'s, 'a> {
    xml: MarkupBuilder,
    fragments: FragmentRegistry,
    sections: &'s mut SectionScheduler<'a>,
}

impl<'s, 'a> RenderContext<'s, 'a> {
    pub fn new(sections: &'s mut SectionScheduler<'a>) -> Self {
        Self {
            xml: MarkupBuilder::new(),
            fragments: FragmentRegistry::new(sections.key()),
            sections,
        }
    }

    pub fn declaration(&mut self) -> Result<()> {
        self.xml.declaration()
    }

    /// Write `<name attrs>`, run `body`, then write `</name>`.
    pub fn element<F>(&mut self, name: &str, attrs: Attributes, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.xml.start(name, &attrs)?;
        body(self)?;
        self.xml.end(name)
    }

    /// Write an element containing only escaped text.
    pub fn text_element(&mut self, name: &str, attrs: Attributes, text: &str) -> Result<()> {
        self.xml.start(name, &attrs)?;
        self.xml.text(text)?;
        self.xml.end(name)
    }

    pub fn empty_element(&mut self, name: &str, attrs: Attributes) -> Result<()> {
        self.xml.empty(name, &attrs)
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.xml.text(text)
    }

    /// Embed `raw` unescaped.
    pub fn fragment(&mut self, raw: impl Into<String>) -> Result<()> {
        let token = self.fragments.register(raw);
        self.xml.text(&token)
    }

    /// Write an element whose content is `raw`, unescaped.
    pub fn fragment_element(
        &mut self,
        name: &str,
        attrs: Attributes,
        raw: impl Into<String>,
    ) -> Result<()> {
        self.xml.start(name, &attrs)?;
        self.fragment(raw)?;
        self.xml.end(name)
    }

    /// Defer a subtree: `section` runs in its own context when the stream
    /// reaches this point.
    pub fn defer<F>(&mut self, section: F) -> Result<()>
    where
        F: FnOnce(&mut RenderContext<'_, 'a>) -> Result<()> + 'a,
    {
        let id = self.buffer(section);
        let token = id.token(self.sections.key());
        self.xml.text(&token)
    }

    /// Register a section without embedding its token.
    ///
    /// The caller must write the id's token under [`key`](Self::key) into the
    /// markup exactly once; a section that is never emitted fails the stream.
    pub fn buffer<F>(&mut self, section: F) -> SectionId
    where
        F: FnOnce(&mut RenderContext<'_, 'a>) -> Result<()> + 'a,
    {
        self.sections.buffer(section)
    }

    /// The key every token of this export carries.
    pub fn key(&self) -> super::TokenKey {
        self.sections.key()
    }

    /// Bytes of markup written so far for this node.
    pub fn written(&self) -> usize {
        self.xml.len()
    }

    /// The node's markup text and the registry its fragment tokens refer to.
    pub fn finish(self) -> Result<(String, FragmentRegistry)> {
        Ok((self.xml.into_string()?, self.fragments))
    }
}
