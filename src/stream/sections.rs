//! Deferred subtree rendering.
//!
//! A section is a callback that renders one subtree into a fresh
//! [`RenderContext`]. Rendering code registers it with the export-wide
//! [`SectionScheduler`] and embeds the returned token where the subtree
//! belongs; [`split_sections`] later finds those tokens again so the
//! subtree can be rendered in place. Tokens embed the scheduler's
//! [`TokenKey`], so only tokens minted by this export are recognized.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use memchr::memmem;

use super::context::RenderContext;
use super::{ID_WIDTH, TokenKey, parse_token_id};
use crate::error::Result;

/// Literal prefix of every section token.
pub(crate) const SECTION_PREFIX: &str = ":section_";

/// Literal suffix closing every section token.
const SECTION_SUFFIX: u8 = b'_';

/// Identifier of a buffered section, unique within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u64);

impl SectionId {
    /// The token text embedded in markup for this section.
    pub fn token(self, key: TokenKey) -> String {
        format!("{SECTION_PREFIX}{key}{self}_")
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = ID_WIDTH)
    }
}

/// A deferred rendering callback.
pub type SectionFn<'a> = Box<dyn FnOnce(&mut RenderContext<'_, 'a>) -> Result<()> + 'a>;

/// Deferred section callbacks for one export.
///
/// Each callback is expanded at most once: [`take`](Self::take) removes it.
/// Anything left after the export finishes was buffered but never emitted.
pub struct SectionScheduler<'a> {
    key: TokenKey,
    sections: HashMap<SectionId, SectionFn<'a>>,
    next_id: u64,
}

impl<'a> SectionScheduler<'a> {
    /// Create a scheduler with a fresh random key.
    pub fn new() -> Self {
        Self::with_key(TokenKey::random())
    }

    pub fn with_key(key: TokenKey) -> Self {
        Self {
            key,
            sections: HashMap::new(),
            next_id: 0,
        }
    }

    /// The key every token of this export carries.
    pub fn key(&self) -> TokenKey {
        self.key
    }

    /// Register a callback and return its id.
    pub fn buffer<F>(&mut self, section: F) -> SectionId
    where
        F: FnOnce(&mut RenderContext<'_, 'a>) -> Result<()> + 'a,
    {
        let id = SectionId(self.next_id);
        self.next_id += 1;
        self.sections.insert(id, Box::new(section));
        id
    }

    /// Remove and return the callback registered under `id`.
    pub fn take(&mut self, id: SectionId) -> Option<SectionFn<'a>> {
        self.sections.remove(&id)
    }

    /// Number of callbacks buffered but not yet taken.
    pub fn pending(&self) -> usize {
        self.sections.len()
    }

    /// Total number of callbacks ever buffered.
    pub fn buffered(&self) -> u64 {
        self.next_id
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionScheduler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SectionScheduler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionScheduler")
            .field("key", &self.key)
            .field("pending", &self.sections.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// A piece of node markup, as produced by [`split_sections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Byte range of literal markup in the split text.
    Text(Range<usize>),
    /// A section token to expand in place.
    Section(SectionId),
}

/// Split markup on the section tokens minted under `key`, preserving order.
///
/// The result always starts and ends with a [`Segment::Text`] (possibly
/// empty) and alternates between text and sections. Text that merely looks
/// like a token, or is a token under another key, stays literal.
pub fn split_sections(text: &str, key: TokenKey) -> Vec<Segment> {
    let prefix = format!("{SECTION_PREFIX}{key}");
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut last = 0;

    for pos in memmem::find_iter(bytes, &prefix) {
        if pos < last {
            continue;
        }
        let id_start = pos + prefix.len();
        let Some(id) = parse_token_id(&text[id_start..]) else {
            continue;
        };
        let end = id_start + ID_WIDTH;
        if bytes.get(end) != Some(&SECTION_SUFFIX) {
            continue;
        }
        segments.push(Segment::Text(last..pos));
        segments.push(Segment::Section(SectionId(id)));
        last = end + 1;
    }
    segments.push(Segment::Text(last..text.len()));

    segments
}
