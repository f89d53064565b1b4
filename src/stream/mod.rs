//! Streaming markup engine.
//!
//! Rendering code builds one node's markup at a time with an ordinary nested
//! builder ([`RenderContext`]). Two kinds of placeholder text are embedded in
//! that markup and resolved later:
//!
//! - **Fragment tokens** (`:fragment_<key><id>`) stand in for raw, already-formed
//!   markup that must not pass through the builder's escaping. Each node owns
//!   a [`FragmentRegistry`] that splices the raw text back in once the node's
//!   markup is finished.
//! - **Section tokens** (`:section_<key><id>_`) stand in for whole subtrees whose
//!   rendering is deferred. A single [`SectionScheduler`] holds the deferred
//!   callbacks for the entire export.
//!
//! [`ChunkStream`] drives the expansion: it splits a node's markup on section
//! tokens, yields the text between them, and renders each section the moment
//! it is reached, depth-first. Only the nodes on the current path are held in
//! memory.
//!
//! Every token carries the stream's random [`TokenKey`], which never appears
//! in the output. Escaped record text that happens to spell a token therefore
//! never matches one.
//!
//! # Example
//!
//! ```
//! use findaid::stream::{Attributes, ChunkStream};
//!
//! let chunks: Vec<String> = ChunkStream::new(|cx| {
//!     cx.element("list", Attributes::new(), |cx| {
//!         cx.defer(|cx| cx.text_element("item", Attributes::new(), "deferred"))?;
//!         cx.fragment_element("item", Attributes::new(), "<emph>raw</emph>")
//!     })
//! })
//! .collect::<findaid::Result<_>>()
//! .unwrap();
//!
//! assert_eq!(
//!     chunks.concat(),
//!     "<list><item>deferred</item><item><emph>raw</emph></item></list>"
//! );
//! ```

mod builder;
mod chunks;
mod context;
mod fragments;
mod sections;

pub use builder::{Attributes, MarkupBuilder};
pub use chunks::{ChunkStream, StreamStats};
pub use context::RenderContext;
pub use fragments::{FragmentId, FragmentRegistry, normalize_ampersands};
pub use sections::{SectionFn, SectionId, SectionScheduler, Segment, split_sections};

use std::fmt;

use uuid::Uuid;

/// Number of lowercase hex digits in every token id.
///
/// Fixed width keeps tokens prefix-free: `:fragment_<key>1` can never match
/// the start of `:fragment_<key>12`.
pub(crate) const ID_WIDTH: usize = 16;

/// Random value shared by every token of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKey(u128);

impl TokenKey {
    /// A fresh key from a v4 UUID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().as_u128())
    }

    /// A caller-chosen key, for reproducible token text.
    pub const fn fixed(key: u128) -> Self {
        Self(key)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Parse the fixed-width hex id at the start of `s`.
pub(crate) fn parse_token_id(s: &str) -> Option<u64> {
    let digits = s.get(..ID_WIDTH)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
