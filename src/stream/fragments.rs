//! Raw markup fragments that bypass the builder's escaping.
//!
//! The builder escapes every text node it writes, which would mangle content
//! that is already markup (a note containing `<emph>`, a title with a `<num>`
//! suffix). Such content is registered here instead; the builder only ever
//! sees an inert token, and [`FragmentRegistry::substitute`] splices the raw
//! text back into the finished markup. Tokens embed the stream's
//! [`TokenKey`], so escaped text can never be mistaken for one.

use std::borrow::Cow;
use std::fmt;

use memchr::memmem;

use super::{ID_WIDTH, TokenKey, parse_token_id};

/// Literal prefix of every fragment token.
pub(crate) const FRAGMENT_PREFIX: &str = ":fragment_";

/// Identifier of a registered fragment, unique within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub u64);

impl FragmentId {
    /// The token text embedded in markup for this fragment.
    pub fn token(self, key: TokenKey) -> String {
        format!("{FRAGMENT_PREFIX}{key}{self}")
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = ID_WIDTH)
    }
}

/// Raw text snippets keyed by token, scoped to one node's rendering.
#[derive(Debug, Clone)]
pub struct FragmentRegistry {
    key: TokenKey,
    prefix: String,
    fragments: Vec<String>,
}

impl FragmentRegistry {
    /// Create an empty registry minting tokens under `key`.
    pub fn new(key: TokenKey) -> Self {
        Self {
            key,
            prefix: format!("{FRAGMENT_PREFIX}{key}"),
            fragments: Vec::new(),
        }
    }

    pub fn key(&self) -> TokenKey {
        self.key
    }

    /// Store `raw` verbatim and return the token that stands in for it.
    ///
    /// Registering the same text twice yields two distinct tokens.
    pub fn register(&mut self, raw: impl Into<String>) -> String {
        let id = FragmentId(self.fragments.len() as u64);
        self.fragments.push(raw.into());
        id.token(self.key)
    }

    /// Look up the raw text registered under `id`.
    pub fn get(&self, id: FragmentId) -> Option<&str> {
        usize::try_from(id.0)
            .ok()
            .and_then(|index| self.fragments.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replace every registered token in `markup` with its raw text, then
    /// normalize stray ampersands.
    ///
    /// The scan is a single left-to-right pass; inserted raw text is never
    /// rescanned. Tokens this registry did not mint, including look-alikes
    /// under another key, are left untouched.
    /// Lookups do not consume entries, so one registry can substitute every
    /// segment of its node.
    pub fn substitute(&self, markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        let mut last = 0;

        if !self.fragments.is_empty() {
            for pos in memmem::find_iter(markup.as_bytes(), &self.prefix) {
                if pos < last {
                    continue;
                }
                let id_start = pos + self.prefix.len();
                let Some(raw) = parse_token_id(&markup[id_start..])
                    .and_then(|id| self.get(FragmentId(id)))
                else {
                    continue;
                };
                out.push_str(&markup[last..pos]);
                out.push_str(raw);
                last = id_start + ID_WIDTH;
            }
        }
        out.push_str(&markup[last..]);

        if let Cow::Owned(normalized) = normalize_ampersands(&out) {
            return normalized;
        }
        out
    }
}

/// Escape every `&` that is not immediately followed by an ASCII letter.
///
/// Named entity references (`&amp;`, `&lt;`, `&quot;`) survive untouched.
/// Numeric references (`&#169;`) and a trailing `&` do not start with a
/// letter and are re-escaped.
pub fn normalize_ampersands(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut last = 0;

    for pos in memchr::memchr_iter(b'&', bytes) {
        if bytes.get(pos + 1).is_some_and(u8::is_ascii_alphabetic) {
            continue;
        }
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 8));
        buf.push_str(&text[last..pos]);
        buf.push_str("&amp;");
        last = pos + 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}
