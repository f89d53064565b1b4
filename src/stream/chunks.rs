//! Lazy, depth-first chunk iteration.

use std::io::Write;
use std::iter::FusedIterator;
use std::vec;

use tracing::{debug, error, trace};

use super::context::RenderContext;
use super::fragments::FragmentRegistry;
use super::sections::{SectionId, SectionScheduler, Segment, split_sections};
use crate::error::{Error, Result};

/// Totals reported after a stream has been written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub chunks: usize,
    pub bytes: usize,
}

/// One node's rendered markup, partially consumed.
struct Frame {
    text: String,
    fragments: FragmentRegistry,
    segments: vec::IntoIter<Segment>,
}

impl Frame {
    fn new(text: String, fragments: FragmentRegistry) -> Self {
        let segments = split_sections(&text, fragments.key()).into_iter();
        Self {
            text,
            fragments,
            segments,
        }
    }
}

/// Pull-based sequence of markup chunks.
///
/// Nothing is rendered until the first call to `next`. Each call either
/// yields the next run of text of the node currently being expanded, or
/// reaches a section token and renders that subtree before continuing, so
/// chunks come out in document order. A consumer that stops early leaves the
/// rest of the tree unrendered.
///
/// The stream is single-use. It yields `Err` and then stops if a section
/// token has no callback, if callbacks are left over at the end, or if a
/// callback fails.
pub struct ChunkStream<'a> {
    sections: SectionScheduler<'a>,
    frames: Vec<Frame>,
    finished: bool,
    emitted: usize,
}

impl<'a> ChunkStream<'a> {
    /// Create a stream whose document is produced by `root`.
    ///
    /// The root is buffered as the first section, so this does no rendering.
    pub fn new<F>(root: F) -> Self
    where
        F: FnOnce(&mut RenderContext<'_, 'a>) -> Result<()> + 'a,
    {
        let mut sections = SectionScheduler::new();
        let root_id = sections.buffer(root);
        let root = Frame {
            text: String::new(),
            fragments: FragmentRegistry::new(sections.key()),
            segments: vec![Segment::Section(root_id)].into_iter(),
        };

        Self {
            sections,
            frames: vec![root],
            finished: false,
            emitted: 0,
        }
    }

    /// Number of nodes currently open on the expansion path.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Chunks yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Write every remaining chunk to `writer`.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<StreamStats> {
        let mut stats = StreamStats::default();
        for chunk in self {
            let chunk = chunk?;
            writer.write_all(chunk.as_bytes())?;
            stats.chunks += 1;
            stats.bytes += chunk.len();
        }
        debug!(chunks = stats.chunks, bytes = stats.bytes, "stream written");
        Ok(stats)
    }

    fn expand(&mut self, id: SectionId) -> Result<Frame> {
        let section = self.sections.take(id).ok_or(Error::UnknownSection(id))?;

        let mut cx = RenderContext::new(&mut self.sections);
        section(&mut cx)?;
        let (text, fragments) = cx.finish()?;

        trace!(
            section = %id,
            depth = self.frames.len(),
            bytes = text.len(),
            fragments = fragments.len(),
            "expanded section"
        );
        Ok(Frame::new(text, fragments))
    }

    fn fail(&mut self, err: Error) -> Option<Result<String>> {
        error!(error = %err, emitted = self.emitted, "stream aborted");
        self.finished = true;
        self.frames.clear();
        Some(Err(err))
    }
}

impl Iterator for ChunkStream<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let Some(frame) = self.frames.last_mut() else {
                let pending = self.sections.pending();
                if pending > 0 {
                    return self.fail(Error::OrphanedSections(pending));
                }
                self.finished = true;
                debug!(
                    chunks = self.emitted,
                    sections = self.sections.buffered(),
                    "stream complete"
                );
                return None;
            };

            match frame.segments.next() {
                None => {
                    self.frames.pop();
                }
                Some(Segment::Text(range)) => {
                    if range.is_empty() {
                        continue;
                    }
                    let chunk = frame.fragments.substitute(&frame.text[range]);
                    self.emitted += 1;
                    return Some(Ok(chunk));
                }
                Some(Segment::Section(id)) => match self.expand(id) {
                    Ok(child) => self.frames.push(child),
                    Err(err) => return self.fail(err),
                },
            }
        }
        None
    }
}

impl FusedIterator for ChunkStream<'_> {}
