//! Error types for findaid operations.

use thiserror::Error;

use crate::stream::SectionId;

/// Errors that can occur while rendering or streaming a finding aid.
///
/// Missing optional record fields are never errors; they only omit markup.
/// `UnknownSection` and `OrphanedSections` are structural defects in the
/// rendering code itself and abort the stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("section token {0} has no registered renderer")]
    UnknownSection(SectionId),

    #[error("{0} deferred section(s) were registered but never emitted")]
    OrphanedSections(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
