//! Archival description records.
//!
//! The read-only tree a finding aid is exported from: a [`Resource`] at the
//! root and nested [`ArchivalObject`] components, each carrying dates,
//! extents, notes, instances, agent links and subjects. Fields are resolved
//! ahead of time; nothing in the export mutates a record.
//!
//! With the `serde` feature every record deserializes from JSON, and every
//! field is optional.

mod agents;
mod description;
mod instances;
mod notes;
mod record;

pub use agents::{Agent, AgentLink, AgentName, Subject, Term};
pub(crate) use agents::join_terms;
pub use description::{Date, Extent};
pub(crate) use description::non_empty;
pub use instances::{Container, DigitalObject, FileVersion, Instance};
pub use notes::{
    Bibliography, ChronologyItem, DefinedListItem, IndexItem, IndexNote, Note, Subnote,
};
pub use record::{ArchivalObject, FindingAid, Repository, Resource};
