//! Resource and archival object records.

use super::{
    AgentLink, Bibliography, Date, DigitalObject, Extent, IndexNote, Instance, Note, Subject,
};

/// The root description of a finding aid.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Resource {
    pub title: Option<String>,
    /// Up to four identifier parts, joined with `.` in the output.
    pub identifier: Vec<String>,
    pub level: Option<String>,
    pub other_level: Option<String>,
    /// ISO 639-2 code of the described materials.
    pub language: Option<String>,
    pub repository: Repository,
    pub finding_aid: FindingAid,
    pub extents: Vec<Extent>,
    pub dates: Vec<Date>,
    pub notes: Vec<Note>,
    pub bibliographies: Vec<Bibliography>,
    pub indexes: Vec<IndexNote>,
    pub instances: Vec<Instance>,
    pub digital_objects: Vec<DigitalObject>,
    pub linked_agents: Vec<AgentLink>,
    pub subjects: Vec<Subject>,
    pub children: Vec<ArchivalObject>,
}

impl Resource {
    /// Identifier parts joined with `.`, skipping empty parts.
    pub fn unitid(&self) -> String {
        join_identifier(&self.identifier)
    }

    pub fn child(&self, index: usize) -> Option<&ArchivalObject> {
        self.children.get(index)
    }

    /// Number of archival objects below the resource, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// The repository holding the described materials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Repository {
    pub name: Option<String>,
    /// ISO 3166-1 country code.
    pub country: Option<String>,
    /// ISO 15511 agency code.
    pub org_code: Option<String>,
    pub image_url: Option<String>,
    pub address_lines: Vec<String>,
}

/// Finding-aid metadata rendered into the EAD header.
///
/// `series_statement`, `language`, `revision_date` and `revision_description`
/// may contain inline markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct FindingAid {
    pub ead_id: Option<String>,
    pub ead_location: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    pub sponsor: Option<String>,
    pub edition_statement: Option<String>,
    pub series_statement: Option<String>,
    pub language: Option<String>,
    pub description_rules: Option<String>,
    pub revision_date: Option<String>,
    pub revision_description: Option<String>,
}

/// A component of the hierarchy below the resource.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ArchivalObject {
    pub ref_id: String,
    pub title: Option<String>,
    pub component_id: Option<String>,
    pub level: Option<String>,
    pub other_level: Option<String>,
    pub extents: Vec<Extent>,
    pub dates: Vec<Date>,
    pub notes: Vec<Note>,
    pub bibliographies: Vec<Bibliography>,
    pub indexes: Vec<IndexNote>,
    pub instances: Vec<Instance>,
    pub linked_agents: Vec<AgentLink>,
    pub subjects: Vec<Subject>,
    pub children: Vec<ArchivalObject>,
}

impl ArchivalObject {
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_child(mut self, child: ArchivalObject) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(&self, index: usize) -> Option<&ArchivalObject> {
        self.children.get(index)
    }

    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

fn join_identifier(parts: &[String]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
