//! Human-readable labels for enumerated record values.
//!
//! Records carry coded values (`eng`, `mixed_materials`, `scopecontent`).
//! Some of them appear in the output as prose: a language name, a container
//! label, a note heading. [`Labels`] maps `enumeration -> value -> label` and
//! falls back to the coded value itself when no label is known.

use std::collections::HashMap;

/// ISO 639-2 language codes.
pub const LANGUAGE: &str = "language_iso639_2";
/// Instance types, used as the first container's label.
pub const INSTANCE_TYPE: &str = "instance_instance_type";
/// Extent types, used in `extent` text.
pub const EXTENT_TYPE: &str = "extent_extent_type";
/// Note types, used as note headings.
pub const NOTE_TYPE: &str = "_note_types";

const DEFAULT_NOTE_LABELS: &[(&str, &str)] = &[
    ("abstract", "Abstract"),
    ("accessrestrict", "Conditions Governing Access"),
    ("accruals", "Accruals"),
    ("acqinfo", "Immediate Source of Acquisition"),
    ("altformavail", "Existence and Location of Copies"),
    ("appraisal", "Appraisal"),
    ("arrangement", "Arrangement"),
    ("bibliography", "Bibliography"),
    ("bioghist", "Biographical / Historical"),
    ("custodhist", "Custodial History"),
    ("dimensions", "Dimensions"),
    ("fileplan", "File Plan"),
    ("index", "Index"),
    ("langmaterial", "Language of Materials"),
    ("legalstatus", "Legal Status"),
    ("materialspec", "Materials Specific Details"),
    ("odd", "General"),
    ("originalsloc", "Existence and Location of Originals"),
    ("otherfindaid", "Other Finding Aids"),
    ("physdesc", "Physical Description"),
    ("physfacet", "Physical Facet"),
    ("physloc", "Physical Location"),
    ("phystech", "Physical Characteristics and Technical Requirements"),
    ("prefercite", "Preferred Citation"),
    ("processinfo", "Processing Information"),
    ("relatedmaterial", "Related Materials"),
    ("scopecontent", "Scope and Contents"),
    ("separatedmaterial", "Separated Materials"),
    ("userestrict", "Conditions Governing Use"),
];

/// Enumeration label lookup with value fallback.
///
/// # Example
///
/// ```
/// use findaid::Labels;
/// use findaid::labels::LANGUAGE;
///
/// let labels = Labels::new().with(LANGUAGE, "eng", "English");
/// assert_eq!(labels.lookup(LANGUAGE, "eng"), "English");
/// assert_eq!(labels.lookup(LANGUAGE, "fre"), "fre");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Labels {
    enumerations: HashMap<String, HashMap<String, String>>,
}

impl Labels {
    /// An empty table: every lookup falls back to the coded value.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with English note-type headings.
    pub fn with_defaults() -> Self {
        let mut labels = Self::new();
        for (value, label) in DEFAULT_NOTE_LABELS {
            labels.insert(NOTE_TYPE, *value, *label);
        }
        labels
    }

    pub fn insert(
        &mut self,
        enumeration: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.enumerations
            .entry(enumeration.into())
            .or_default()
            .insert(value.into(), label.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        enumeration: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.insert(enumeration, value, label);
        self
    }

    /// Overlay `other` on top of this table; its labels win.
    pub fn merge(&mut self, other: Labels) {
        for (enumeration, values) in other.enumerations {
            self.enumerations
                .entry(enumeration)
                .or_default()
                .extend(values);
        }
    }

    pub fn get(&self, enumeration: &str, value: &str) -> Option<&str> {
        self.enumerations
            .get(enumeration)
            .and_then(|values| values.get(value))
            .map(String::as_str)
    }

    /// The label for `value`, or `value` itself when none is known.
    pub fn lookup<'v>(&'v self, enumeration: &str, value: &'v str) -> &'v str {
        self.get(enumeration, value).unwrap_or(value)
    }

    /// Heading for a note of type `note_type`.
    pub fn note_type<'v>(&'v self, note_type: &'v str) -> &'v str {
        self.lookup(NOTE_TYPE, note_type)
    }
}
