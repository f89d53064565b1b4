//! Instances: physical containers and digital objects.

use super::Date;
use super::description::non_empty;

/// An instance of the described materials.
///
/// Carries a container, a digital object, or (rarely) both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Instance {
    /// e.g. `mixed_materials`, `text`, `digital_object`.
    pub instance_type: Option<String>,
    pub container: Option<Container>,
    pub digital_object: Option<DigitalObject>,
}

/// Up to three nested container levels (box, folder, item).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Container {
    pub type_1: Option<String>,
    pub indicator_1: Option<String>,
    pub type_2: Option<String>,
    pub indicator_2: Option<String>,
    pub type_3: Option<String>,
    pub indicator_3: Option<String>,
}

impl Container {
    /// `(level, type, indicator)` for every level where both are present.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        [
            (&self.type_1, &self.indicator_1),
            (&self.type_2, &self.indicator_2),
            (&self.type_3, &self.indicator_3),
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(index, (kind, indicator))| {
            Some((index + 1, non_empty(kind)?, non_empty(indicator)?))
        })
    }
}

/// A digital object linked from the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct DigitalObject {
    pub digital_object_id: Option<String>,
    pub title: Option<String>,
    pub dates: Vec<Date>,
    pub file_versions: Vec<FileVersion>,
}

impl DigitalObject {
    /// Link target: the first file version's URI, else the object id.
    pub fn href(&self) -> Option<&str> {
        self.file_versions
            .first()
            .and_then(|version| non_empty(&version.file_uri))
            .or_else(|| non_empty(&self.digital_object_id))
    }

    /// `"{title}: {date}"`, with whichever parts are present.
    pub fn description(&self) -> String {
        let mut text = self.title.clone().unwrap_or_default();
        if let Some(date) = self.dates.first().and_then(Date::display) {
            text.push_str(": ");
            text.push_str(&date);
        }
        text
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct FileVersion {
    pub file_uri: Option<String>,
    pub xlink_actuate_attribute: Option<String>,
    pub xlink_show_attribute: Option<String>,
}
