//! Notes, bibliographies and indexes.

/// A descriptive note.
///
/// Content paragraphs may contain inline markup and are never escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Note {
    /// Note type, which is also the output element name (`scopecontent`).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub note_type: Option<String>,
    pub label: Option<String>,
    pub persistent_id: Option<String>,
    /// Internal notes are staff-only and not exported.
    pub internal: bool,
    pub content: Vec<String>,
    pub subnotes: Vec<Subnote>,
}

impl Note {
    pub fn new(note_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            note_type: Some(note_type.into()),
            content: vec![content.into()],
            ..Default::default()
        }
    }

    /// The note's text: content paragraphs, then text subnotes, one per line.
    pub fn text(&self) -> String {
        let subnote_text = self.subnotes.iter().filter_map(|subnote| match subnote {
            Subnote::Text { content } => Some(content.as_str()),
            _ => None,
        });
        self.content
            .iter()
            .map(String::as_str)
            .chain(subnote_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Structured content inside a multipart note.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Subnote {
    Text {
        content: String,
    },
    Chronology {
        title: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        items: Vec<ChronologyItem>,
    },
    OrderedList {
        title: Option<String>,
        /// `arabic`, `loweralpha`, `upperroman`, ...
        enumeration: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        items: Vec<String>,
    },
    DefinedList {
        title: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        items: Vec<DefinedListItem>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ChronologyItem {
    pub event_date: Option<String>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct DefinedListItem {
    pub label: Option<String>,
    pub value: Option<String>,
}

/// A bibliography note with citation items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Bibliography {
    pub label: Option<String>,
    pub persistent_id: Option<String>,
    pub content: Vec<String>,
    pub items: Vec<String>,
}

impl Bibliography {
    pub fn text(&self) -> String {
        self.content.join("\n")
    }
}

/// An index note with typed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct IndexNote {
    pub label: Option<String>,
    pub persistent_id: Option<String>,
    pub content: Vec<String>,
    pub items: Vec<IndexItem>,
}

impl IndexNote {
    pub fn text(&self) -> String {
        self.content.join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct IndexItem {
    /// Entry type (`person`, `subject`, `geographic_name`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub item_type: String,
    pub value: Option<String>,
    pub reference: Option<String>,
    pub reference_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_text_joins_content_and_text_subnotes() {
        let note = Note {
            content: vec!["First.".into(), "Second.".into()],
            subnotes: vec![
                Subnote::Text {
                    content: "Third.".into(),
                },
                Subnote::OrderedList {
                    title: None,
                    enumeration: None,
                    items: vec!["skipped".into()],
                },
            ],
            ..Note::new("scopecontent", "")
        };
        assert_eq!(note.text(), "First.\nSecond.\nThird.");
    }
}
