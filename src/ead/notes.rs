//! Notes, bibliographies and indexes.

use super::EadConfig;
use crate::error::Result;
use crate::model::{Bibliography, IndexItem, IndexNote, Note, Subnote, non_empty};
use crate::stream::{Attributes, RenderContext};

/// Note types rendered inside `did`.
const DID_NOTE_TYPES: &[&str] = &[
    "abstract",
    "dimensions",
    "physdesc",
    "langmaterial",
    "physloc",
    "materialspec",
    "physfacet",
];

/// Note types rendered as siblings of `did`.
const NONDID_NOTE_TYPES: &[&str] = &[
    "accruals",
    "appraisal",
    "arrangement",
    "bioghist",
    "accessrestrict",
    "userestrict",
    "custodhist",
    "altformavail",
    "originalsloc",
    "fileplan",
    "odd",
    "acqinfo",
    "otherfindaid",
    "phystech",
    "prefercite",
    "processinfo",
    "relatedmaterial",
    "scopecontent",
    "separatedmaterial",
    "legalstatus",
];

/// Did note types that EAD only allows inside `physdesc`.
const PHYSDESC_NOTE_TYPES: &[&str] = &["dimensions", "physfacet"];

fn note_type_in<'n>(note: &'n Note, types: &[&str]) -> Option<&'n str> {
    non_empty(&note.note_type).filter(|note_type| types.contains(note_type))
}

pub(super) fn did_notes(cx: &mut RenderContext<'_, '_>, notes: &[Note]) -> Result<()> {
    for note in notes {
        let Some(note_type) = note_type_in(note, DID_NOTE_TYPES) else {
            continue;
        };
        let attrs = Attributes::new().with_opt("id", non_empty(&note.persistent_id));
        let text = note.text();

        if PHYSDESC_NOTE_TYPES.contains(&note_type) {
            cx.element("physdesc", Attributes::new(), |cx| {
                cx.fragment_element(note_type, attrs, text)
            })?;
        } else {
            cx.fragment_element(note_type, attrs, text)?;
        }
    }
    Ok(())
}

pub(super) fn nondid_notes(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    notes: &[Note],
) -> Result<()> {
    for note in notes.iter().filter(|note| !note.internal) {
        let Some(note_type) = note_type_in(note, NONDID_NOTE_TYPES) else {
            continue;
        };
        if note_type == "legalstatus" {
            cx.element("accessrestrict", Attributes::new(), |cx| {
                nondid_note(cx, config, note, note_type)
            })?;
        } else {
            nondid_note(cx, config, note, note_type)?;
        }
    }
    Ok(())
}

fn nondid_note(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    note: &Note,
    note_type: &str,
) -> Result<()> {
    let attrs = Attributes::new().with_opt("id", non_empty(&note.persistent_id));
    let text = note.text();

    cx.element(note_type, attrs, |cx| {
        generated_head(cx, &text, &note.label, config.labels.note_type(note_type))?;
        body(cx, &text)?;
        note.subnotes.iter().try_for_each(|item| subnote(cx, item))
    })
}

/// `label`, or `fallback` without one, unless the content opens with its own
/// `head`.
fn generated_head(
    cx: &mut RenderContext<'_, '_>,
    text: &str,
    label: &Option<String>,
    fallback: &str,
) -> Result<()> {
    if text.trim_start().starts_with("<head") {
        return Ok(());
    }
    cx.text_element("head", Attributes::new(), non_empty(label).unwrap_or(fallback))
}

/// Raw content when it is already markup, otherwise a paragraph.
fn body(cx: &mut RenderContext<'_, '_>, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    if text.trim_start().starts_with('<') {
        cx.fragment(text)
    } else {
        cx.fragment_element("p", Attributes::new(), text)
    }
}

fn head(cx: &mut RenderContext<'_, '_>, title: &Option<String>) -> Result<()> {
    match non_empty(title) {
        Some(title) => cx.text_element("head", Attributes::new(), title),
        None => Ok(()),
    }
}

fn subnote(cx: &mut RenderContext<'_, '_>, subnote: &Subnote) -> Result<()> {
    match subnote {
        // Folded into the note's own text.
        Subnote::Text { .. } => Ok(()),
        Subnote::Chronology { title, items } => {
            cx.element("chronlist", Attributes::new(), |cx| {
                head(cx, title)?;
                for item in items {
                    cx.element("chronitem", Attributes::new(), |cx| {
                        if let Some(date) = non_empty(&item.event_date) {
                            cx.text_element("date", Attributes::new(), date)?;
                        }
                        if !item.events.is_empty() {
                            cx.element("eventgrp", Attributes::new(), |cx| {
                                item.events.iter().try_for_each(|event| {
                                    cx.text_element("event", Attributes::new(), event)
                                })
                            })?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })
        }
        Subnote::OrderedList {
            title,
            enumeration,
            items,
        } => {
            let attrs = Attributes::new()
                .with("type", "ordered")
                .with_opt("numeration", non_empty(enumeration));
            cx.element("list", attrs, |cx| {
                head(cx, title)?;
                items
                    .iter()
                    .try_for_each(|item| cx.text_element("item", Attributes::new(), item))
            })
        }
        Subnote::DefinedList { title, items } => {
            let attrs = Attributes::new().with("type", "deflist");
            cx.element("list", attrs, |cx| {
                head(cx, title)?;
                for item in items {
                    cx.element("defitem", Attributes::new(), |cx| {
                        if let Some(label) = non_empty(&item.label) {
                            cx.text_element("label", Attributes::new(), label)?;
                        }
                        if let Some(value) = non_empty(&item.value) {
                            cx.text_element("item", Attributes::new(), value)?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })
        }
    }
}

pub(super) fn bibliographies(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    bibliographies: &[Bibliography],
) -> Result<()> {
    for bibliography in bibliographies {
        let attrs = Attributes::new().with_opt("id", non_empty(&bibliography.persistent_id));
        let text = bibliography.text();
        cx.element("bibliography", attrs, |cx| {
            let fallback = config.labels.note_type("bibliography");
            generated_head(cx, &text, &bibliography.label, fallback)?;
            body(cx, &text)?;
            bibliography
                .items
                .iter()
                .filter(|item| !item.is_empty())
                .try_for_each(|item| cx.text_element("bibref", Attributes::new(), item))
        })?;
    }
    Ok(())
}

/// Index entry type to EAD element.
fn index_element(item_type: &str) -> Option<&'static str> {
    match item_type {
        "corporate_entity" => Some("corpname"),
        "genre_form" => Some("genreform"),
        "name" => Some("name"),
        "occupation" => Some("occupation"),
        "person" => Some("persname"),
        "subject" => Some("subject"),
        "family" => Some("famname"),
        "function" => Some("function"),
        "geographic_name" => Some("geogname"),
        "title" => Some("title"),
        _ => None,
    }
}

pub(super) fn indexes(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    indexes: &[IndexNote],
) -> Result<()> {
    for index in indexes {
        let attrs = Attributes::new().with_opt("id", non_empty(&index.persistent_id));
        let text = index.text();
        cx.element("index", attrs, |cx| {
            generated_head(cx, &text, &index.label, config.labels.note_type("index"))?;
            body(cx, &text)?;
            index.items.iter().try_for_each(|item| index_entry(cx, item))
        })?;
    }
    Ok(())
}

fn index_entry(cx: &mut RenderContext<'_, '_>, item: &IndexItem) -> Result<()> {
    let Some(element) = index_element(&item.item_type) else {
        return Ok(());
    };

    cx.element("indexentry", Attributes::new(), |cx| {
        if let Some(text) = non_empty(&item.reference_text) {
            let attrs = Attributes::new().with_opt("target", non_empty(&item.reference));
            cx.text_element("ref", attrs, text)?;
        }
        if let Some(value) = non_empty(&item.value) {
            cx.text_element(element, Attributes::new(), value)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChronologyItem, DefinedListItem};
    use crate::stream::SectionScheduler;

    fn render(build: impl FnOnce(&mut RenderContext<'_, '_>, &EadConfig) -> Result<()>) -> String {
        let config = EadConfig::default();
        let mut sections = SectionScheduler::new();
        let mut cx = RenderContext::new(&mut sections);
        build(&mut cx, &config).unwrap();
        let (text, fragments) = cx.finish().unwrap();
        fragments.substitute(&text)
    }

    #[test]
    fn test_note_gets_default_head() {
        let note = Note::new("scopecontent", "Letters & <emph>diaries</emph>.");
        let out = render(|cx, config| nondid_notes(cx, config, &[note]));
        assert_eq!(
            out,
            "<scopecontent><head>Scope and Contents</head><p>Letters &amp; <emph>diaries</emph>.</p></scopecontent>"
        );
    }

    #[test]
    fn test_inline_head_suppresses_generated_head() {
        let note = Note::new("bioghist", "  <head>Life</head><p>Born 1900.</p>");
        let out = render(|cx, config| nondid_notes(cx, config, &[note]));
        assert_eq!(out.matches("<head>").count(), 1);
        assert!(out.starts_with("<bioghist>  <head>Life</head>"));
    }

    #[test]
    fn test_internal_and_untyped_notes_are_skipped() {
        let mut internal = Note::new("odd", "staff only");
        internal.internal = true;
        let untyped = Note {
            content: vec!["no type".into()],
            ..Default::default()
        };
        let did_only = Note::new("abstract", "summary");

        let out = render(|cx, config| nondid_notes(cx, config, &[internal, untyped, did_only]));
        assert_eq!(out, "");
    }

    #[test]
    fn test_legalstatus_wrapped_in_accessrestrict() {
        let mut note = Note::new("legalstatus", "Public records");
        note.label = Some("Status".into());
        let out = render(|cx, config| nondid_notes(cx, config, &[note]));
        assert_eq!(
            out,
            "<accessrestrict><legalstatus><head>Status</head><p>Public records</p></legalstatus></accessrestrict>"
        );
    }

    #[test]
    fn test_did_notes_wrap_physical_facets() {
        let mut dimensions = Note::new("dimensions", "10 x 12 cm");
        dimensions.persistent_id = Some("n1".into());
        let abstract_note = Note::new("abstract", "Summary");

        let out = render(|cx, _| did_notes(cx, &[dimensions, abstract_note]));
        assert_eq!(
            out,
            r#"<physdesc><dimensions id="n1">10 x 12 cm</dimensions></physdesc><abstract>Summary</abstract>"#
        );
    }

    #[test]
    fn test_subnote_lists() {
        let note = Note {
            subnotes: vec![
                Subnote::Chronology {
                    title: None,
                    items: vec![ChronologyItem {
                        event_date: Some("1901".into()),
                        events: vec!["Founded".into()],
                    }],
                },
                Subnote::OrderedList {
                    title: Some("Steps".into()),
                    enumeration: Some("arabic".into()),
                    items: vec!["One".into()],
                },
                Subnote::DefinedList {
                    title: None,
                    items: vec![DefinedListItem {
                        label: Some("Term".into()),
                        value: Some("Meaning".into()),
                    }],
                },
            ],
            ..Note::new("odd", "")
        };

        let out = render(|cx, config| nondid_notes(cx, config, &[note]));
        assert_eq!(
            out,
            concat!(
                "<odd><head>General</head>",
                "<chronlist><chronitem><date>1901</date><eventgrp><event>Founded</event></eventgrp></chronitem></chronlist>",
                r#"<list type="ordered" numeration="arabic"><head>Steps</head><item>One</item></list>"#,
                r#"<list type="deflist"><defitem><label>Term</label><item>Meaning</item></defitem></list>"#,
                "</odd>"
            )
        );
    }

    #[test]
    fn test_bibliography_skips_empty_items() {
        let bibliography = Bibliography {
            content: vec!["Works cited.".into()],
            items: vec!["Smith 1990".into(), String::new()],
            ..Default::default()
        };
        let out = render(|cx, config| bibliographies(cx, config, &[bibliography]));
        assert_eq!(
            out,
            "<bibliography><head>Bibliography</head><p>Works cited.</p><bibref>Smith 1990</bibref></bibliography>"
        );
    }

    #[test]
    fn test_bibliography_inline_head_suppresses_generated_head() {
        let bibliography = Bibliography {
            content: vec!["<head>Works</head><p>x</p>".into()],
            items: vec!["Doe < 1900".into()],
            ..Default::default()
        };
        let out = render(|cx, config| bibliographies(cx, config, &[bibliography]));
        assert_eq!(
            out,
            "<bibliography><head>Works</head><p>x</p><bibref>Doe &lt; 1900</bibref></bibliography>"
        );
    }

    #[test]
    fn test_index_inline_head_suppresses_generated_head() {
        let index = IndexNote {
            content: vec!["<head>Names</head>".into()],
            ..Default::default()
        };
        let out = render(|cx, config| indexes(cx, config, &[index]));
        assert_eq!(out, "<index><head>Names</head></index>");
    }

    #[test]
    fn test_index_ref_follows_reference_text() {
        let items = vec![
            IndexItem {
                item_type: "subject".into(),
                value: Some("Maps".into()),
                reference_text: Some("Box 1".into()),
                ..Default::default()
            },
            IndexItem {
                item_type: "subject".into(),
                value: Some("Deeds".into()),
                reference: Some("r9".into()),
                ..Default::default()
            },
        ];
        let out = render(|cx, _| items.iter().try_for_each(|item| index_entry(cx, item)));
        assert_eq!(
            out,
            concat!(
                "<indexentry><ref>Box 1</ref><subject>Maps</subject></indexentry>",
                "<indexentry><subject>Deeds</subject></indexentry>"
            )
        );
    }

    #[test]
    fn test_subnote_text_is_escaped() {
        let note = Note {
            subnotes: vec![
                Subnote::Chronology {
                    title: Some("Dates <approx>".into()),
                    items: vec![ChronologyItem {
                        event_date: None,
                        events: vec!["Letters <1900".into()],
                    }],
                },
                Subnote::DefinedList {
                    title: None,
                    items: vec![DefinedListItem {
                        label: Some("A < B".into()),
                        value: Some("x > y".into()),
                    }],
                },
            ],
            ..Note::new("odd", "")
        };

        let out = render(|cx, config| nondid_notes(cx, config, &[note]));
        assert!(out.contains("<head>Dates &lt;approx&gt;</head>"));
        assert!(out.contains("<event>Letters &lt;1900</event>"));
        assert!(out.contains("<label>A &lt; B</label><item>x &gt; y</item>"));
    }

    #[test]
    fn test_index_entries() {
        let index = IndexNote {
            label: Some("Names".into()),
            content: vec!["<p>Names in the collection.</p>".into()],
            items: vec![
                IndexItem {
                    item_type: "person".into(),
                    value: Some("Doe, Jane".into()),
                    reference: Some("ref1".into()),
                    reference_text: Some("Box 1".into()),
                },
                IndexItem {
                    item_type: "unmapped".into(),
                    value: Some("ignored".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let out = render(|cx, config| indexes(cx, config, &[index]));
        assert_eq!(
            out,
            concat!(
                "<index><head>Names</head><p>Names in the collection.</p>",
                r#"<indexentry><ref target="ref1">Box 1</ref><persname>Doe, Jane</persname></indexentry>"#,
                "</index>"
            )
        );
    }
}
