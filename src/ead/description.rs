//! `archdesc`, components and the descriptive identification shared by both.

use std::rc::Rc;

use super::{
    EAD_NAMESPACE, EAD_SCHEMA_LOCATION, EadConfig, XLINK_NAMESPACE, XSI_NAMESPACE, access,
    header, instances, notes,
};
use crate::error::Result;
use crate::labels::{EXTENT_TYPE, LANGUAGE};
use crate::model::{ArchivalObject, Date, Extent, Resource, non_empty};
use crate::stream::{Attributes, RenderContext};

/// Render the document root: declaration, `ead`, header and `archdesc`.
pub(super) fn resource<'a>(
    cx: &mut RenderContext<'_, 'a>,
    config: &Rc<EadConfig>,
    resource: &'a Resource,
) -> Result<()> {
    if config.xml_declaration {
        cx.declaration()?;
    }

    let attrs = Attributes::new()
        .with("xmlns", EAD_NAMESPACE)
        .with("xmlns:xsi", XSI_NAMESPACE)
        .with("xsi:schemaLocation", EAD_SCHEMA_LOCATION)
        .with("xmlns:xlink", XLINK_NAMESPACE);

    cx.element("ead", attrs, |cx| {
        let header_config = Rc::clone(config);
        cx.defer(move |cx| header::eadheader(cx, &header_config, resource))?;

        let attrs = Attributes::new()
            .with_opt("level", non_empty(&resource.level))
            .with_opt("otherlevel", non_empty(&resource.other_level));
        cx.element("archdesc", attrs, |cx| {
            for digital_object in &resource.digital_objects {
                instances::dao(cx, digital_object)?;
            }
            cx.element("did", Attributes::new(), |cx| resource_did(cx, config, resource))?;

            notes::nondid_notes(cx, config, &resource.notes)?;
            notes::bibliographies(cx, config, &resource.bibliographies)?;
            notes::indexes(cx, config, &resource.indexes)?;
            access::controlaccess(cx, &resource.linked_agents, &resource.subjects)?;

            cx.element("dsc", Attributes::new(), |cx| {
                children(cx, config, &resource.children)
            })
        })
    })
}

fn resource_did<'a>(
    cx: &mut RenderContext<'_, 'a>,
    config: &EadConfig,
    resource: &'a Resource,
) -> Result<()> {
    if let Some(language) = non_empty(&resource.language) {
        cx.element("langmaterial", Attributes::new(), |cx| {
            cx.text_element(
                "language",
                Attributes::new().with("langcode", language),
                config.labels.lookup(LANGUAGE, language),
            )
        })?;
    }

    if let Some(name) = non_empty(&resource.repository.name) {
        cx.element("repository", Attributes::new(), |cx| {
            cx.text_element("corpname", Attributes::new(), name)
        })?;
    }

    if let Some(title) = non_empty(&resource.title) {
        cx.text_element("unittitle", Attributes::new(), title)?;
    }

    access::originations(cx, &resource.linked_agents)?;

    let unitid = resource.unitid();
    if !unitid.is_empty() {
        cx.text_element("unitid", Attributes::new(), &unitid)?;
    }

    extents(cx, config, &resource.extents)?;
    dates(cx, &resource.dates)?;
    notes::did_notes(cx, &resource.notes)?;

    for instance in &resource.instances {
        if let Some(container) = &instance.container {
            instances::container(cx, config, instance, container)?;
        }
    }
    Ok(())
}

/// Defer one section per child, in order.
fn children<'a>(
    cx: &mut RenderContext<'_, 'a>,
    config: &Rc<EadConfig>,
    children: &'a [ArchivalObject],
) -> Result<()> {
    for child in children {
        let config = Rc::clone(config);
        cx.defer(move |cx| component(cx, &config, child))?;
    }
    Ok(())
}

/// Render one `c` element. Its children become sections of their own.
pub(super) fn component<'a>(
    cx: &mut RenderContext<'_, 'a>,
    config: &Rc<EadConfig>,
    object: &'a ArchivalObject,
) -> Result<()> {
    let id = format!("{}{}", config.ref_id_prefix, object.ref_id);
    let attrs = Attributes::new()
        .with_opt("level", non_empty(&object.level))
        .with_opt("otherlevel", non_empty(&object.other_level))
        .with("id", id);

    cx.element("c", attrs, |cx| {
        cx.element("did", Attributes::new(), |cx| component_did(cx, config, object))?;

        notes::nondid_notes(cx, config, &object.notes)?;
        notes::bibliographies(cx, config, &object.bibliographies)?;
        notes::indexes(cx, config, &object.indexes)?;
        access::controlaccess(cx, &object.linked_agents, &object.subjects)?;

        children(cx, config, &object.children)
    })
}

fn component_did<'a>(
    cx: &mut RenderContext<'_, 'a>,
    config: &EadConfig,
    object: &'a ArchivalObject,
) -> Result<()> {
    if let Some(title) = non_empty(&object.title) {
        cx.text_element("unittitle", Attributes::new(), title)?;
    }
    if let Some(component_id) = non_empty(&object.component_id) {
        cx.text_element("unitid", Attributes::new(), component_id)?;
    }

    access::originations(cx, &object.linked_agents)?;
    extents(cx, config, &object.extents)?;
    dates(cx, &object.dates)?;
    notes::did_notes(cx, &object.notes)?;

    for instance in &object.instances {
        if let Some(container) = &instance.container {
            instances::container(cx, config, instance, container)?;
        } else if let Some(digital_object) = &instance.digital_object {
            instances::dao(cx, digital_object)?;
        }
    }
    Ok(())
}

fn extents(cx: &mut RenderContext<'_, '_>, config: &EadConfig, extents: &[Extent]) -> Result<()> {
    for extent in extents {
        let attrs = Attributes::new().with_opt("altrender", non_empty(&extent.portion));
        cx.element("physdesc", attrs, |cx| {
            if let (Some(number), Some(kind)) =
                (non_empty(&extent.number), non_empty(&extent.extent_type))
            {
                let text = format!("{number} {}", config.labels.lookup(EXTENT_TYPE, kind));
                let attrs = Attributes::new().with("altrender", "materialtype spaceoccupied");
                cx.text_element("extent", attrs, &text)?;
            }
            if let Some(summary) = non_empty(&extent.container_summary) {
                let attrs = Attributes::new().with("altrender", "carrier");
                cx.text_element("extent", attrs, summary)?;
            }
            if let Some(details) = non_empty(&extent.physical_details) {
                cx.text_element("physfacet", Attributes::new(), details)?;
            }
            if let Some(dimensions) = non_empty(&extent.dimensions) {
                cx.text_element("dimensions", Attributes::new(), dimensions)?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn dates(cx: &mut RenderContext<'_, '_>, dates: &[Date]) -> Result<()> {
    for date in dates {
        let Some(text) = date.display() else {
            continue;
        };
        let date_type = non_empty(&date.date_type).filter(|t| matches!(*t, "inclusive" | "bulk"));
        let attrs = Attributes::new()
            .with_opt("normal", date.normal())
            .with_opt("type", date_type)
            .with_opt("certainty", non_empty(&date.certainty))
            .with_opt("era", non_empty(&date.era))
            .with_opt("calendar", non_empty(&date.calendar));
        cx.text_element("unitdate", attrs, &text)?;
    }
    Ok(())
}
