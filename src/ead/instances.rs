//! Containers and digital objects.

use super::EadConfig;
use crate::error::Result;
use crate::labels::INSTANCE_TYPE;
use crate::model::{Container, DigitalObject, Instance, non_empty};
use crate::stream::{Attributes, RenderContext};

const DEFAULT_ACTUATE: &str = "onRequest";
const DEFAULT_SHOW: &str = "new";

/// One `container` per populated level. Only the top level carries the
/// instance type as its label.
pub(super) fn container(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    instance: &Instance,
    container: &Container,
) -> Result<()> {
    for (level, kind, indicator) in container.levels() {
        let label = match (level, non_empty(&instance.instance_type)) {
            (1, Some(instance_type)) => Some(config.labels.lookup(INSTANCE_TYPE, instance_type)),
            _ => None,
        };
        let attrs = Attributes::new()
            .with("type", kind)
            .with_opt("label", label);
        cx.text_element("container", attrs, indicator)?;
    }
    Ok(())
}

pub(super) fn dao(cx: &mut RenderContext<'_, '_>, digital_object: &DigitalObject) -> Result<()> {
    let version = digital_object.file_versions.first();
    let actuate = version
        .and_then(|v| non_empty(&v.xlink_actuate_attribute))
        .unwrap_or(DEFAULT_ACTUATE);
    let show = version
        .and_then(|v| non_empty(&v.xlink_show_attribute))
        .unwrap_or(DEFAULT_SHOW);

    let attrs = Attributes::new()
        .with_opt("xlink:href", digital_object.href())
        .with_opt("xlink:title", non_empty(&digital_object.title))
        .with("xlink:actuate", actuate)
        .with("xlink:show", show);

    let description = digital_object.description();
    if description.is_empty() {
        return cx.empty_element("dao", attrs);
    }
    cx.element("dao", attrs, |cx| {
        cx.element("daodesc", Attributes::new(), |cx| {
            cx.text_element("p", Attributes::new(), &description)
        })
    })
}
