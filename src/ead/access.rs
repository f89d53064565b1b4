//! Origination and controlled access headings.

use crate::error::Result;
use crate::model::{AgentLink, AgentName, Subject, join_terms, non_empty};
use crate::stream::{Attributes, RenderContext};

/// `origination` for every creator or source agent.
pub(super) fn originations(cx: &mut RenderContext<'_, '_>, agents: &[AgentLink]) -> Result<()> {
    for link in agents.iter().filter(|link| link.is_origination()) {
        let Some(element) = link.agent.element_name() else {
            continue;
        };
        let Some(name) = link.agent.primary_name() else {
            continue;
        };

        let attrs = Attributes::new().with("label", &link.role);
        cx.element("origination", attrs, |cx| {
            let attrs = Attributes::new()
                .with_opt("relator", non_empty(&link.relator))
                .with_opt("source", non_empty(&name.source))
                .with_opt("rules", non_empty(&name.rules));
            cx.text_element(element, attrs, &name.sort_name)
        })?;
    }
    Ok(())
}

/// `controlaccess` with subjects and subject agents, omitted when there are
/// none.
pub(super) fn controlaccess(
    cx: &mut RenderContext<'_, '_>,
    agents: &[AgentLink],
    subjects: &[Subject],
) -> Result<()> {
    let subjects: Vec<(&'static str, &Subject)> = subjects
        .iter()
        .filter_map(|subject| Some((subject.element_name()?, subject)))
        .collect();
    let agents: Vec<(&'static str, &AgentLink, &AgentName)> = agents
        .iter()
        .filter(|link| link.is_subject())
        .filter_map(|link| {
            Some((link.agent.element_name()?, link, link.agent.primary_name()?))
        })
        .collect();

    if subjects.is_empty() && agents.is_empty() {
        return Ok(());
    }

    cx.element("controlaccess", Attributes::new(), |cx| {
        for (element, subject) in subjects {
            let attrs = Attributes::new().with_opt("source", subject.source());
            cx.text_element(element, attrs, &subject.heading())?;
        }

        for (element, link, name) in agents {
            let mut heading = name.sort_name.clone();
            if !link.terms.is_empty() {
                heading.push_str(" -- ");
                heading.push_str(&join_terms(&link.terms));
            }

            let attrs = Attributes::new()
                .with_opt("role", non_empty(&link.relator))
                .with_opt("source", non_empty(&name.source))
                .with_opt("rules", non_empty(&name.rules));
            cx.text_element(element, attrs, &heading)?;
        }
        Ok(())
    })
}
