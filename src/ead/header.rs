//! `eadheader`: identification, bibliographic description and revisions of
//! the finding aid itself.

use super::EadConfig;
use crate::error::Result;
use crate::model::{FindingAid, Repository, Resource, non_empty};
use crate::stream::{Attributes, RenderContext};

pub(super) fn eadheader(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    resource: &Resource,
) -> Result<()> {
    let finding_aid = &resource.finding_aid;
    let repository = &resource.repository;

    let attrs = Attributes::new()
        .with_opt("findaidstatus", non_empty(&finding_aid.status))
        .with("repositoryencoding", "iso15511")
        .with("countryencoding", "iso3166-1")
        .with("dateencoding", "iso8601")
        .with("langencoding", "iso639-2b");

    cx.element("eadheader", attrs, |cx| {
        let attrs = Attributes::new()
            .with_opt("countrycode", non_empty(&repository.country))
            .with_opt("url", non_empty(&finding_aid.ead_location))
            .with_opt("mainagencycode", non_empty(&repository.org_code));
        cx.text_element(
            "eadid",
            attrs,
            non_empty(&finding_aid.ead_id).unwrap_or_default(),
        )?;

        cx.element("filedesc", Attributes::new(), |cx| {
            filedesc(cx, resource, finding_aid, repository)
        })?;
        cx.element("profiledesc", Attributes::new(), |cx| {
            profiledesc(cx, config, finding_aid)
        })?;
        revisiondesc(cx, finding_aid)
    })
}

fn filedesc(
    cx: &mut RenderContext<'_, '_>,
    resource: &Resource,
    finding_aid: &FindingAid,
    repository: &Repository,
) -> Result<()> {
    cx.element("titlestmt", Attributes::new(), |cx| {
        let mut title = non_empty(&resource.title).unwrap_or_default().to_string();
        let unitid = resource.unitid();
        if !unitid.is_empty() {
            title.push_str(&format!(" <num>{unitid}</num>"));
        }
        cx.fragment_element("titleproper", Attributes::new(), title.trim_start())?;

        if let Some(author) = non_empty(&finding_aid.author) {
            cx.text_element("author", Attributes::new(), author)?;
        }
        if let Some(sponsor) = non_empty(&finding_aid.sponsor) {
            cx.text_element("sponsor", Attributes::new(), sponsor)?;
        }
        Ok(())
    })?;

    if let Some(edition) = non_empty(&finding_aid.edition_statement) {
        cx.element("editionstmt", Attributes::new(), |cx| {
            cx.text_element("p", Attributes::new(), edition)
        })?;
    }

    cx.element("publicationstmt", Attributes::new(), |cx| {
        if let Some(name) = non_empty(&repository.name) {
            cx.text_element("publisher", Attributes::new(), name)?;
        }
        if let Some(image_url) = non_empty(&repository.image_url) {
            cx.element("p", Attributes::new(), |cx| {
                let attrs = Attributes::new()
                    .with("xlink:href", image_url)
                    .with("xlink:actuate", "onLoad")
                    .with("xlink:show", "embed")
                    .with("xlink:linktype", "simple");
                cx.empty_element("extref", attrs)
            })?;
        }
        let lines: Vec<&str> = repository
            .address_lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect();
        if !lines.is_empty() {
            cx.element("address", Attributes::new(), |cx| {
                lines
                    .iter()
                    .try_for_each(|line| cx.text_element("addressline", Attributes::new(), line))
            })?;
        }
        Ok(())
    })?;

    if let Some(series) = non_empty(&finding_aid.series_statement) {
        cx.element("seriesstmt", Attributes::new(), |cx| {
            if series.trim_start().starts_with('<') {
                cx.fragment(series)
            } else {
                cx.fragment_element("p", Attributes::new(), series)
            }
        })?;
    }
    Ok(())
}

fn profiledesc(
    cx: &mut RenderContext<'_, '_>,
    config: &EadConfig,
    finding_aid: &FindingAid,
) -> Result<()> {
    let creation = format!(
        "This finding aid was produced using {} on <date>{}</date>.",
        config.producer,
        config.creation_timestamp(),
    );
    cx.fragment_element("creation", Attributes::new(), creation)?;

    if let Some(language) = non_empty(&finding_aid.language) {
        cx.fragment_element("langusage", Attributes::new(), language)?;
    }
    if let Some(rules) = non_empty(&finding_aid.description_rules) {
        cx.text_element("descrules", Attributes::new(), rules)?;
    }
    Ok(())
}

fn revisiondesc(cx: &mut RenderContext<'_, '_>, finding_aid: &FindingAid) -> Result<()> {
    let date = non_empty(&finding_aid.revision_date);
    let description = non_empty(&finding_aid.revision_description);
    if date.is_none() && description.is_none() {
        return Ok(());
    }

    cx.element("revisiondesc", Attributes::new(), |cx| match description {
        Some(raw) if raw.trim_start().starts_with('<') => cx.fragment(raw),
        _ => cx.element("change", Attributes::new(), |cx| {
            if let Some(date) = date {
                cx.fragment_element("date", Attributes::new(), date)?;
            }
            if let Some(item) = description {
                cx.fragment_element("item", Attributes::new(), item)?;
            }
            Ok(())
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SectionScheduler;

    fn render_header(resource: &Resource) -> String {
        let config = EadConfig {
            creation_date: Some("2024-05-01T00:00:00Z".into()),
            ..Default::default()
        };
        let mut sections = SectionScheduler::new();
        let mut cx = RenderContext::new(&mut sections);
        eadheader(&mut cx, &config, resource).unwrap();
        let (text, fragments) = cx.finish().unwrap();
        fragments.substitute(&text)
    }

    #[test]
    fn test_titleproper_carries_unitid() {
        let resource = Resource {
            title: Some("Smith & Sons Records".into()),
            identifier: vec!["MS".into(), "12".into()],
            ..Default::default()
        };
        let out = render_header(&resource);
        assert!(
            out.contains("<titleproper>Smith &amp; Sons Records <num>MS.12</num></titleproper>")
        );
    }

    #[test]
    fn test_plain_text_header_fields_are_escaped() {
        let mut resource = Resource::default();
        resource.finding_aid.author = Some("A < B".into());
        resource.finding_aid.sponsor = Some("Friends <of> the Library".into());
        resource.finding_aid.edition_statement = Some("2nd < 3rd".into());
        resource.finding_aid.description_rules = Some("DACS <2013>".into());
        resource.repository.name = Some("Smith & <Co>".into());
        resource.repository.address_lines = vec!["Room <4>".into(), String::new()];

        let out = render_header(&resource);
        assert!(out.contains("<author>A &lt; B</author>"));
        assert!(out.contains("<sponsor>Friends &lt;of&gt; the Library</sponsor>"));
        assert!(out.contains("<editionstmt><p>2nd &lt; 3rd</p></editionstmt>"));
        assert!(out.contains("<publisher>Smith &amp; &lt;Co&gt;</publisher>"));
        assert!(out.contains("<address><addressline>Room &lt;4&gt;</addressline></address>"));
        assert!(out.contains("<descrules>DACS &lt;2013&gt;</descrules>"));
    }

    #[test]
    fn test_creation_statement() {
        let out = render_header(&Resource::default());
        assert!(out.contains(
            "<creation>This finding aid was produced using findaid on <date>2024-05-01T00:00:00Z</date>.</creation>"
        ));
        assert!(!out.contains("revisiondesc"));
    }

    #[test]
    fn test_extref_for_repository_image() {
        let resource = Resource {
            repository: Repository {
                name: Some("Special Collections".into()),
                image_url: Some("https://example.org/logo.png".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = render_header(&resource);
        assert!(out.contains(concat!(
            "<publicationstmt><publisher>Special Collections</publisher><p>",
            r#"<extref xlink:href="https://example.org/logo.png" xlink:actuate="onLoad" xlink:show="embed" xlink:linktype="simple"/>"#,
            "</p></publicationstmt>"
        )));
    }

    #[test]
    fn test_revision_change() {
        let mut resource = Resource::default();
        resource.finding_aid.revision_date = Some("2020".into());
        resource.finding_aid.revision_description = Some("Updated".into());
        assert!(
            render_header(&resource)
                .contains("<revisiondesc><change><date>2020</date><item>Updated</item></change></revisiondesc>")
        );

        resource.finding_aid.revision_description =
            Some("<change><item>Raw</item></change>".into());
        assert!(
            render_header(&resource)
                .contains("<revisiondesc><change><item>Raw</item></change></revisiondesc>")
        );
    }

    #[test]
    fn test_header_attributes() {
        let mut resource = Resource::default();
        resource.finding_aid.status = Some("completed".into());
        resource.finding_aid.ead_id = Some("us-xx-001".into());
        resource.repository.country = Some("US".into());

        let out = render_header(&resource);
        assert!(out.starts_with(concat!(
            r#"<eadheader findaidstatus="completed" repositoryencoding="iso15511" "#,
            r#"countryencoding="iso3166-1" dateencoding="iso8601" langencoding="iso639-2b">"#,
            r#"<eadid countrycode="US">us-xx-001</eadid>"#
        )));
    }
}
