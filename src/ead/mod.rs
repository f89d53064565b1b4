//! EAD 2002 serialization of a resource tree.
//!
//! The document is streamed: the header and every component are rendered as
//! deferred sections, so only the nodes on the current path are ever held
//! in memory, however large the tree.
//!
//! # Example
//!
//! ```
//! use findaid::model::{ArchivalObject, Resource};
//! use findaid::{EadConfig, EadExporter};
//!
//! let resource = Resource {
//!     title: Some("Family Papers".into()),
//!     identifier: vec!["MS".into(), "1".into()],
//!     children: vec![ArchivalObject::new("a1").with_title("Correspondence")],
//!     ..Default::default()
//! };
//!
//! let exporter = EadExporter::new().with_config(EadConfig {
//!     creation_date: Some("2024-01-01".into()),
//!     ..Default::default()
//! });
//!
//! let mut xml = String::new();
//! for chunk in exporter.stream(&resource) {
//!     xml.push_str(&chunk?);
//! }
//! assert!(xml.contains(r#"<c id="aspace_a1"><did><unittitle>Correspondence</unittitle>"#));
//! # Ok::<(), findaid::Error>(())
//! ```

mod access;
mod config;
mod description;
mod header;
mod instances;
mod notes;

use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::model::Resource;
use crate::stream::{ChunkStream, StreamStats};

pub use config::EadConfig;

/// EAD namespace.
pub const EAD_NAMESPACE: &str = "urn:isbn:1-931666-22-9";
/// XLink namespace, used by `dao` and `extref` link attributes.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
/// XML Schema instance namespace.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// `xsi:schemaLocation` of the EAD schema.
pub const EAD_SCHEMA_LOCATION: &str = "urn:isbn:1-931666-22-9 http://www.loc.gov/ead/ead.xsd";

/// Stream `resource` as EAD with the default configuration.
pub fn stream(resource: &Resource) -> ChunkStream<'_> {
    EadExporter::new().stream(resource)
}

/// EAD exporter.
///
/// Holds the export configuration; every call to [`stream`](Self::stream)
/// starts an independent, single-use export.
#[derive(Debug, Clone, Default)]
pub struct EadExporter {
    config: EadConfig,
}

impl EadExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: EadConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: EadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EadConfig {
        &self.config
    }

    /// Lazily render `resource` as a sequence of EAD text chunks.
    ///
    /// No rendering happens until the first chunk is pulled.
    pub fn stream<'a>(&self, resource: &'a Resource) -> ChunkStream<'a> {
        let config = Rc::new(self.config.clone());
        debug!(children = resource.children.len(), "starting EAD export");
        ChunkStream::new(move |cx| description::resource(cx, &config, resource))
    }

    /// Stream `resource` into `writer`, chunk by chunk.
    pub fn export<W: Write>(&self, resource: &Resource, writer: &mut W) -> Result<StreamStats> {
        self.stream(resource).write_to(writer)
    }

    /// Render `resource` into a single string.
    pub fn render(&self, resource: &Resource) -> Result<String> {
        self.stream(resource).collect()
    }
}
