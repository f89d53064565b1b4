//! # findaid
//!
//! Streaming EAD 2002 export of archival finding aids.
//!
//! A finding aid is a [`Resource`] with a tree of nested [`ArchivalObject`]
//! components, often tens of thousands deep and wide. The exporter renders it
//! as a lazy sequence of text chunks: each component is rendered only when
//! the output reaches it, so memory stays proportional to the depth of the
//! tree rather than its size.
//!
//! ## Quick Start
//!
//! ```
//! use findaid::{ArchivalObject, EadConfig, EadExporter, Resource};
//!
//! let resource = Resource {
//!     title: Some("Papers of Jane Doe".into()),
//!     identifier: vec!["MS".into(), "42".into()],
//!     children: vec![
//!         ArchivalObject::new("s1")
//!             .with_title("Correspondence")
//!             .with_child(ArchivalObject::new("f1").with_title("Letters, 1901")),
//!     ],
//!     ..Default::default()
//! };
//!
//! let exporter = EadExporter::new().with_config(EadConfig {
//!     xml_declaration: false,
//!     ..Default::default()
//! });
//!
//! let mut out = Vec::new();
//! let stats = exporter.export(&resource, &mut out)?;
//! let xml = String::from_utf8(out).unwrap();
//!
//! assert!(xml.starts_with("<ead "));
//! assert!(xml.contains("<unittitle>Letters, 1901</unittitle>"));
//! assert!(stats.chunks > 1);
//! # Ok::<(), findaid::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`model`]: the read-only record tree.
//! - [`stream`]: the generic engine. A nested markup builder with
//!   placeholder tokens for raw fragments and deferred sections, and the
//!   [`ChunkStream`] iterator that expands them depth-first.
//! - [`ead`]: the EAD vocabulary, written against the engine.

pub mod ead;
pub mod error;
pub mod labels;
pub mod model;
pub mod stream;

pub use ead::{EadConfig, EadExporter};
pub use error::{Error, Result};
pub use labels::Labels;
pub use model::{ArchivalObject, Resource};
pub use stream::{ChunkStream, StreamStats};
