//! Export configuration.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::labels::Labels;

/// Configuration for EAD export.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct EadConfig {
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub xml_declaration: bool,
    /// Prefix prepended to component ref ids to form the `c/@id` attribute.
    pub ref_id_prefix: String,
    /// System named in the `profiledesc/creation` statement.
    pub producer: String,
    /// Timestamp for the creation statement. Defaults to the current UTC time.
    pub creation_date: Option<String>,
    pub labels: Labels,
}

impl Default for EadConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            ref_id_prefix: "aspace_".to_string(),
            producer: env!("CARGO_PKG_NAME").to_string(),
            creation_date: None,
            labels: Labels::with_defaults(),
        }
    }
}

impl EadConfig {
    /// The configured creation date, or now as RFC 3339.
    pub(crate) fn creation_timestamp(&self) -> String {
        match &self.creation_date {
            Some(date) => date.clone(),
            None => OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EadConfig::default();
        assert!(config.xml_declaration);
        assert_eq!(config.ref_id_prefix, "aspace_");
        assert_eq!(config.producer, "findaid");
        assert_eq!(config.labels.note_type("odd"), "General");
    }

    #[test]
    fn test_fixed_creation_date() {
        let config = EadConfig {
            creation_date: Some("2024-01-01".into()),
            ..Default::default()
        };
        assert_eq!(config.creation_timestamp(), "2024-01-01");
    }

    #[test]
    fn test_current_creation_date_is_rfc3339() {
        let stamp = EadConfig::default().creation_timestamp();
        assert!(stamp.contains('T'));
        assert!(stamp.ends_with('Z'));
    }
}
