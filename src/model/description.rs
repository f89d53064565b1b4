//! Dates and extents.

/// A date or date range attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Date {
    /// Free-text form, e.g. `circa 1900-1920`.
    pub expression: Option<String>,
    pub begin: Option<String>,
    pub end: Option<String>,
    /// `inclusive`, `bulk` or `single`.
    pub date_type: Option<String>,
    pub certainty: Option<String>,
    pub era: Option<String>,
    pub calendar: Option<String>,
}

impl Date {
    /// ISO 8601 interval (`begin/end`), when a begin date is known.
    pub fn normal(&self) -> Option<String> {
        let begin = non_empty(&self.begin)?;
        let end = non_empty(&self.end).unwrap_or(begin);
        Some(format!("{begin}/{end}"))
    }

    /// Display text: the expression, else `begin-end`, else `begin`.
    pub fn display(&self) -> Option<String> {
        if let Some(expression) = non_empty(&self.expression) {
            return Some(expression.to_string());
        }
        let begin = non_empty(&self.begin)?;
        match non_empty(&self.end) {
            Some(end) if end != begin => Some(format!("{begin}-{end}")),
            _ => Some(begin.to_string()),
        }
    }
}

/// A physical or logical extent statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Extent {
    /// `whole` or `part`.
    pub portion: Option<String>,
    pub number: Option<String>,
    pub extent_type: Option<String>,
    pub container_summary: Option<String>,
    pub physical_details: Option<String>,
    pub dimensions: Option<String>,
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
