//! Agent links and subjects.

use super::description::non_empty;

/// A link from a record to an agent (person, family, organization).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AgentLink {
    /// `creator`, `source` or `subject`.
    pub role: String,
    /// MARC relator code, e.g. `aut`.
    pub relator: Option<String>,
    /// Subdivision terms when the agent is used as a subject.
    pub terms: Vec<Term>,
    pub agent: Agent,
}

impl AgentLink {
    pub fn new(role: impl Into<String>, agent: Agent) -> Self {
        Self {
            role: role.into(),
            agent,
            ..Default::default()
        }
    }

    /// Creators and sources are rendered as `origination`.
    pub fn is_origination(&self) -> bool {
        matches!(self.role.as_str(), "creator" | "source")
    }

    pub fn is_subject(&self) -> bool {
        self.role == "subject"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Agent {
    /// `agent_person`, `agent_family`, `agent_corporate_entity` or
    /// `agent_software`.
    pub agent_type: String,
    pub names: Vec<AgentName>,
}

impl Agent {
    pub fn person(sort_name: impl Into<String>) -> Self {
        Self {
            agent_type: "agent_person".into(),
            names: vec![AgentName {
                sort_name: sort_name.into(),
                ..Default::default()
            }],
        }
    }

    /// EAD element for this kind of agent.
    pub fn element_name(&self) -> Option<&'static str> {
        match self.agent_type.as_str() {
            "agent_person" => Some("persname"),
            "agent_family" => Some("famname"),
            "agent_corporate_entity" => Some("corpname"),
            "agent_software" => Some("name"),
            _ => None,
        }
    }

    /// The authorized (first) name.
    pub fn primary_name(&self) -> Option<&AgentName> {
        self.names.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AgentName {
    pub sort_name: String,
    pub rules: Option<String>,
    pub source: Option<String>,
}

/// A controlled subject heading made of one or more terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Subject {
    /// Vocabulary source, e.g. `lcsh`.
    pub source: Option<String>,
    pub terms: Vec<Term>,
}

impl Subject {
    /// EAD element chosen by the first term's type.
    pub fn element_name(&self) -> Option<&'static str> {
        let term = self.terms.first()?;
        match term.term_type.as_str() {
            "topical" | "cultural_context" | "style_period" | "technique" | "temporal" => {
                Some("subject")
            }
            "function" => Some("function"),
            "genre_form" => Some("genreform"),
            "geographic" => Some("geogname"),
            "occupation" => Some("occupation"),
            "uniform_title" => Some("title"),
            _ => None,
        }
    }

    /// Terms joined with ` -- `.
    pub fn heading(&self) -> String {
        join_terms(&self.terms)
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Term {
    pub term: String,
    pub term_type: String,
}

impl Term {
    pub fn new(term: impl Into<String>, term_type: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            term_type: term_type.into(),
        }
    }
}

pub(crate) fn join_terms(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| t.term.as_str())
        .collect::<Vec<_>>()
        .join(" -- ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_element_follows_first_term() {
        let subject = Subject {
            source: Some("lcsh".into()),
            terms: vec![
                Term::new("Ohio", "geographic"),
                Term::new("History", "topical"),
            ],
        };
        assert_eq!(subject.element_name(), Some("geogname"));
        assert_eq!(subject.heading(), "Ohio -- History");
    }

    #[test]
    fn test_unknown_agent_type_has_no_element() {
        let agent = Agent {
            agent_type: "agent_robot".into(),
            names: vec![],
        };
        assert_eq!(agent.element_name(), None);
        assert_eq!(Agent::person("Doe, Jane").element_name(), Some("persname"));
    }
}
