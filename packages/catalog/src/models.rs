//! # Domain models for portfolio projects
//!
//! [`ProjectSummary`] is the record a caller hands to the project modal. The
//! modal only reads it; the caller owns the list and its ordering.
//!
//! Every display field defaults to an empty string so a sparse catalog entry
//! still deserializes and renders as empty regions instead of failing.
//!
//! ## Helper functions
//!
//! - [`duplicate_ids`]: ids that appear more than once in a list. Ids are
//!   used as display-list keys, so duplicates are a caller error; the UI only
//!   logs them.

use serde::{Deserialize, Serialize};

/// A project shown as one card in the "other projects" grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Stable identifier, unique within a list: "1"
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Role held on the project: "Design"
    #[serde(default)]
    pub role: String,
    /// Free-form date text: "2021"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    /// URI of the cover image
    #[serde(default)]
    pub image: String,
    /// External URI opened in a new browsing context
    #[serde(default)]
    pub link: String,
    /// Opaque styling hook for callers, not read by the modal
    #[serde(default)]
    pub theme: String,
    /// Opaque flag for callers, not read by the modal
    #[serde(
        default,
        rename = "isIframe",
        alias = "is_iframe",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_iframe: Option<bool>,
}

impl ProjectSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

/// Ids that occur more than once, each reported once, in the order their
/// first repeat is seen.
pub fn duplicate_ids(projects: &[ProjectSummary]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes: Vec<&str> = Vec::new();
    for project in projects {
        let id = project.id.as_str();
        if !seen.insert(id) && !dupes.contains(&id) {
            dupes.push(id);
        }
    }
    dupes
}
