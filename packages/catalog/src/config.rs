//! # Portfolio catalog: `portfolio.toml`
//!
//! The catalog bundles the project list shown in the "other projects" modal
//! together with the modal's copy (filename: [`PortfolioConfig::filename`] =
//! `"portfolio.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [modal]
//! title = "Other Projects"     # header text
//! link_label = "View Project"  # label of each card's outbound link
//! description_lines = 3        # line clamp applied to descriptions
//!
//! [[projects]]
//! id = "1"
//! title = "Alpha"
//! role = "Design"
//! date = "2021"
//! description = "..."
//! image = "a.png"
//! link = "https://a.example"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortfolioConfig`] | Top-level catalog. TOML (de)serialisation and the canonical filename. |
//! | [`ModalConfig`] | Modal copy and the description line clamp. |
//!
//! A missing section is equivalent to its default, so an empty file yields
//! the stock copy and an empty project list.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::ProjectSummary;

/// Top-level catalog stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub modal: ModalConfig,
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

/// Text and layout knobs for the project modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModalConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_link_label")]
    pub link_label: String,
    /// Maximum visible description lines. 0 is treated as 1.
    #[serde(default = "default_description_lines")]
    pub description_lines: u8,
}

fn default_title() -> String {
    "Other Projects".to_string()
}

fn default_link_label() -> String {
    "View Project".to_string()
}

fn default_description_lines() -> u8 {
    3
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            link_label: default_link_label(),
            description_lines: default_description_lines(),
        }
    }
}

impl ModalConfig {
    /// Line clamp actually applied; never below one line.
    pub fn clamp_lines(&self) -> u8 {
        self.description_lines.max(1)
    }
}

impl PortfolioConfig {
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self {
            modal: ModalConfig::default(),
            projects,
        }
    }

    /// The well-known filename for the catalog.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
