//! Portfolio project data shared by the UI and the web front-end.

pub mod config;
pub mod error;
pub mod link;
pub mod models;

pub use config::{ModalConfig, PortfolioConfig};
pub use error::CatalogError;
pub use link::OutboundLink;
pub use models::{duplicate_ids, ProjectSummary};
