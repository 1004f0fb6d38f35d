use thiserror::Error;

/// Failures reading or writing a `portfolio.toml` catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid portfolio catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize portfolio catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
}
