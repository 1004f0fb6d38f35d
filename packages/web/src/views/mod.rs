mod portfolio;
pub use portfolio::Portfolio;
