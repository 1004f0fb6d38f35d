use catalog::PortfolioConfig;
use dioxus::prelude::*;
use ui::ProjectModal;

/// Catalog compiled into the binary.
const CATALOG_TOML: &str = include_str!("../../portfolio.toml");

/// Parse a catalog, falling back to an empty one so the page still renders.
pub(crate) fn load_catalog(text: &str) -> PortfolioConfig {
    match PortfolioConfig::from_toml(text) {
        Ok(config) => {
            tracing::debug!(
                projects = config.projects.len(),
                "loaded {}",
                PortfolioConfig::filename()
            );
            config
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {}", PortfolioConfig::filename(), e);
            PortfolioConfig::default()
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let catalog = use_hook(|| load_catalog(CATALOG_TOML));
    let mut is_open = use_signal(|| false);
    let count = catalog.projects.len();

    rsx! {
        main {
            class: "portfolio",
            header {
                class: "portfolio-hero",
                h1 { "Selected Work" }
                p { class: "portfolio-lede", "Product design and engineering, start to finish." }
            }

            button {
                class: "portfolio-more",
                r#type: "button",
                onclick: move |_| is_open.set(true),
                "See other projects ({count})"
            }

            ProjectModal {
                is_open,
                projects: catalog.projects.clone(),
                config: Some(catalog.modal.clone()),
                on_dismiss: move |_| is_open.set(false),
            }
        }
    }
}
