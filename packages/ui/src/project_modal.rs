//! The "other projects" modal.
//!
//! [`ProjectModal`] is what callers render. It owns no data: it publishes the
//! caller's `is_open` flag and project list to the [`OverlayHost`] as a
//! [`ModalRequest`], and the host renders [`ProjectModalPanel`] at the top
//! level. Dismissal gestures only call `on_dismiss`; closing happens when the
//! caller flips `is_open` back to false.
//!
//! [`OverlayHost`]: crate::overlay::OverlayHost

use catalog::{duplicate_ids, ModalConfig, ProjectSummary};
use dioxus::prelude::*;

use crate::overlay::{try_use_overlay_host, LayerId, OverlaySignal};
use crate::project_card::ProjectCard;
use crate::transition::LayerPhase;
use crate::views::ModalOverlay;

/// Everything the host needs to render one open project modal.
#[derive(Clone, PartialEq)]
pub struct ModalRequest {
    pub config: ModalConfig,
    pub projects: Vec<ProjectSummary>,
    pub on_dismiss: EventHandler<()>,
}

/// Modal listing `projects` as a card grid while `is_open` is true.
///
/// Renders nothing in place. Without an `OverlayHost` above it, it renders
/// nothing at all.
#[component]
pub fn ProjectModal(
    is_open: ReadOnlySignal<bool>,
    projects: ReadOnlySignal<Vec<ProjectSummary>>,
    on_dismiss: EventHandler<()>,
    config: ReadOnlySignal<Option<ModalConfig>>,
) -> Element {
    let host = try_use_overlay_host();
    let id = use_hook(|| {
        if host.is_none() {
            tracing::debug!("no overlay host mounted; project modal will not render");
        }
        LayerId::next()
    });

    use_effect(move || {
        let Some(mut stack) = host else {
            return;
        };

        if is_open() {
            let projects = projects();
            let dupes = duplicate_ids(&projects);
            if !dupes.is_empty() {
                tracing::warn!(layer = %id, ?dupes, "duplicate project ids in modal list");
            }
            tracing::debug!(layer = %id, cards = projects.len(), "presenting project modal");
            stack.write().present(
                id,
                ModalRequest {
                    config: config().unwrap_or_default(),
                    projects,
                    on_dismiss,
                },
            );
        } else {
            // `dismiss` reports `None` for a layer that was never shown.
            let epoch = stack.write().dismiss(id);
            if let Some(epoch) = epoch {
                tracing::debug!(layer = %id, "closing project modal");
                release_after_exit(stack, id, epoch);
            }
        }
    });

    use_drop(move || {
        if let Some(mut stack) = host {
            if let Ok(mut layers) = stack.try_write() {
                layers.remove(id);
            }
        }
    });

    rsx! {}
}

/// Drop a leaving layer once its exit animation has played.
fn release_after_exit(mut stack: OverlaySignal, id: LayerId, epoch: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(crate::transition::TRANSITION_MS).await;
            if let Ok(mut layers) = stack.try_write() {
                layers.finish_leaving(id, epoch);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        stack.write().finish_leaving(id, epoch);
    }
}

/// The panel a host renders for one [`ModalRequest`]: header with title and
/// close button, then the responsive project grid.
#[component]
pub fn ProjectModalPanel(request: ModalRequest, phase: LayerPhase) -> Element {
    let ModalRequest {
        config,
        projects,
        on_dismiss,
    } = request;
    let lines = config.clamp_lines();

    rsx! {
        ModalOverlay {
            title: config.title.clone(),
            phase,
            on_dismiss,
            div {
                class: "project-grid",
                for project in projects {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        link_label: config.link_label.clone(),
                        description_lines: lines,
                    }
                }
            }
        }
    }
}
