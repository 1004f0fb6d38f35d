//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod dismiss;
pub use dismiss::{dispatch_gesture, requests_dismissal, PointerRegion};

pub mod transition;
pub use transition::{LayerPhase, SPRING_EASING, TRANSITION_MS};

pub mod overlay;
pub use overlay::{try_use_overlay_host, LayerId, OverlayHost, OverlayStack};

pub mod views;

mod project_card;
pub use project_card::ProjectCard;

mod project_modal;
pub use project_modal::{ModalRequest, ProjectModal, ProjectModalPanel};
