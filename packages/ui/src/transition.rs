//! Enter/exit animation phases for overlay layers.
//!
//! The animation is cosmetic. A layer in [`LayerPhase::Leaving`] stays mounted
//! only so the exit keyframes can play; it is inert and never requests
//! dismissal.

/// Duration of the enter and exit animations.
pub const TRANSITION_MS: u32 = 500;

/// Spring-like overshoot curve for the panel.
pub const SPRING_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Stacking order of modal layers above page content.
pub const MODAL_Z_INDEX: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerPhase {
    Open,
    Leaving,
}

impl LayerPhase {
    /// CSS state class selecting the enter or exit keyframes.
    pub fn state_class(self) -> &'static str {
        match self {
            LayerPhase::Open => "is-open",
            LayerPhase::Leaving => "is-leaving",
        }
    }

    pub fn is_interactive(self) -> bool {
        self == LayerPhase::Open
    }
}

/// Inline style for a modal layer: stacking plus the timing variables the
/// stylesheet's keyframes read.
pub fn layer_style() -> String {
    format!(
        "z-index: {MODAL_Z_INDEX}; --modal-duration: {TRANSITION_MS}ms; \
         --modal-easing: {SPRING_EASING};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_classes() {
        assert_eq!(LayerPhase::Open.state_class(), "is-open");
        assert_eq!(LayerPhase::Leaving.state_class(), "is-leaving");
    }

    #[test]
    fn test_only_open_is_interactive() {
        assert!(LayerPhase::Open.is_interactive());
        assert!(!LayerPhase::Leaving.is_interactive());
    }

    #[test]
    fn test_layer_style_carries_timing() {
        let style = layer_style();
        assert!(style.contains("z-index: 100;"));
        assert!(style.contains("--modal-duration: 500ms;"));
        assert!(style.contains(SPRING_EASING));
    }
}
