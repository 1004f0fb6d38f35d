//! Pointer-region partitioning for modal dismissal.
//!
//! Only the backdrop and the header close control request dismissal. The
//! panel stops propagation, so clicks on cards, text and outbound links never
//! reach the backdrop's handler.

use crate::transition::LayerPhase;

/// Where a pointer gesture landed inside a modal layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRegion {
    Backdrop,
    CloseButton,
    Panel,
    Card,
    OutboundLink,
}

/// Whether a gesture on `region` asks the caller to close the modal.
pub fn requests_dismissal(region: PointerRegion, phase: LayerPhase) -> bool {
    phase.is_interactive()
        && matches!(region, PointerRegion::Backdrop | PointerRegion::CloseButton)
}

/// Route one gesture. `dismiss` runs synchronously, at most once, and only
/// when the region requests dismissal. Returns whether it ran.
pub fn dispatch_gesture(region: PointerRegion, phase: LayerPhase, dismiss: impl FnOnce()) -> bool {
    if !requests_dismissal(region, phase) {
        return false;
    }
    tracing::debug!(?region, "dismissal requested");
    dismiss();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const ALL_REGIONS: [PointerRegion; 5] = [
        PointerRegion::Backdrop,
        PointerRegion::CloseButton,
        PointerRegion::Panel,
        PointerRegion::Card,
        PointerRegion::OutboundLink,
    ];

    #[test]
    fn test_backdrop_dismisses_once() {
        let calls = Cell::new(0);
        assert!(dispatch_gesture(PointerRegion::Backdrop, LayerPhase::Open, || {
            calls.set(calls.get() + 1)
        }));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_close_button_dismisses_once() {
        let calls = Cell::new(0);
        assert!(dispatch_gesture(PointerRegion::CloseButton, LayerPhase::Open, || {
            calls.set(calls.get() + 1)
        }));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_panel_content_never_dismisses() {
        let calls = Cell::new(0);
        for region in [PointerRegion::Panel, PointerRegion::Card, PointerRegion::OutboundLink] {
            assert!(!dispatch_gesture(region, LayerPhase::Open, || calls.set(calls.get() + 1)));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_leaving_layer_is_inert() {
        for region in ALL_REGIONS {
            assert!(!requests_dismissal(region, LayerPhase::Leaving));
        }
    }

    #[test]
    fn test_one_call_per_gesture() {
        let calls = Cell::new(0);
        let gestures = [
            PointerRegion::Card,
            PointerRegion::Backdrop,
            PointerRegion::OutboundLink,
            PointerRegion::CloseButton,
            PointerRegion::Backdrop,
        ];
        for region in gestures {
            dispatch_gesture(region, LayerPhase::Open, || calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 3);
    }
}
