//! Top-level attachment point for layered UI.
//!
//! [`OverlayHost`] wraps the application and renders every presented layer
//! after its children, outside the callers' own layout subtrees. Components
//! that want to layer above the page publish into the host's
//! [`OverlayStack`] instead of rendering in place. Without a host there is
//! nowhere to attach, and such components render nothing.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::project_modal::{ModalRequest, ProjectModalPanel};
use crate::transition::LayerPhase;

const MODAL_CSS: Asset = asset!("/assets/styling/project_modal.css");

/// Id of the element every layer is rendered into.
pub const OVERLAY_ROOT_ID: &str = "overlay-root";

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one layer, owned by the component that presents it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

impl LayerId {
    pub fn next() -> Self {
        LayerId(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer<T> {
    pub id: LayerId,
    pub content: T,
    pub phase: LayerPhase,
    epoch: u64,
}

/// Layers in z-order, bottom first.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStack<T> {
    layers: Vec<Layer<T>>,
}

impl<T> Default for OverlayStack<T> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<T> OverlayStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `content` on top, or refresh an existing layer in place. A
    /// layer that is still playing its exit animation is revived.
    pub fn present(&mut self, id: LayerId, content: T) {
        match self.layers.iter_mut().find(|l| l.id == id) {
            Some(layer) => {
                layer.content = content;
                layer.phase = LayerPhase::Open;
            }
            None => self.layers.push(Layer {
                id,
                content,
                phase: LayerPhase::Open,
                epoch: 0,
            }),
        }
    }

    /// Start the exit of an open layer. Returns the epoch that a later
    /// [`finish_leaving`](Self::finish_leaving) must match, or `None` when
    /// the layer is absent or already leaving.
    pub fn dismiss(&mut self, id: LayerId) -> Option<u64> {
        let layer = self.layers.iter_mut().find(|l| l.id == id)?;
        if layer.phase != LayerPhase::Open {
            return None;
        }
        layer.phase = LayerPhase::Leaving;
        layer.epoch += 1;
        Some(layer.epoch)
    }

    /// Remove a layer whose exit animation has finished. A layer revived or
    /// dismissed again since `epoch` was issued is left alone.
    pub fn finish_leaving(&mut self, id: LayerId, epoch: u64) -> bool {
        let Some(pos) = self
            .layers
            .iter()
            .position(|l| l.id == id && l.phase == LayerPhase::Leaving && l.epoch == epoch)
        else {
            return false;
        };
        self.layers.remove(pos);
        true
    }

    /// Release a layer immediately, whatever its phase.
    pub fn remove(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        self.layers.len() != before
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

pub type OverlaySignal = Signal<OverlayStack<ModalRequest>>;

/// The host's stack, if an [`OverlayHost`] is mounted above the caller.
pub fn try_use_overlay_host() -> Option<OverlaySignal> {
    try_use_context::<OverlaySignal>()
}

/// Provides the overlay stack and renders its layers above `children`.
#[component]
pub fn OverlayHost(children: Element) -> Element {
    let stack: OverlaySignal = use_context_provider(|| Signal::new(OverlayStack::new()));
    let layers = stack.read().layers().to_vec();

    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        {children}

        OverlayLayers { layers }
    }
}

/// The layer root: every presented modal, bottom first.
#[component]
pub fn OverlayLayers(layers: Vec<Layer<ModalRequest>>) -> Element {
    rsx! {
        div {
            id: OVERLAY_ROOT_ID,
            class: "overlay-root",
            for layer in layers {
                ProjectModalPanel {
                    key: "{layer.id}",
                    request: layer.content.clone(),
                    phase: layer.phase,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<T> OverlayStack<T> {
        fn get(&self, id: LayerId) -> Option<&Layer<T>> {
            self.layers.iter().find(|l| l.id == id)
        }

        fn top_interactive(&self) -> Option<&Layer<T>> {
            self.layers.iter().rev().find(|l| l.phase.is_interactive())
        }

        fn len(&self) -> usize {
            self.layers.len()
        }
    }

    #[test]
    fn test_layer_ids_are_unique() {
        let a = LayerId::next();
        let b = LayerId::next();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("layer-"));
    }

    #[test]
    fn test_present_pushes_on_top() {
        let mut stack = OverlayStack::new();
        let (a, b) = (LayerId::next(), LayerId::next());
        stack.present(a, "a");
        stack.present(b, "b");
        let order: Vec<_> = stack.layers().iter().map(|l| l.content).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(stack.top_interactive().map(|l| l.id), Some(b));
    }

    #[test]
    fn test_present_again_replaces_without_duplicating() {
        let mut stack = OverlayStack::new();
        let id = LayerId::next();
        stack.present(id, 1);
        stack.present(id, 2);
        stack.present(id, 3);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.get(id).map(|l| l.content), Some(3));
    }

    #[test]
    fn test_dismiss_then_finish_removes() {
        let mut stack = OverlayStack::new();
        let id = LayerId::next();
        stack.present(id, ());
        let epoch = stack.dismiss(id).unwrap();
        assert_eq!(stack.get(id).map(|l| l.phase), Some(LayerPhase::Leaving));
        assert!(stack.top_interactive().is_none());
        assert!(stack.finish_leaving(id, epoch));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_repeated_dismiss_is_noop() {
        let mut stack = OverlayStack::new();
        let id = LayerId::next();
        stack.present(id, ());
        assert!(stack.dismiss(id).is_some());
        assert!(stack.dismiss(id).is_none());
        assert!(stack.dismiss(id).is_none());
        assert_eq!(stack.len(), 1);
        assert!(stack.dismiss(LayerId::next()).is_none());
    }

    #[test]
    fn test_reopen_cancels_pending_removal() {
        let mut stack = OverlayStack::new();
        let id = LayerId::next();
        stack.present(id, "first");
        let stale = stack.dismiss(id).unwrap();
        stack.present(id, "second");
        assert!(!stack.finish_leaving(id, stale));
        assert_eq!(stack.get(id).map(|l| l.phase), Some(LayerPhase::Open));

        let current = stack.dismiss(id).unwrap();
        assert_ne!(stale, current);
        assert!(!stack.finish_leaving(id, stale));
        assert!(stack.finish_leaving(id, current));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_remove_releases_any_phase() {
        let mut stack = OverlayStack::new();
        let (a, b) = (LayerId::next(), LayerId::next());
        stack.present(a, ());
        stack.present(b, ());
        stack.dismiss(b);
        assert!(stack.remove(a));
        assert!(stack.remove(b));
        assert!(!stack.remove(a));
        assert!(stack.is_empty());
    }
}
