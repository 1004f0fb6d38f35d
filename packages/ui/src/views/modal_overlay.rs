use dioxus::prelude::*;

use crate::dismiss::{dispatch_gesture, PointerRegion};
use crate::icons::FaXmark;
use crate::transition::{layer_style, LayerPhase};
use crate::Icon;

/// A full-viewport layer: a dimmed, blurred backdrop beneath a centered panel
/// with a fixed header and a scrollable body.
///
/// Clicking the backdrop or the header close button calls `on_dismiss`.
/// Clicks inside the panel never reach the backdrop.
#[component]
pub fn ModalOverlay(
    title: String,
    phase: LayerPhase,
    on_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    let gesture = move |region: PointerRegion| {
        dispatch_gesture(region, phase, || on_dismiss.call(()));
    };

    rsx! {
        div {
            class: "modal-layer {phase.state_class()}",
            style: layer_style(),
            div {
                class: "modal-backdrop",
                onclick: move |_| gesture(PointerRegion::Backdrop),
            }
            div {
                class: "modal-panel",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        title: "Close",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            gesture(PointerRegion::CloseButton);
                        },
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
