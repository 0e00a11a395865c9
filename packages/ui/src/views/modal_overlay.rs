use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Full-screen overlay centring `children` in a card with a title bar.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    #[props(into)] title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let width = if wide { "max-w-2xl" } else { "max-w-lg" };
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50 p-4",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "ctn-pop bg-white rounded-lg shadow-lg w-full {width} max-h-[90vh] overflow-y-auto",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-neutral-200",
                    h2 { class: "text-lg font-semibold text-neutral-900", "{title}" }
                    button {
                        class: "p-1 text-neutral-500 hover:text-neutral-700",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                div { class: "px-6 py-5", {children} }
            }
        }
    }
}
