use dioxus::prelude::*;

use crate::{Footer, Header, Sidebar};

/// Page frame for the authenticated portals: header, sidebar, the routed
/// content in `children`, footer.
#[component]
pub fn AppLayout(children: Element) -> Element {
    let collapsed = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);
    let offset = if collapsed() { "md:ml-16" } else { "md:ml-64" };

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-neutral-50",
            Header { on_toggle_sidebar: move |_| mobile_open.toggle() }
            Sidebar { collapsed, mobile_open }
            div {
                class: "flex-1 flex flex-col pt-16 {offset} transition-all duration-200",
                main {
                    class: "flex-1 p-4 md:p-8",
                    {children}
                }
                Footer {}
            }
        }
    }
}
