use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::icons::FaShip;
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();
    rsx! {
        footer {
            class: "bg-neutral-800 text-neutral-200 py-6",
            div {
                class: "px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-4 gap-8",
                div {
                    class: "md:col-span-2",
                    div {
                        class: "flex items-center gap-2 mb-4",
                        Icon { icon: FaShip, width: 22, height: 22, class: "text-accent-500" }
                        span { class: "font-bold text-lg text-white", "CTN e-Services" }
                    }
                    p {
                        class: "text-sm text-neutral-400",
                        "Simplifying import/export procedures, improving communication and optimizing shipment tracking."
                    }
                }
                div {
                    h3 { class: "text-sm font-semibold text-white uppercase tracking-wider mb-3", "Contact" }
                    ul {
                        class: "space-y-2 text-sm text-neutral-400",
                        li { "Port of Rades, Tunis" }
                        li { "+216 71 123 456" }
                        li {
                            a { class: "hover:text-accent-500", href: "mailto:contact@ctn.com.tn", "contact@ctn.com.tn" }
                        }
                    }
                }
            }
            div {
                class: "mt-8 pt-6 px-4 sm:px-6 lg:px-8 border-t border-neutral-700 text-sm text-neutral-400",
                "© {year} CTN. All rights reserved."
            }
        }
    }
}
