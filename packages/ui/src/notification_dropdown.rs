use chrono::Utc;
use dioxus::prelude::*;

use crate::context::use_notifications;
use crate::icons::{FaBell, FaCheck, FaTrash};
use crate::Icon;

/// Notification list shown under the header bell.
///
/// Clicking an entry marks it read and opens the record it points at.
#[component]
pub fn NotificationDropdown(on_close: EventHandler<()>) -> Element {
    let mut center = use_notifications();
    let nav = use_navigator();
    let now = Utc::now();
    let items = center.read().list().to_vec();

    rsx! {
        div {
            class: "ctn-pop bg-white rounded-md shadow-xl max-h-[70vh] overflow-hidden text-neutral-900",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            div {
                class: "px-4 py-3 bg-primary-50 border-b border-neutral-200 flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-primary-700", "Notifications" }
                if !items.is_empty() {
                    button {
                        class: "text-xs text-primary-600 hover:text-primary-800 flex items-center gap-1",
                        onclick: move |_| center.write().mark_all_read(),
                        Icon { icon: FaCheck, width: 10, height: 10 }
                        "Mark all as read"
                    }
                }
            }
            div {
                class: "max-h-[50vh] overflow-y-auto",
                if items.is_empty() {
                    div {
                        class: "py-8 px-4 text-center",
                        Icon { icon: FaBell, width: 28, height: 28, class: "text-neutral-300 mx-auto mb-2" }
                        p { class: "text-sm text-neutral-500", "No notifications yet" }
                    }
                } else {
                    ul {
                        class: "divide-y divide-neutral-100",
                        for item in items {
                            li {
                                key: "{item.id}",
                                class: if item.read { "px-4 py-3 hover:bg-neutral-50 cursor-pointer bg-white" } else { "px-4 py-3 hover:bg-neutral-50 cursor-pointer bg-primary-50" },
                                div {
                                    class: "flex items-start",
                                    div {
                                        class: "flex-1",
                                        onclick: {
                                            let id = item.id.clone();
                                            let target = item.related_to.as_ref().map(|r| r.target_path());
                                            move |_| {
                                                center.write().mark_read(&id);
                                                if let Some(path) = &target {
                                                    nav.push(path.as_str());
                                                }
                                                on_close.call(());
                                            }
                                        },
                                        p { class: "text-sm font-medium text-neutral-900", "{item.title}" }
                                        p { class: "text-xs text-neutral-600 mt-1", "{item.message}" }
                                        p { class: "text-xs text-neutral-500 mt-1", "{item.age(now)}" }
                                    }
                                    button {
                                        class: "ml-2 p-1 text-neutral-400 hover:text-error-500",
                                        "aria-label": "Delete notification",
                                        onclick: {
                                            let id = item.id.clone();
                                            move |evt: Event<MouseData>| {
                                                evt.stop_propagation();
                                                center.write().remove(&id);
                                            }
                                        },
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
