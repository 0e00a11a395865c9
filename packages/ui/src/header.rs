use dioxus::prelude::*;
use store::badge_label;

use crate::auth::{use_session, LogoutButton};
use crate::context::{use_config, use_notifications};
use crate::icons::{FaBars, FaBell, FaRightFromBracket, FaShip, FaUser};
use crate::notification_dropdown::NotificationDropdown;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Menu {
    Notifications,
    User,
}

/// Top bar: brand, notification bell and the user menu.
#[component]
pub fn Header(on_toggle_sidebar: EventHandler<()>) -> Element {
    let session = use_session();
    let config = use_config();
    let center = use_notifications();
    let mut open = use_signal(|| Option::<Menu>::None);

    let badge = badge_label(center.read().unread_count(), config.notifications.badge_cap);
    let home = session
        .as_ref()
        .map(|s| s.role.dashboard_path())
        .unwrap_or("/");

    let mut toggle = move |menu: Menu| {
        let next = if open() == Some(menu) { None } else { Some(menu) };
        open.set(next);
    };

    rsx! {
        header {
            class: "bg-primary-500 text-white fixed top-0 left-0 right-0 z-30 shadow-md",
            div {
                class: "px-4 sm:px-6 lg:px-8 flex justify-between h-16",
                div {
                    class: "flex items-center gap-3",
                    button {
                        class: "p-2 rounded-md hover:bg-primary-600 md:hidden",
                        "aria-label": "Toggle navigation",
                        onclick: move |_| on_toggle_sidebar.call(()),
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                    Link {
                        to: home,
                        class: "flex items-center gap-2",
                        Icon { icon: FaShip, width: 28, height: 28, class: "text-accent-500" }
                        span { class: "font-bold text-lg md:text-xl", "CTN e-Services" }
                    }
                }

                if let Some(session) = session {
                    div {
                        class: "flex items-center gap-4",
                        div {
                            class: "relative",
                            button {
                                class: "p-2 rounded-full hover:bg-primary-600 relative",
                                "aria-label": "Notifications",
                                onclick: move |_| toggle(Menu::Notifications),
                                Icon { icon: FaBell, width: 18, height: 18 }
                                if let Some(label) = badge {
                                    span {
                                        class: "absolute -top-1 -right-1 bg-accent-500 text-primary-800 text-xs font-bold rounded-full h-5 min-w-5 px-1 flex items-center justify-center",
                                        "{label}"
                                    }
                                }
                            }
                            if open() == Some(Menu::Notifications) {
                                div {
                                    class: "absolute right-0 mt-2 w-80 z-40",
                                    NotificationDropdown { on_close: move |_| open.set(None) }
                                }
                            }
                        }
                        div {
                            class: "relative",
                            button {
                                class: "flex items-center gap-2 p-2 rounded-full hover:bg-primary-600",
                                onclick: move |_| toggle(Menu::User),
                                div {
                                    class: "h-8 w-8 rounded-full bg-primary-400 flex items-center justify-center",
                                    Icon { icon: FaUser, width: 16, height: 16 }
                                }
                                span { class: "hidden lg:block", "{session.display_name()}" }
                            }
                            if open() == Some(Menu::User) {
                                div {
                                    class: "absolute right-0 mt-2 w-56 bg-white shadow-lg rounded-md overflow-hidden z-40",
                                    div {
                                        class: "px-4 py-3 border-b border-neutral-200",
                                        p { class: "text-sm text-neutral-700", "Signed in as" }
                                        p { class: "text-sm font-medium text-neutral-900 truncate", "{session.email}" }
                                        p { class: "text-xs text-neutral-500", "{session.role.label()}" }
                                    }
                                    div {
                                        class: "py-1",
                                        LogoutButton {
                                            class: "w-full text-left px-4 py-2 text-sm text-neutral-700 hover:bg-neutral-100 flex items-center gap-2",
                                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if open().is_some() {
            div {
                class: "fixed inset-0 z-20",
                onclick: move |_| open.set(None),
            }
        }
    }
}
