use dioxus::prelude::*;
use dioxus_free_icons::IconShape;
use store::models::Role;

use crate::auth::use_session;
use crate::icons::{
    FaChevronLeft, FaChevronRight, FaClockRotateLeft, FaFolderOpen, FaHouse, FaTriangleExclamation,
    FaTruck,
};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Tracking,
    Claims,
    History,
    Files,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// Sidebar entries of a role's portal.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    match role {
        Role::Customer => vec![
            NavItem { label: "Dashboard", path: "/customer/dashboard", icon: NavIcon::Dashboard },
            NavItem { label: "Track Shipments", path: "/customer/tracking", icon: NavIcon::Tracking },
            NavItem { label: "Claims", path: "/customer/claims", icon: NavIcon::Claims },
            NavItem { label: "History", path: "/customer/history", icon: NavIcon::History },
        ],
        Role::Agent => vec![
            NavItem { label: "Dashboard", path: "/agent/dashboard", icon: NavIcon::Dashboard },
            NavItem { label: "File Management", path: "/agent/files", icon: NavIcon::Files },
        ],
        Role::Admin => vec![NavItem { label: "Dashboard", path: "/admin/dashboard", icon: NavIcon::Dashboard }],
    }
}

/// Collapsible navigation column. On small screens it slides over the page
/// while `mobile_open` is set.
#[component]
pub fn Sidebar(mut collapsed: Signal<bool>, mut mobile_open: Signal<bool>) -> Element {
    let session = use_session();
    let items = session.as_ref().map(|s| nav_items(s.role)).unwrap_or_default();
    let width = if collapsed() { "md:w-16" } else { "md:w-64" };
    let slide = if mobile_open() { "translate-x-0" } else { "-translate-x-full md:translate-x-0" };

    rsx! {
        aside {
            class: "fixed top-16 bottom-0 left-0 z-20 w-64 {width} {slide} bg-white border-r border-neutral-200 transition-all duration-200 flex flex-col",
            nav {
                class: "flex-1 py-4 space-y-1",
                for item in items {
                    Link {
                        key: "{item.path}",
                        to: item.path,
                        class: "flex items-center gap-3 mx-2 px-3 py-2 rounded-md text-sm text-neutral-700 hover:bg-primary-50",
                        active_class: "bg-primary-100 text-primary-700 font-medium",
                        onclick: move |_| mobile_open.set(false),
                        NavGlyph { icon: item.icon }
                        if !collapsed() {
                            span { "{item.label}" }
                        }
                    }
                }
            }
            button {
                class: "hidden md:flex items-center justify-center h-10 border-t border-neutral-200 text-neutral-500 hover:text-primary-600",
                "aria-label": "Collapse sidebar",
                onclick: move |_| collapsed.toggle(),
                if collapsed() {
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                } else {
                    Icon { icon: FaChevronLeft, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => glyph(FaHouse),
        NavIcon::Tracking => glyph(FaTruck),
        NavIcon::Claims => glyph(FaTriangleExclamation),
        NavIcon::History => glyph(FaClockRotateLeft),
        NavIcon::Files => glyph(FaFolderOpen),
    }
}

fn glyph<T: IconShape + Clone + PartialEq + 'static>(shape: T) -> Element {
    rsx! {
        Icon { icon: shape, width: 16, height: 16 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths_stay_in_portal() {
        for role in Role::ALL {
            let items = nav_items(role);
            assert_eq!(items[0].path, role.dashboard_path());
            let prefix = format!("/{}/", role.as_str());
            assert!(items.iter().all(|i| i.path.starts_with(&prefix)));
        }
    }
}
