use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(into)] title: Option<String>,
    #[props(into)] subtitle: Option<String>,
    #[props(into, default)] class: String,
    #[props(default)] no_padding: bool,
    children: Element,
) -> Element {
    let body = if no_padding { "" } else { "p-6" };
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm overflow-hidden {class}",
            if title.is_some() || subtitle.is_some() {
                div {
                    class: "px-6 py-4 border-b border-neutral-200",
                    if let Some(title) = &title {
                        h3 { class: "text-lg font-medium text-neutral-900", "{title}" }
                    }
                    if let Some(subtitle) = &subtitle {
                        p { class: "mt-1 text-sm text-neutral-500", "{subtitle}" }
                    }
                }
            }
            div { class: "{body}", {children} }
        }
    }
}

/// Dashboard counter. The icon goes in `children`.
#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into, default = "bg-primary-100 text-primary-600".to_string())] tone: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm p-5 flex items-center",
            div {
                class: "h-12 w-12 rounded-full flex items-center justify-center {tone}",
                {children}
            }
            div {
                class: "ml-4",
                p { class: "text-sm font-medium text-neutral-500", "{title}" }
                p { class: "text-2xl font-semibold text-neutral-900", "{value}" }
            }
        }
    }
}
