use dioxus::prelude::*;

const FIELD: &str = "block w-full rounded-md border border-neutral-300 px-3 py-2 text-sm text-neutral-900 shadow-sm focus:border-primary-500 focus:outline-none focus:ring-1 focus:ring-primary-500 disabled:bg-neutral-100";

#[component]
pub fn Input(
    #[props(into, default)] class: String,
    #[props(into, default = "text".to_string())] r#type: String,
    #[props(into, default)] id: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] value: String,
    #[props(into, default)] min: String,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "{FIELD} {class}",
            id: "{id}",
            r#type: input_type,
            placeholder: "{placeholder}",
            value: "{value}",
            min: "{min}",
            disabled,
            readonly,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(into, default)] r#for: String, #[props(into, default)] class: String, children: Element) -> Element {
    let target = r#for;
    rsx! {
        label {
            class: "block text-sm font-medium text-neutral-700 mb-1 {class}",
            r#for: target,
            {children}
        }
    }
}

/// `<select>`; pass `option` elements as children.
#[component]
pub fn Select(
    #[props(into, default)] class: String,
    #[props(into, default)] id: String,
    #[props(into, default)] value: String,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: "{FIELD} bg-white {class}",
            id: "{id}",
            value: "{value}",
            disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Textarea(
    #[props(into, default)] class: String,
    #[props(into, default)] id: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] value: String,
    #[props(default = 4)] rows: u32,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "{FIELD} {class}",
            id: "{id}",
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Inline error shown above a form.
#[component]
pub fn FormError(#[props(into)] message: String) -> Element {
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
            "{message}"
        }
    }
}
