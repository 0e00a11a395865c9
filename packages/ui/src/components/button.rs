use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary-500 hover:bg-primary-600 text-white shadow-sm",
            ButtonVariant::Secondary => "bg-secondary-500 hover:bg-secondary-600 text-white shadow-sm",
            ButtonVariant::Accent => "bg-accent-500 hover:bg-accent-600 text-primary-800 shadow-sm",
            ButtonVariant::Outline => "bg-white border border-primary-300 text-primary-700 hover:bg-primary-50",
            ButtonVariant::Ghost => "bg-transparent hover:bg-primary-50 text-primary-700",
            ButtonVariant::Danger => "bg-error-500 hover:bg-error-600 text-white shadow-sm",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-xs",
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-5 py-2.5 text-base",
        }
    }
}

/// Themed button. While `loading` it shows a spinner and ignores clicks.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(into, default)] class: String,
    #[props(into, default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] full_width: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let inert = disabled || loading;
    let width = if full_width { "w-full" } else { "" };
    let state = if inert { "opacity-60 cursor-not-allowed pointer-events-none" } else { "" };
    let content = if loading { "flex items-center opacity-0" } else { "flex items-center" };
    let button_type = r#type;

    rsx! {
        button {
            class: "inline-flex items-center justify-center font-medium rounded-md transition-colors duration-200 relative {variant.class()} {size.class()} {width} {state} {class}",
            r#type: button_type,
            disabled: inert,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span {
                    class: "absolute inset-0 flex items-center justify-center",
                    span { class: "animate-spin h-4 w-4 border-2 border-current border-r-transparent rounded-full" }
                }
            }
            span { class: "{content}", {children} }
        }
    }
}
