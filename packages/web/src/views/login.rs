//! Login page with email and password.

use api::AuthService;
use dioxus::prelude::*;
use store::forms::LoginForm;
use ui::components::{Button, ButtonVariant, FormError, Input, Label};
use ui::icons::FaShip;
use ui::{use_auth, use_backend, Icon};

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if let Some(session) = auth.read().current() {
        nav.replace(session.role.dashboard_path());
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            let fields = form();
            if let Err(message) = fields.validate() {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            // Sign in on a copy so no write lock is held across the request
            let mut store = auth.peek().clone();
            match AuthService::new(backend).sign_in(&mut store, &fields.email, &fields.password).await {
                Ok(session) => {
                    tracing::info!(role = %session.role, "signed in");
                    auth.set(store);
                    nav.replace(session.role.dashboard_path());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign-in failed");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-neutral-50",

            div {
                class: "mb-6 flex items-center gap-3 text-primary-700",
                Icon { icon: FaShip, width: 32, height: 32 }
                h1 { class: "font-bold text-[1.75rem]", "CTN e-Services" }
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in to manage your bookings"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[360px] bg-white p-6 rounded-lg shadow-sm border border-neutral-200",

                if let Some(message) = error() {
                    FormError { message }
                }

                div {
                    Label { r#for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "you@company.tn",
                        value: form().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }

                div {
                    Label { r#for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: form().password,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                Link {
                    class: "text-primary-600 no-underline",
                    to: "/register",
                    "Create one"
                }
            }
        }
    }
}
