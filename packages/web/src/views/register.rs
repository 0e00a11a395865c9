//! Registration page view with email/password form.

use api::AuthService;
use dioxus::prelude::*;
use store::forms::{RegisterForm, MIN_PASSWORD_LEN};
use store::models::Role;
use ui::components::{Button, ButtonVariant, FormError, Input, Label, Select};
use ui::{use_auth, use_backend};

/// Roles a visitor can sign up as; admins are provisioned out of band.
const SIGNUP_ROLES: [Role; 2] = [Role::Customer, Role::Agent];

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(session) = auth.read().current() {
        nav.replace(session.role.dashboard_path());
    }

    let handle_register = move |evt: FormEvent| {
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
            let result = AuthService::new(backend)
                .register(&fields.fullname, &fields.email, &fields.password, fields.role)
                .await;
            match result {
                Ok(session) => {
                    let target = session.role.dashboard_path();
                    tracing::info!(role = %session.role, path = target, "account created");
                    auth.write().set(session);
                    nav.replace(target);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let password_hint = format!("Password (min {MIN_PASSWORD_LEN} characters)");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-neutral-50",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign up for CTN e-Services"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[360px] bg-white p-6 rounded-lg shadow-sm border border-neutral-200",

                if let Some(message) = error() {
                    FormError { message }
                }

                Input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: form().fullname,
                    oninput: move |evt: FormEvent| form.write().fullname = evt.value(),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                Input {
                    r#type: "password",
                    placeholder: password_hint,
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: form().confirm,
                    oninput: move |evt: FormEvent| form.write().confirm = evt.value(),
                }

                div {
                    Label { r#for: "role", "I am a" }
                    Select {
                        id: "role",
                        value: form().role.as_str(),
                        oninput: move |evt: FormEvent| {
                            if let Some(role) = Role::parse(&evt.value()) {
                                form.write().role = role;
                            }
                        },
                        for role in SIGNUP_ROLES {
                            option { key: "{role}", value: role.as_str(), "{role.label()}" }
                        }
                    }
                }

                label {
                    class: "flex items-center gap-2 text-sm text-neutral-700",
                    input {
                        r#type: "checkbox",
                        checked: form().accept_terms,
                        onchange: move |evt: FormEvent| form.write().accept_terms = evt.checked(),
                    }
                    "I accept the terms and conditions"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link {
                    class: "text-primary-600 no-underline",
                    to: "/login",
                    "Sign in"
                }
            }
        }
    }
}
