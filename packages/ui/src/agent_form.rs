//! Admin forms for provisioning a new agent and editing an existing one.

use api::{temp_password, AgentService};
use dioxus::prelude::*;
use store::forms::{is_valid_email, MIN_NAME_LEN, MIN_PASSWORD_LEN};
use store::models::{JobTitle, NewUser, User, UserUpdate};

use crate::components::{Button, ButtonVariant, FormError, Input, Label, Select};
use crate::context::use_backend;
use crate::icons::FaRotate;
use crate::Icon;

/// First problem with the agent fields, as shown above the form.
pub fn validate_agent(fullname: &str, email: &str, phone: &str) -> Result<(), String> {
    if fullname.trim().chars().count() < MIN_NAME_LEN {
        return Err(format!("Full name must be at least {MIN_NAME_LEN} characters."));
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.".into());
    }
    if phone.trim().is_empty() {
        return Err("Phone number is required.".into());
    }
    Ok(())
}

fn job_title(value: &str) -> Option<JobTitle> {
    JobTitle::ALL.into_iter().find(|t| t.as_str() == value)
}

/// New agent with a generated temporary password.
#[component]
pub fn AgentForm(on_close: EventHandler<()>, on_saved: EventHandler<User>) -> Element {
    let backend = use_backend();
    let mut fullname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut title = use_signal(|| JobTitle::ALL[0]);
    let mut password = use_signal(|| temp_password(&mut rand::thread_rng()));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(message) = validate_agent(&fullname(), &email(), &phone()) {
            error.set(Some(message));
            return;
        }
        let agent = NewUser::agent(&fullname(), &email(), &phone(), title(), &password());
        let service = AgentService::new(backend.clone());
        spawn(async move {
            error.set(None);
            saving.set(true);
            match service.provision(&agent).await {
                Ok(created) => {
                    saving.set(false);
                    on_saved.call(created);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "agent provisioning failed");
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: handle_submit,
            if let Some(message) = error() {
                FormError { message }
            }
            div {
                Label { r#for: "agent-name", "Full name" }
                Input { id: "agent-name", value: fullname(), oninput: move |evt: FormEvent| fullname.set(evt.value()) }
            }
            div {
                Label { r#for: "agent-email", "Email" }
                Input { id: "agent-email", r#type: "email", value: email(), oninput: move |evt: FormEvent| email.set(evt.value()) }
            }
            div {
                Label { r#for: "agent-phone", "Phone" }
                Input { id: "agent-phone", r#type: "tel", placeholder: "+216 71 000 000", value: phone(), oninput: move |evt: FormEvent| phone.set(evt.value()) }
            }
            div {
                Label { r#for: "agent-title", "Job title" }
                Select {
                    id: "agent-title",
                    value: title().as_str(),
                    oninput: move |evt: FormEvent| {
                        if let Some(t) = job_title(&evt.value()) {
                            title.set(t);
                        }
                    },
                    for t in JobTitle::ALL {
                        option { key: "{t.as_str()}", value: "{t.as_str()}", "{t.label()}" }
                    }
                }
            }
            div {
                Label { r#for: "agent-password", "Temporary password" }
                div {
                    class: "flex gap-2",
                    Input { id: "agent-password", class: "font-mono", value: password(), readonly: true }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| password.set(temp_password(&mut rand::thread_rng())),
                        Icon { icon: FaRotate, width: 14, height: 14 }
                    }
                }
                p { class: "mt-1 text-xs text-neutral-500", "Share it with the agent; they can change it after signing in." }
            }
            div {
                class: "flex justify-end gap-3",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                Button { r#type: "submit", loading: saving(), "Create agent" }
            }
        }
    }
}

/// Edit an agent. Saving sends the full replacement record.
#[component]
pub fn EditAgentForm(agent: User, on_close: EventHandler<()>, on_saved: EventHandler<User>) -> Element {
    let backend = use_backend();
    let mut update = use_signal(|| UserUpdate {
        password: String::new(),
        ..UserUpdate::from_user(&agent)
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let changes = update();
        if let Err(message) = validate_agent(&changes.fullname, &changes.email, &changes.phone) {
            error.set(Some(message));
            return;
        }
        if !changes.password.is_empty() && changes.password.chars().count() < MIN_PASSWORD_LEN {
            error.set(Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters.")));
            return;
        }
        let service = AgentService::new(backend.clone());
        let agent = agent.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            match service.edit(&agent, &changes).await {
                Ok(saved) => {
                    saving.set(false);
                    on_saved.call(saved);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "agent update failed");
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let values = update();

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: handle_submit,
            if let Some(message) = error() {
                FormError { message }
            }
            div {
                Label { r#for: "edit-name", "Full name" }
                Input { id: "edit-name", value: values.fullname.clone(), oninput: move |evt: FormEvent| update.write().fullname = evt.value() }
            }
            div {
                Label { r#for: "edit-email", "Email" }
                Input { id: "edit-email", r#type: "email", value: values.email.clone(), oninput: move |evt: FormEvent| update.write().email = evt.value() }
            }
            div {
                Label { r#for: "edit-phone", "Phone" }
                Input { id: "edit-phone", r#type: "tel", value: values.phone.clone(), oninput: move |evt: FormEvent| update.write().phone = evt.value() }
            }
            div {
                Label { r#for: "edit-title", "Job title" }
                Select {
                    id: "edit-title",
                    value: values.action.clone(),
                    oninput: move |evt: FormEvent| update.write().action = evt.value(),
                    if job_title(&values.action).is_none() {
                        option { value: "{values.action}", "{values.action}" }
                    }
                    for t in JobTitle::ALL {
                        option { key: "{t.as_str()}", value: "{t.as_str()}", "{t.label()}" }
                    }
                }
            }
            div {
                Label { r#for: "edit-password", "New password" }
                Input {
                    id: "edit-password",
                    r#type: "password",
                    placeholder: "Leave blank to keep the current one",
                    value: values.password.clone(),
                    oninput: move |evt: FormEvent| update.write().password = evt.value(),
                }
            }
            div {
                class: "flex justify-end gap-3",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                Button { r#type: "submit", loading: saving(), "Save changes" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_agent() {
        assert!(validate_agent("Sonia Gharbi", "sonia@ctn.tn", "+216 71 000 002").is_ok());
        assert!(validate_agent("So", "sonia@ctn.tn", "+216").unwrap_err().contains("Full name"));
        assert!(validate_agent("Sonia", "sonia@ctn", "+216").unwrap_err().contains("email"));
        assert!(validate_agent("Sonia", "sonia@ctn.tn", "  ").unwrap_err().contains("Phone"));
    }

    #[test]
    fn test_job_title_lookup() {
        for t in JobTitle::ALL {
            assert_eq!(job_title(t.as_str()), Some(t));
        }
        assert_eq!(job_title("New Agent"), None);
    }
}
