use api::AgentService;
use dioxus::prelude::*;
use store::models::{JobTitle, NotificationKind, User};

use super::ModalOverlay;
use crate::agent_form::{AgentForm, EditAgentForm};
use crate::components::{Button, ButtonSize, ButtonVariant, Card, StatCard};
use crate::context::{use_backend, use_notifications, use_view_token};
use crate::icons::{FaPenToSquare, FaPhone, FaPlus, FaTrash, FaUserTie};
use crate::Icon;

/// Label for the stored job title, falling back to the raw value.
pub fn title_label(action: Option<&str>) -> String {
    match action {
        Some(raw) => JobTitle::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| store::models::humanize(raw)),
        None => "-".to_string(),
    }
}

/// Insert or replace by id.
pub fn upsert(agents: &mut Vec<User>, agent: User) {
    match agents.iter_mut().find(|a| a.id == agent.id) {
        Some(slot) => *slot = agent,
        None => agents.push(agent),
    }
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Create,
    Edit(User),
    Revoke(User),
}

/// Agent accounts: create, edit and revoke.
#[component]
pub fn AdminDashboardView() -> Element {
    let backend = use_backend();
    let token = use_view_token();
    let mut notifications = use_notifications();

    let mut agents = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut dialog = use_signal(|| Option::<Dialog>::None);
    let mut revoking = use_signal(|| false);

    let loader_backend = backend.clone();
    let loader_token = token.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        let token = loader_token.clone();
        async move {
            let Some(result) = token.run(AgentService::new(backend).list()).await else {
                return;
            };
            match result {
                Ok(list) => agents.set(list),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load agents");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let revoke = use_callback(move |agent: User| {
        let backend = backend.clone();
        let token = token.clone();
        spawn(async move {
            revoking.set(true);
            let Some(result) = token.run(AgentService::new(backend).revoke(&agent.id)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    agents.write().retain(|a| a.id != agent.id);
                    notifications.write().push(
                        "Agent revoked",
                        format!("{} no longer has access.", agent.fullname),
                        NotificationKind::Info,
                        None,
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, agent = %agent.id, "revoke failed");
                    error.set(Some(e.to_string()));
                }
            }
            revoking.set(false);
            dialog.set(None);
        });
    });

    let mut saved = move |agent: User, title: &str| {
        dialog.set(None);
        notifications.write().push(
            title,
            format!("{} ({})", agent.fullname, agent.email),
            NotificationKind::Success,
            None,
        );
        upsert(&mut agents.write(), agent);
    };

    let list = agents();
    let with_phone = list.iter().filter(|a| a.phone.as_deref().is_some_and(|p| !p.is_empty())).count();

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-neutral-900", "Administration" }
                    p { class: "text-sm text-neutral-500", "Manage the agent accounts of the port." }
                }
                Button {
                    onclick: move |_| dialog.set(Some(Dialog::Create)),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "New Agent"
                }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                StatCard { title: "Agents", value: list.len().to_string(),
                    Icon { icon: FaUserTie, width: 20, height: 20 }
                }
                StatCard { title: "Reachable by phone", value: with_phone.to_string(), tone: "bg-green-100 text-green-600",
                    Icon { icon: FaPhone, width: 20, height: 20 }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            Card {
                title: "Agents",
                no_padding: true,
                if loading() {
                    p { class: "p-6 text-sm text-neutral-500", "Loading agents..." }
                } else if list.is_empty() {
                    p { class: "p-6 text-sm text-neutral-500", "No agents yet. Create the first one." }
                } else {
                    table {
                        class: "min-w-full divide-y divide-neutral-200 text-sm",
                        thead {
                            class: "bg-neutral-50 text-left text-xs font-medium text-neutral-500 uppercase tracking-wider",
                            tr {
                                th { class: "px-6 py-3", "Name" }
                                th { class: "px-6 py-3", "Email" }
                                th { class: "px-6 py-3", "Phone" }
                                th { class: "px-6 py-3", "Title" }
                                th { class: "px-6 py-3", "" }
                            }
                        }
                        tbody {
                            class: "bg-white divide-y divide-neutral-100",
                            for agent in list {
                                tr {
                                    key: "{agent.id}",
                                    td { class: "px-6 py-4 font-medium", "{agent.fullname}" }
                                    td { class: "px-6 py-4", "{agent.email}" }
                                    td { class: "px-6 py-4", {agent.phone.clone().unwrap_or_else(|| "-".to_string())} }
                                    td { class: "px-6 py-4", {title_label(agent.action.as_deref())} }
                                    td {
                                        class: "px-6 py-4 flex gap-2 justify-end",
                                        Button {
                                            size: ButtonSize::Sm,
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let agent = agent.clone();
                                                move |_| dialog.set(Some(Dialog::Edit(agent.clone())))
                                            },
                                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                            "Edit"
                                        }
                                        Button {
                                            size: ButtonSize::Sm,
                                            variant: ButtonVariant::Danger,
                                            onclick: {
                                                let agent = agent.clone();
                                                move |_| dialog.set(Some(Dialog::Revoke(agent.clone())))
                                            },
                                            Icon { icon: FaTrash, width: 12, height: 12 }
                                            "Revoke"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            {match dialog() {
                Some(Dialog::Create) => rsx! {
                    ModalOverlay {
                        title: "New Agent",
                        on_close: move |_| dialog.set(None),
                        AgentForm {
                            on_close: move |_| dialog.set(None),
                            on_saved: move |agent: User| saved(agent, "Agent created"),
                        }
                    }
                },
                Some(Dialog::Edit(agent)) => rsx! {
                    ModalOverlay {
                        title: "Edit Agent",
                        on_close: move |_| dialog.set(None),
                        EditAgentForm {
                            agent,
                            on_close: move |_| dialog.set(None),
                            on_saved: move |agent: User| saved(agent, "Agent updated"),
                        }
                    }
                },
                Some(Dialog::Revoke(agent)) => rsx! {
                    ModalOverlay {
                        title: "Revoke Agent",
                        on_close: move |_| dialog.set(None),
                        p {
                            class: "text-sm text-neutral-700",
                            "Revoke access for {agent.fullname} ({agent.email})? The account is deleted and cannot be restored."
                        }
                        div {
                            class: "mt-6 flex justify-end gap-3",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| dialog.set(None),
                                "Keep"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                loading: revoking(),
                                onclick: {
                                    let agent = agent.clone();
                                    move |_| {
                                        revoke.call(agent.clone());
                                    }
                                },
                                "Revoke"
                            }
                        }
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::Role;

    fn agent(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            fullname: name.into(),
            email: format!("{id}@ctn.tn"),
            password: None,
            role: Role::Agent,
            action: Some("export_manager".into()),
            phone: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_title_label() {
        assert_eq!(title_label(Some("export_manager")), "Export Manager");
        assert_eq!(title_label(Some("night_watch")), "Night Watch");
        assert_eq!(title_label(None), "-");
    }

    #[test]
    fn test_upsert() {
        let mut agents = vec![agent("a1", "Amine")];
        upsert(&mut agents, agent("a2", "Sonia"));
        upsert(&mut agents, agent("a1", "Amine Ben Ali"));
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].fullname, "Amine Ben Ali");
    }
}
