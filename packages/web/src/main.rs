use dioxus::prelude::*;

use store::ClientConfig;
use ui::views::NotFoundView;
use ui::{use_session, ClientProvider};
use views::{
    AdminDashboard, AgentDashboard, ClaimDetail, Claims, CustomerDashboard, FileManagement, History, Login,
    Register, Shell, ShipmentDetail, Tracking,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Shell)]
        #[route("/customer/dashboard")]
        CustomerDashboard {},
        #[route("/customer/tracking")]
        Tracking {},
        #[route("/customer/tracking/:id")]
        ShipmentDetail { id: String },
        #[route("/customer/claims")]
        Claims {},
        #[route("/customer/claims/:id")]
        ClaimDetail { id: String },
        #[route("/customer/history")]
        History {},
        #[route("/agent/dashboard")]
        AgentDashboard {},
        #[route("/agent/files")]
        FileManagement {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const CONFIG: &str = include_str!("../ctn.toml");

/// Embedded configuration, with the backend URL overridable at build time.
fn client_config() -> ClientConfig {
    let config = ClientConfig::load(CONFIG);
    match option_env!("CTN_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(client_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Send `/` to the session's dashboard, or to the login screen.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let target = match use_session() {
        Some(session) => session.role.dashboard_path(),
        None => store::guard::LOGIN_PATH,
    };
    nav.replace(target);
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView { path: segments.join("/") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::Role;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.booking.origin, "Rades");
        assert_eq!(config.session.storage_key, "ctn-user");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_role_dashboards_are_routes() {
        for role in Role::ALL {
            let route: Route = role.dashboard_path().parse().unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{role} dashboard is routed");
        }
        let unknown: Route = "/nowhere/at/all".parse().unwrap();
        assert_eq!(
            unknown,
            Route::NotFound { segments: vec!["nowhere".into(), "at".into(), "all".into()] }
        );
    }
}
