use crate::models::{Role, Session};

pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking a protected region against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// No session goes to login. A session whose role is not allowed goes to its
/// own dashboard rather than to login.
pub fn authorize(session: Option<&Session>, allowed: &[Role]) -> GuardDecision {
    match session {
        None => GuardDecision::Redirect(LOGIN_PATH),
        Some(s) if allowed.contains(&s.role) => GuardDecision::Render,
        Some(s) => GuardDecision::Redirect(s.role.dashboard_path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            id: "u".into(),
            fullname: "U".into(),
            email: "u@ctn.tn".into(),
            role,
            action: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_every_role_and_set() {
        // all 8 subsets of the three roles
        for mask in 0u8..8 {
            let allowed: Vec<Role> = Role::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, r)| r)
                .collect();

            assert_eq!(authorize(None, &allowed), GuardDecision::Redirect("/login"));
            for role in Role::ALL {
                let decision = authorize(Some(&session(role)), &allowed);
                if allowed.contains(&role) {
                    assert_eq!(decision, GuardDecision::Render);
                } else {
                    assert_eq!(decision, GuardDecision::Redirect(role.dashboard_path()));
                }
            }
        }
    }

    #[test]
    fn test_customer_on_admin_route() {
        assert_eq!(
            authorize(Some(&session(Role::Customer)), &[Role::Admin]),
            GuardDecision::Redirect("/customer/dashboard")
        );
    }
}
