//! Field checks for the login and registration forms. Each `validate`
//! returns the first problem as the message shown above the form.

use crate::models::Role;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld`, no whitespace, a dot somewhere after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email is required.".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address.".into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: Role,
    pub accept_terms: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            fullname: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            role: Role::Customer,
            accept_terms: false,
        }
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.fullname.trim().chars().count() < MIN_NAME_LEN {
            return Err(format!("Full name must be at least {MIN_NAME_LEN} characters."));
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address.".into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
        }
        if self.password != self.confirm {
            return Err("Passwords do not match.".into());
        }
        if !self.accept_terms {
            return Err("You must accept the terms and conditions.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("amel@ctn.tn"));
        assert!(is_valid_email(" a.b@mail.co.uk "));
        for bad in ["", "amel", "@ctn.tn", "amel@ctn", "amel@.tn", "amel@ctn.", "a b@ctn.tn", "a@b@c.tn"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_login_form() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err("Email is required.".to_string()));
        form.email = "amel@ctn.tn".into();
        form.password = "12345".into();
        assert!(form.validate().is_err());
        form.password = "123456".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_form() {
        let mut form = RegisterForm {
            fullname: "Amel".into(),
            email: "amel@ctn.tn".into(),
            password: "secret1".into(),
            confirm: "secret1".into(),
            role: Role::Customer,
            accept_terms: true,
        };
        assert!(form.validate().is_ok());

        form.confirm = "secret2".into();
        assert_eq!(form.validate(), Err("Passwords do not match.".to_string()));
        form.confirm = "secret1".into();

        form.accept_terms = false;
        assert!(form.validate().is_err());
        form.accept_terms = true;

        form.fullname = "Al".into();
        assert!(form.validate().is_err());
    }
}
