//! Session context and role router.
//!
//! The router is the only holder of the signed-in user. It starts anonymous,
//! moves through an optional first-login gate, and `logout` returns it to the
//! initial state. Nothing here checks a credential: any password is accepted.

use crate::config::AccountConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Candidate,
    #[serde(rename = "HR Manager")]
    HrManager,
    Administrator,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Candidate => "Candidate",
            Role::HrManager => "HR Manager",
            Role::Administrator => "Administrator",
        }
    }

    /// Staff accounts must change their password before the session is active.
    pub fn requires_first_login_gate(self) -> bool {
        matches!(self, Role::HrManager | Role::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_first_login: bool,
}

/// Data accepted by a successful registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    /// Signed in, waiting on the first-login password change.
    Pending(User),
    Active(User),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

/// Which top-level screen should be mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    PasswordGate,
    Dashboard(Role),
}

pub struct SessionRouter {
    accounts: Vec<AccountConfig>,
    session: Session,
    auth_view: AuthView,
}

impl SessionRouter {
    pub fn new(accounts: Vec<AccountConfig>) -> Self {
        Self {
            accounts,
            session: Session::Anonymous,
            auth_view: AuthView::Login,
        }
    }

    pub fn accounts(&self) -> &[AccountConfig] {
        &self.accounts
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.session {
            Session::Active(user) => Some(user),
            _ => None,
        }
    }

    pub fn pending_user(&self) -> Option<&User> {
        match &self.session {
            Session::Pending(user) => Some(user),
            _ => None,
        }
    }

    pub fn view(&self) -> View {
        match &self.session {
            Session::Active(user) => View::Dashboard(user.role),
            Session::Pending(_) => View::PasswordGate,
            Session::Anonymous => match self.auth_view {
                AuthView::Login => View::Login,
                AuthView::Register => View::Register,
            },
        }
    }

    pub fn show_register(&mut self) {
        self.auth_view = AuthView::Register;
    }

    pub fn show_login(&mut self) {
        self.auth_view = AuthView::Login;
    }

    /// Sign in. Staff roles land in [`Session::Pending`]; everyone else is
    /// active immediately.
    pub fn login(&mut self, email: &str, _password: &str, selected_role: Option<Role>) -> &Session {
        let user = self.resolve(email, selected_role);
        tracing::info!(role = %user.role, first_login = user.is_first_login, "login accepted");
        self.session = if user.is_first_login {
            Session::Pending(user)
        } else {
            Session::Active(user)
        };
        &self.session
    }

    /// Registration always yields an active candidate session.
    pub fn register(&mut self, registration: Registration) {
        tracing::info!("candidate account registered");
        self.session = Session::Active(User {
            name: registration.name,
            email: registration.email,
            role: Role::Candidate,
            is_first_login: false,
        });
    }

    /// Promote the pending user once the first-login gate is passed. Returns
    /// `false` when there was nobody waiting.
    pub fn complete_password_change(&mut self) -> bool {
        match std::mem::replace(&mut self.session, Session::Anonymous) {
            Session::Pending(user) => {
                tracing::info!(role = %user.role, "first-login gate passed");
                self.session = Session::Active(User {
                    is_first_login: false,
                    ..user
                });
                true
            }
            other => {
                self.session = other;
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if self.session != Session::Anonymous {
            tracing::info!("session ended");
        }
        self.session = Session::Anonymous;
        self.auth_view = AuthView::Login;
    }

    fn resolve(&self, email: &str, selected_role: Option<Role>) -> User {
        // Accounts are checked in table order; the first whose email or role
        // matches wins.
        let account = self
            .accounts
            .iter()
            .find(|a| a.email == email || selected_role == Some(a.role));
        match account {
            Some(account) => User {
                name: account.name.clone(),
                email: email.to_string(),
                role: account.role,
                is_first_login: account.role.requires_first_login_gate(),
            },
            None => User {
                name: display_name_from_email(email),
                email: email.to_string(),
                role: Role::Candidate,
                is_first_login: false,
            },
        }
    }
}

/// `jane.doe@corp.io` -> `Jane Doe`. Only the first dot becomes a space.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .replacen('.', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
