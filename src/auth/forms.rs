//! Draft state and validation for the login, registration and password
//! change forms.
//!
//! Each form owns a single `error` slot. `submit` clears it, runs the checks
//! in a fixed order, and stores the first failure.

use crate::auth::error::{FormError, PasswordSubject};
use crate::auth::session::{Registration, Role};
use crate::auth::strength;
use crate::config::{AccountConfig, AuthConfig};
use crate::input::{FocusOrder, TextInput};

fn record<T>(slot: &mut Option<FormError>, result: Result<T, FormError>) -> Result<T, FormError> {
    if let Err(ref err) = result {
        tracing::debug!(kind = err.kind(), "form submission rejected");
        *slot = Some(err.clone());
    }
    result
}

fn check_email_shape(email: &str) -> Result<(), FormError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(FormError::InvalidEmailShape)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    RememberMe,
}

impl FocusOrder for LoginField {
    const ORDER: &'static [Self] = &[LoginField::Email, LoginField::Password, LoginField::RememberMe];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub selected_role: Option<Role>,
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub remember_me: bool,
    pub selected_role: Option<Role>,
    pub focus: LoginField,
    pub error: Option<FormError>,
    min_password_len: usize,
}

impl LoginForm {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::masked(),
            remember_me: false,
            selected_role: None,
            focus: LoginField::Email,
            error: None,
            min_password_len: config.login_min_password_len,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::RememberMe => None,
        }
    }

    /// Prefill from a demo account shortcut.
    pub fn fill_demo(&mut self, account: &AccountConfig) {
        self.email.set(&account.email);
        self.password.set(&account.password_hint);
        self.selected_role = Some(account.role);
        self.focus = LoginField::Password;
    }

    pub fn submit(&mut self) -> Result<Credentials, FormError> {
        self.error = None;
        let result = self.validate();
        record(&mut self.error, result)
    }

    fn validate(&self) -> Result<Credentials, FormError> {
        let email = self.email.value();
        let password = self.password.value();
        if email.is_empty() || password.is_empty() {
            return Err(FormError::missing("Please enter both email and password"));
        }
        check_email_shape(email)?;
        if password.chars().count() < self.min_password_len {
            return Err(FormError::PasswordTooShort {
                subject: PasswordSubject::Login,
                min: self.min_password_len,
            });
        }
        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
            selected_role: self.selected_role,
        })
    }

    /// "Forgot password?" needs a plausible email before the dialog opens.
    pub fn request_recovery(&mut self) -> Result<String, FormError> {
        self.error = None;
        let email = self.email.value();
        let result = if email.is_empty() {
            Err(FormError::missing("Please enter your email address first"))
        } else {
            check_email_shape(email).map(|_| email.to_string())
        };
        record(&mut self.error, result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FullName,
    Email,
    Password,
    Confirm,
    Terms,
}

impl FocusOrder for RegisterField {
    const ORDER: &'static [Self] = &[
        RegisterField::FullName,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::Confirm,
        RegisterField::Terms,
    ];
}

#[derive(Debug)]
pub struct RegisterForm {
    pub full_name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm: TextInput,
    pub terms_accepted: bool,
    pub focus: RegisterField,
    pub error: Option<FormError>,
    /// Set once the form is accepted; inputs are frozen until the session
    /// starts.
    pub processing: bool,
    min_password_len: usize,
}

impl RegisterForm {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            full_name: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
            confirm: TextInput::masked(),
            terms_accepted: false,
            focus: RegisterField::FullName,
            error: None,
            processing: false,
            min_password_len: config.new_password_min_len,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        if self.processing {
            return None;
        }
        match self.focus {
            RegisterField::FullName => Some(&mut self.full_name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::Confirm => Some(&mut self.confirm),
            RegisterField::Terms => None,
        }
    }

    pub fn toggle_terms(&mut self) {
        if !self.processing {
            self.terms_accepted = !self.terms_accepted;
        }
    }

    pub fn strength(&self) -> u8 {
        strength::score(self.password.value())
    }

    pub fn submit(&mut self) -> Result<Registration, FormError> {
        self.error = None;
        let result = self.validate();
        if result.is_ok() {
            self.processing = true;
        }
        record(&mut self.error, result)
    }

    fn validate(&self) -> Result<Registration, FormError> {
        let name = self.full_name.value();
        let email = self.email.value();
        let password = self.password.value();
        let confirm = self.confirm.value();
        if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(FormError::missing("Please fill in all fields"));
        }
        check_email_shape(email)?;
        if password.chars().count() < self.min_password_len {
            return Err(FormError::PasswordTooShort {
                subject: PasswordSubject::Account,
                min: self.min_password_len,
            });
        }
        if password != confirm {
            return Err(FormError::PasswordMismatch {
                subject: PasswordSubject::Account,
            });
        }
        if !self.terms_accepted {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChangeMode {
    /// First-login gate for a pending staff user.
    Gate { user_name: String },
    /// Opened from "Forgot password?" on the login screen.
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Email,
    NewPassword,
    Confirm,
}

impl FocusOrder for PasswordField {
    const ORDER: &'static [Self] = &[
        PasswordField::Email,
        PasswordField::NewPassword,
        PasswordField::Confirm,
    ];
}

#[derive(Debug)]
pub struct PasswordChangeForm {
    pub mode: PasswordChangeMode,
    pub email: TextInput,
    pub new_password: TextInput,
    pub confirm: TextInput,
    pub focus: PasswordField,
    pub error: Option<FormError>,
    pub processing: bool,
    min_password_len: usize,
    required_strength: u8,
}

impl PasswordChangeForm {
    pub fn new(mode: PasswordChangeMode, config: &AuthConfig) -> Self {
        Self {
            mode,
            email: TextInput::new(),
            new_password: TextInput::masked(),
            confirm: TextInput::masked(),
            focus: PasswordField::Email,
            error: None,
            processing: false,
            min_password_len: config.new_password_min_len,
            required_strength: config.required_strength,
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        if self.processing {
            return None;
        }
        Some(match self.focus {
            PasswordField::Email => &mut self.email,
            PasswordField::NewPassword => &mut self.new_password,
            PasswordField::Confirm => &mut self.confirm,
        })
    }

    pub fn strength(&self) -> u8 {
        strength::score(self.new_password.value())
    }

    pub fn submit(&mut self) -> Result<(), FormError> {
        self.error = None;
        let result = self.validate();
        if result.is_ok() {
            self.processing = true;
        }
        record(&mut self.error, result)
    }

    fn validate(&self) -> Result<(), FormError> {
        let email = self.email.value();
        let new_password = self.new_password.value();
        let confirm = self.confirm.value();
        if email.is_empty() || new_password.is_empty() || confirm.is_empty() {
            return Err(FormError::missing("Please fill in all fields"));
        }
        check_email_shape(email)?;
        if new_password.chars().count() < self.min_password_len {
            return Err(FormError::PasswordTooShort {
                subject: PasswordSubject::New,
                min: self.min_password_len,
            });
        }
        if new_password != confirm {
            return Err(FormError::PasswordMismatch {
                subject: PasswordSubject::New,
            });
        }
        let score = self.strength();
        if score < self.required_strength {
            return Err(FormError::PasswordTooWeak { score });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::default_accounts;

    fn auth() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn test_login_check_order() {
        let mut form = LoginForm::new(&auth());
        assert!(matches!(form.submit(), Err(FormError::MissingField { .. })));

        form.email.set("nobody");
        form.password.set("abc");
        assert_eq!(form.submit(), Err(FormError::InvalidEmailShape));

        form.email.set("nobody@x.io");
        assert_eq!(
            form.submit(),
            Err(FormError::PasswordTooShort {
                subject: PasswordSubject::Login,
                min: 6
            })
        );
        assert_eq!(
            form.error.as_ref().map(|e| e.to_string()).as_deref(),
            Some("Password must be at least 6 characters")
        );

        form.password.set("abcdef");
        let creds = form.submit().unwrap();
        assert_eq!(creds.email, "nobody@x.io");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_demo_fill_sets_role() {
        let mut form = LoginForm::new(&auth());
        let accounts = default_accounts();
        form.fill_demo(&accounts[1]);
        let creds = form.submit().unwrap();
        assert_eq!(creds.email, "hr@demo.com");
        assert_eq!(creds.selected_role, Some(Role::HrManager));
    }

    #[test]
    fn test_recovery_requires_email() {
        let mut form = LoginForm::new(&auth());
        assert_eq!(
            form.request_recovery().unwrap_err().to_string(),
            "Please enter your email address first"
        );
        form.email.set("ops");
        assert_eq!(form.request_recovery(), Err(FormError::InvalidEmailShape));
        form.email.set("ops@x.io");
        assert_eq!(form.request_recovery().unwrap(), "ops@x.io");
    }

    fn filled_registration() -> RegisterForm {
        let mut form = RegisterForm::new(&auth());
        form.full_name.set("Ada Lovelace");
        form.email.set("ada@example.com");
        form.password.set("analytical");
        form.confirm.set("analytical");
        form.terms_accepted = true;
        form
    }

    #[test]
    fn test_registration_mismatch() {
        let mut form = filled_registration();
        form.confirm.set("analytica1");
        let mismatch = FormError::PasswordMismatch {
            subject: PasswordSubject::Account,
        };
        assert_eq!(form.submit(), Err(mismatch.clone()));
        assert!(!form.processing);
        assert_eq!(form.error, Some(mismatch));
    }

    #[test]
    fn test_registration_terms_checked_last() {
        let mut form = filled_registration();
        form.terms_accepted = false;
        assert_eq!(form.submit(), Err(FormError::TermsNotAccepted));
        form.password.set("short");
        form.confirm.set("short");
        assert_eq!(
            form.submit(),
            Err(FormError::PasswordTooShort {
                subject: PasswordSubject::Account,
                min: 8
            })
        );
    }

    #[test]
    fn test_registration_accepts_weak_but_long_password() {
        let mut form = filled_registration();
        let registration = form.submit().unwrap();
        assert_eq!(registration.name, "Ada Lovelace");
        assert!(form.processing);
        assert!(form.focused_input().is_none());
    }

    #[test]
    fn test_password_change_requires_strong_password() {
        let mut form = PasswordChangeForm::new(
            PasswordChangeMode::Gate {
                user_name: "Sarah Smith".into(),
            },
            &auth(),
        );
        form.email.set("hr@demo.com");
        form.new_password.set("abcdefgh");
        form.confirm.set("abcdefgh");
        assert_eq!(form.submit(), Err(FormError::PasswordTooWeak { score: 25 }));

        form.new_password.set("Abcdefgh1!");
        assert_eq!(
            form.submit().map_err(|e| e.to_string()),
            Err("New passwords do not match".to_string())
        );

        form.confirm.set("Abcdefgh1!");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.processing);
        assert!(form.error.is_none());
    }
}
