use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::app::action::Action;
use crate::app::event::TimerId;
use crate::app::timer::Transition;
use crate::auth::forms::{LoginForm, PasswordChangeForm, PasswordChangeMode, RegisterForm};
use crate::auth::{SessionRouter, View};
use crate::config::AppConfig;
use crate::dashboard::*;
use crate::notify::{Notice, Notifications};

/// The mounted top-level screen. Replacing it drops every form and view
/// state the old screen held.
pub enum Screen {
    Login {
        form: LoginForm,
        /// "Forgot password?" dialog over the login form.
        recovery: Option<PasswordChangeForm>,
    },
    Register(RegisterForm),
    PasswordGate(PasswordChangeForm),
    Dashboard(Dashboard),
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Screen::Login { .. } => View::Login,
            Screen::Register(_) => View::Register,
            Screen::PasswordGate(_) => View::PasswordGate,
            Screen::Dashboard(dashboard) => View::Dashboard(dashboard.role()),
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub router: SessionRouter,
    pub screen: Screen,
    pub notifications: Notifications,
    pub pending_transitions: HashMap<TimerId, Transition>,
    pub next_timer_id: TimerId,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let router = SessionRouter::new(config.auth.accounts.clone());
        let screen = Screen::Login {
            form: LoginForm::new(&config.auth),
            recovery: None,
        };
        let notifications = Notifications::new(config.ui.max_toasts);
        Self {
            config,
            router,
            screen,
            notifications,
            pending_transitions: HashMap::new(),
            next_timer_id: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// The config file was unreadable and the app is running on defaults.
    pub fn report_config_error(&mut self, error: &anyhow::Error) {
        let detail = format!("{:#}", error);
        tracing::warn!(error = %detail, "config not loaded, using defaults");
        self.notifications.push(
            Notice::error("Config not loaded, using defaults").with_description(detail),
            Instant::now(),
        );
        self.dirty = true;
    }

    pub fn allocate_timer_id(&mut self) -> TimerId {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        id
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.config.auth.processing_delay_ms)
    }

    /// Register a deferred transition and ask the loop to start its timer.
    pub fn schedule(&mut self, transition: Transition) -> Action {
        let id = self.allocate_timer_id();
        self.pending_transitions.insert(id, transition);
        Action::ScheduleTransition {
            id,
            delay: self.processing_delay(),
        }
    }

    /// Forget every pending transition; the returned actions stop the timers.
    pub fn cancel_pending(&mut self) -> Vec<Action> {
        let mut ids: Vec<_> = self.pending_transitions.drain().map(|(id, _)| id).collect();
        ids.sort_unstable();
        ids.into_iter()
            .map(|id| Action::CancelTransition { id })
            .collect()
    }

    /// Mount the screen the router asks for if it is not already mounted.
    /// Tearing a screen down cancels its pending transitions.
    pub fn sync_screen(&mut self) -> Vec<Action> {
        let view = self.router.view();
        if self.screen.view() == view {
            return vec![];
        }
        let actions = self.cancel_pending();
        self.screen = self.mount(view);
        self.dirty = true;
        actions
    }

    fn mount(&self, view: View) -> Screen {
        let auth = &self.config.auth;
        match view {
            View::Login => Screen::Login {
                form: LoginForm::new(auth),
                recovery: None,
            },
            View::Register => Screen::Register(RegisterForm::new(auth)),
            View::PasswordGate => {
                let (name, email) = self
                    .router
                    .pending_user()
                    .map(|u| (u.name.clone(), u.email.clone()))
                    .unwrap_or_default();
                let mut form =
                    PasswordChangeForm::new(PasswordChangeMode::Gate { user_name: name }, auth);
                form.email.set(&email);
                Screen::PasswordGate(form)
            }
            View::Dashboard(role) => Screen::Dashboard(Dashboard::for_role(role)),
        }
    }

    /// Key hints for the status bar.
    pub fn status_line(&self) -> String {
        let hints = match &self.screen {
            Screen::Login {
                recovery: Some(_), ..
            }
            | Screen::PasswordGate(_) => "Tab next field  Enter submit  Esc close",
            Screen::Login { .. } => {
                "Tab next field  Space remember me  Enter sign in  F1-F3 demo  F4 forgot password  F5 register"
            }
            Screen::Register(_) => "Tab next field  Space accept terms  Enter create account  Esc back",
            Screen::Dashboard(dashboard) => match dashboard.pane() {
                Pane::Sidebar => "↑/↓ section  Enter open  Ctrl+L logout  Ctrl+C quit",
                Pane::Content => content_hints(dashboard),
            },
        };
        match self.router.current_user() {
            Some(user) => format!("{} ({})  |  {}", user.name, user.role, hints),
            None => hints.to_string(),
        }
    }
}

fn content_hints(dashboard: &Dashboard) -> &'static str {
    match dashboard {
        Dashboard::Candidate(shell) => match shell.content {
            CandidateContent::Jobs(_) => {
                "Tab focus  ←/→ adjust  ↑/↓ select  Enter apply  Ctrl+S save  Ctrl+R clear  Esc menu"
            }
            CandidateContent::Applications(_) => "←/→ tab  ↑/↓ select  Esc menu",
            CandidateContent::Profile(_) => {
                "Ctrl+E edit  Tab field  Enter add skill  Del remove skill  Ctrl+S save  Ctrl+U resume  Esc menu"
            }
            CandidateContent::Settings => "Esc menu  Ctrl+L logout",
        },
        Dashboard::Hr(shell) => match shell.content {
            HrContent::Home(_) => {
                "Tab focus  Enter analytics  Ctrl+N new vacancy  Ctrl+K candidates  Ctrl+R clear  Esc menu"
            }
            HrContent::Wizard(_) => {
                "Tab field  ←/→ choose  Space toggle  Ctrl+N next  Ctrl+P back  Ctrl+S create  Esc menu"
            }
            HrContent::Candidates(_) => {
                "Tab focus  ←/→ adjust  Space toggle status  ↑/↓ select  Ctrl+R clear  Esc menu"
            }
            HrContent::Analytics => "Enter view all candidates  Esc menu",
            HrContent::Templates | HrContent::Settings => "Esc menu  Ctrl+L logout",
        },
        Dashboard::Admin(shell) => match shell.content {
            AdminContent::Users(_) => {
                "Space select  Ctrl+A all  Ctrl+T activate  Ctrl+D deactivate  Ctrl+X delete  Ctrl+R clear  Esc menu"
            }
            _ => "Esc menu  Ctrl+L logout",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::notify::ToastKind;

    #[test]
    fn test_starts_on_login() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.screen.view(), View::Login);
        assert!(state.router.current_user().is_none());
    }

    #[test]
    fn test_config_error_becomes_error_toast() {
        let mut state = AppState::new(AppConfig::default());
        let error = anyhow::anyhow!("expected `]`").context("Failed to parse config file a.toml");
        state.report_config_error(&error);
        let toast = state.notifications.visible().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Config not loaded, using defaults");
        assert!(toast.description.as_deref().unwrap().contains("a.toml"));
    }

    #[test]
    fn test_sync_mounts_dashboard_and_cancels_pending() {
        let mut state = AppState::new(AppConfig::default());
        let scheduled = state.schedule(Transition::FinishRecovery);
        assert!(matches!(scheduled, Action::ScheduleTransition { id: 0, .. }));

        state.router.login("candidate@demo.com", "demo123", None);
        let actions = state.sync_screen();
        assert_eq!(actions, vec![Action::CancelTransition { id: 0 }]);
        assert_eq!(state.screen.view(), View::Dashboard(Role::Candidate));
        assert!(state.pending_transitions.is_empty());
        assert!(state.sync_screen().is_empty());
    }

    #[test]
    fn test_status_line_names_signed_in_user() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.status_line().starts_with("Tab next field"));
        state.router.login("candidate@demo.com", "demo123", None);
        state.sync_screen();
        assert!(state.status_line().starts_with("John Doe (Candidate)  |  "));
    }

    #[test]
    fn test_gate_form_carries_pending_email() {
        let mut state = AppState::new(AppConfig::default());
        state.router.login("hr@demo.com", "demo123", None);
        state.sync_screen();
        match &state.screen {
            Screen::PasswordGate(form) => {
                assert_eq!(form.email.value(), "hr@demo.com");
                assert_eq!(
                    form.mode,
                    PasswordChangeMode::Gate {
                        user_name: "Sarah Smith".to_string()
                    }
                );
            }
            _ => panic!("gate not mounted"),
        }
    }
}
