mod admin;
mod auth;
mod candidate;
mod hr;
mod layout;
mod shell;
mod status_bar;
mod theme;
mod toast;
mod widgets;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;

/// Draw whatever screen is mounted, then the toast stack on top.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match &state.screen {
        Screen::Login { form, recovery } => {
            let (card, status) = layout::compute_card_layout(area, 72, 20);
            auth::render_login(frame, card, state, form, recovery.as_ref());
            status_bar::render(frame, status, state);
        }
        Screen::Register(form) => {
            let (card, status) = layout::compute_card_layout(area, 72, 17);
            auth::render_register(frame, card, form);
            status_bar::render(frame, status, state);
        }
        Screen::PasswordGate(form) => {
            let (card, status) = layout::compute_card_layout(area, 72, 17);
            auth::render_password_change(frame, card, form);
            status_bar::render(frame, status, state);
        }
        Screen::Dashboard(dashboard) => {
            let shell_layout = layout::compute_shell_layout(area);
            shell::render(frame, &shell_layout, state, dashboard);
        }
    }

    toast::render(frame, &state.notifications);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::app::handler::handle_event;
    use crate::config::AppConfig;
    use crate::notify::Notice;
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn press(state: &mut AppState, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)));
    }

    fn press_ctrl(state: &mut AppState, c: char) {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)));
    }

    fn sign_in(demo: u8) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::F(demo));
        press(&mut state, KeyCode::Enter);
        state
    }

    #[test]
    fn test_login_screen_renders() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("Sign in"));
        assert!(screen.contains("candidate@demo.com"));
        assert!(screen.contains("Remember me"));
    }

    #[test]
    fn test_register_screen_renders() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::F(5));
        let screen = draw(&state);
        assert!(screen.contains("Create account"));
        assert!(screen.contains("Terms & Conditions"));
    }

    #[test]
    fn test_password_gate_renders_user_name() {
        let state = sign_in(2);
        let screen = draw(&state);
        assert!(screen.contains("Change your password"));
        assert!(screen.contains("Sarah Smith"));
    }

    #[test]
    fn test_candidate_dashboard_renders_job_board() {
        let state = sign_in(1);
        let screen = draw(&state);
        assert!(screen.contains("Job Board"));
        assert!(screen.contains("John Doe"));
        assert!(screen.contains("Find your next role"));
    }

    #[test]
    fn test_hr_dashboard_renders_after_gate() {
        let mut state = sign_in(2);
        state.router.complete_password_change();
        state.sync_screen();
        let screen = draw(&state);
        assert!(screen.contains("My Vacancies"));
        assert!(screen.contains("Active Vacancies"));
    }

    #[test]
    fn test_admin_dashboard_renders_metrics() {
        let mut state = sign_in(3);
        state.router.complete_password_change();
        state.sync_screen();
        let screen = draw(&state);
        assert!(screen.contains("System Metrics"));
        assert!(screen.contains("CPU Usage"));
    }

    #[test]
    fn test_every_section_draws() {
        for demo in 1..=3 {
            let mut state = sign_in(demo);
            state.router.complete_password_change();
            state.sync_screen();
            let (labels, _) = match &state.screen {
                Screen::Dashboard(dashboard) => dashboard.menu(),
                _ => panic!("dashboard not mounted"),
            };
            for _ in 0..labels.len() {
                press(&mut state, KeyCode::Down);
                draw(&state);
            }
        }
    }

    #[test]
    fn test_profile_shows_experience_summaries() {
        let mut state = sign_in(1);
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Up);
        let screen = draw(&state);
        assert!(screen.contains("My Profile"));
        assert!(screen.contains("Led development of"));
        assert!(screen.contains("Education"));
    }

    #[test]
    fn test_wizard_criteria_show_requirement() {
        let mut state = sign_in(2);
        state.router.complete_password_change();
        state.sync_screen();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        press_ctrl(&mut state, 'n');
        let screen = draw(&state);
        assert!(screen.contains("Skills  (required)"));
    }

    #[test]
    fn test_toast_overlay_shows_title() {
        let mut state = AppState::new(AppConfig::default());
        state
            .notifications
            .push(Notice::success("Job saved!"), Instant::now());
        let screen = draw(&state);
        assert!(screen.contains("Job saved!"));
    }
}
