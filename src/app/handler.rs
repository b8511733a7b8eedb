use crate::app::action::Action;
use crate::app::event::{AppEvent, TimerId};
use crate::app::state::*;
use crate::app::timer::Transition;
use crate::auth::forms::{LoginField, PasswordChangeForm, PasswordChangeMode, RegisterField};
use crate::dashboard::*;
use crate::input::{FocusOrder, TextInput};
use crate::notify::Notice;
use crate::views::candidates::CandidateFocus;
use crate::views::job_board::JobBoardFocus;
use crate::views::profile::ProfileField;
use crate::views::tags::TagEditor;
use crate::views::users::{BulkAction, UserFocus};
use crate::views::vacancies::VacancyFocus;
use crate::views::wizard::{BasicField, CriteriaField, WizardStep};
use crate::views::{
    CandidateList, JobBoard, MyApplications, MyProfile, UserManagement, VacancyTable, VacancyWizard,
};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::TransitionDue { id } => handle_transition(state, id),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    let ttl = Duration::from_secs(state.config.ui.toast_duration_secs);
    if state.notifications.expire(Instant::now(), ttl) {
        state.dirty = true;
    }
}

fn handle_transition(state: &mut AppState, id: TimerId) -> Vec<Action> {
    let Some(transition) = state.pending_transitions.remove(&id) else {
        tracing::debug!(id, "stale transition ignored");
        return vec![];
    };
    tracing::debug!(id, ?transition, "transition fired");
    state.dirty = true;
    match transition {
        Transition::FinishRegistration(registration) => {
            state.router.register(registration);
            let mut actions = state.sync_screen();
            actions.push(Action::Notify(Notice::success("Account created successfully!")));
            actions
        }
        Transition::FinishFirstLogin => {
            if !state.router.complete_password_change() {
                return vec![];
            }
            let mut actions = state.sync_screen();
            actions.push(Action::Notify(Notice::success("Password changed successfully")));
            actions
        }
        Transition::FinishRecovery => {
            if let Screen::Login { recovery, .. } = &mut state.screen {
                *recovery = None;
            }
            vec![Action::Notify(Notice::success("Password changed successfully"))]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if is_ctrl(&key, 'c') {
        return vec![Action::Quit];
    }

    match state.screen {
        Screen::Login { .. } => handle_login_key(state, key),
        Screen::Register(_) => handle_register_key(state, key),
        Screen::PasswordGate(_) => handle_gate_key(state, key),
        Screen::Dashboard(_) => handle_dashboard_key(state, key),
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Line editing shared by every text field. Returns whether the key was used.
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => input.delete_word_back(),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Tab / Shift+Tab focus cycling. Returns whether the key was used.
fn cycle_focus<F: FocusOrder>(focus: &mut F, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => *focus = focus.next(),
        KeyCode::BackTab => *focus = focus.prev(),
        _ => return false,
    }
    true
}

fn notify(notice: Option<Notice>) -> Vec<Action> {
    notice.map(Action::Notify).into_iter().collect()
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if let KeyCode::F(n @ 1..=3) = key.code {
        let account = state.router.accounts().get(usize::from(n) - 1).cloned();
        if let (Some(account), Screen::Login { form, .. }) = (account, &mut state.screen) {
            form.fill_demo(&account);
        }
        return vec![];
    }
    if key.code == KeyCode::F(5) {
        state.router.show_register();
        return state.sync_screen();
    }

    let AppState { screen, config, router, .. } = state;
    let Screen::Login { form, recovery } = screen else {
        return vec![];
    };

    if let Some(dialog) = recovery {
        if key.code == KeyCode::Esc {
            if !dialog.processing {
                *recovery = None;
            }
            return vec![];
        }
        if drive_password_form(dialog, key) {
            return vec![state.schedule(Transition::FinishRecovery)];
        }
        return vec![];
    }

    if key.code == KeyCode::F(4) {
        if let Ok(email) = form.request_recovery() {
            let mut dialog = PasswordChangeForm::new(PasswordChangeMode::Recovery, &config.auth);
            dialog.email.set(&email);
            dialog.focus = dialog.focus.next();
            *recovery = Some(dialog);
        }
        return vec![];
    }
    if cycle_focus(&mut form.focus, &key) {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => {
            if let Ok(credentials) = form.submit() {
                router.login(
                    &credentials.email,
                    &credentials.password,
                    credentials.selected_role,
                );
                return state.sync_screen();
            }
        }
        KeyCode::Char(' ') if form.focus == LoginField::RememberMe => {
            form.remember_me = !form.remember_me;
        }
        _ => {
            if let Some(input) = form.focused_input() {
                edit_text(input, key);
            }
        }
    }
    vec![]
}

fn handle_register_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Esc {
        state.router.show_login();
        return state.sync_screen();
    }
    let Screen::Register(form) = &mut state.screen else {
        return vec![];
    };
    if form.processing {
        return vec![];
    }
    if cycle_focus(&mut form.focus, &key) {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => {
            if let Ok(registration) = form.submit() {
                return vec![state.schedule(Transition::FinishRegistration(registration))];
            }
        }
        KeyCode::Char(' ') if form.focus == RegisterField::Terms => form.toggle_terms(),
        _ => {
            if let Some(input) = form.focused_input() {
                edit_text(input, key);
            }
        }
    }
    vec![]
}

fn handle_gate_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Screen::PasswordGate(form) = &mut state.screen else {
        return vec![];
    };
    if key.code == KeyCode::Esc {
        if form.processing {
            return vec![];
        }
        // Closing the gate abandons the pending sign-in.
        state.router.logout();
        return state.sync_screen();
    }
    if drive_password_form(form, key) {
        return vec![state.schedule(Transition::FinishFirstLogin)];
    }
    vec![]
}

/// Returns `true` when the form was submitted and accepted.
fn drive_password_form(form: &mut PasswordChangeForm, key: KeyEvent) -> bool {
    if form.processing || cycle_focus(&mut form.focus, &key) {
        return false;
    }
    if key.code == KeyCode::Enter {
        return form.submit().is_ok();
    }
    if let Some(input) = form.focused_input() {
        edit_text(input, key);
    }
    false
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'l') {
        state.router.logout();
        return state.sync_screen();
    }
    let Screen::Dashboard(dashboard) = &mut state.screen else {
        return vec![];
    };
    match dashboard.pane() {
        Pane::Sidebar => {
            match key.code {
                KeyCode::Up => dashboard.select_prev_section(),
                KeyCode::Down => dashboard.select_next_section(),
                KeyCode::Enter | KeyCode::Right | KeyCode::Tab => dashboard.set_pane(Pane::Content),
                _ => {}
            }
            vec![]
        }
        Pane::Content => {
            if key.code == KeyCode::Esc {
                dashboard.set_pane(Pane::Sidebar);
                return vec![];
            }
            match dashboard {
                Dashboard::Candidate(shell) => candidate_key(shell, key),
                Dashboard::Hr(shell) => hr_key(shell, key),
                Dashboard::Admin(shell) => admin_key(shell, key),
            }
        }
    }
}

fn candidate_key(shell: &mut Shell<CandidateSection>, key: KeyEvent) -> Vec<Action> {
    match &mut shell.content {
        CandidateContent::Profile(profile) => profile_key(profile, key),
        CandidateContent::Applications(applications) => applications_key(applications, key),
        CandidateContent::Jobs(board) => job_board_key(board, key),
        CandidateContent::Settings => vec![],
    }
}

fn hr_key(shell: &mut Shell<HrSection>, key: KeyEvent) -> Vec<Action> {
    let (actions, goto) = match &mut shell.content {
        HrContent::Home(table) => vacancy_table_key(table, key),
        HrContent::Wizard(wizard) => (wizard_key(wizard, key), None),
        HrContent::Candidates(list) => (candidate_list_key(list, key), None),
        HrContent::Analytics if key.code == KeyCode::Enter => (vec![], Some(HrSection::Candidates)),
        HrContent::Analytics | HrContent::Templates | HrContent::Settings => (vec![], None),
    };
    if let Some(section) = goto {
        shell.select(section);
        shell.pane = Pane::Content;
    }
    actions
}

fn admin_key(shell: &mut Shell<AdminSection>, key: KeyEvent) -> Vec<Action> {
    match &mut shell.content {
        AdminContent::Users(users) => users_key(users, key),
        AdminContent::Home | AdminContent::Logs | AdminContent::Settings => vec![],
    }
}

fn tag_editor_key(editor: &mut TagEditor, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => editor.highlight_prev(),
        KeyCode::Right | KeyCode::Down => editor.highlight_next(),
        KeyCode::Delete | KeyCode::Backspace => editor.remove_highlighted(),
        _ => {}
    }
}

fn profile_key(profile: &mut MyProfile, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'e') {
        profile.start_editing();
        return vec![];
    }
    if is_ctrl(&key, 's') {
        return notify(profile.save());
    }
    if is_ctrl(&key, 'u') {
        return vec![Action::Notify(profile.upload_resume())];
    }
    if !profile.editing || cycle_focus(&mut profile.focus, &key) {
        return vec![];
    }
    match profile.focus {
        ProfileField::NewSkill if key.code == KeyCode::Enter => {
            profile.skills.add_draft();
        }
        ProfileField::Skills => tag_editor_key(&mut profile.skills, key),
        _ => {
            if let Some(input) = profile.focused_input() {
                edit_text(input, key);
            }
        }
    }
    vec![]
}

fn applications_key(view: &mut MyApplications, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Right | KeyCode::Tab => view.next_tab(),
        KeyCode::Left | KeyCode::BackTab => view.prev_tab(),
        KeyCode::Down => view.list.select_next(),
        KeyCode::Up => view.list.select_prev(),
        _ => {}
    }
    vec![]
}

fn job_board_key(board: &mut JobBoard, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'r') {
        board.list.clear_filters();
        return vec![];
    }
    if is_ctrl(&key, 's') {
        return notify(board.toggle_save_selected());
    }
    if cycle_focus(&mut board.focus, &key) {
        return vec![];
    }
    let criteria = &mut board.list.criteria;
    match (board.focus, key.code) {
        (JobBoardFocus::Search, _) => {
            edit_text(&mut criteria.search, key);
        }
        (JobBoardFocus::Location, KeyCode::Right) => criteria.location.next(),
        (JobBoardFocus::Location, KeyCode::Left) => criteria.location.prev(),
        (JobBoardFocus::Experience, KeyCode::Right) => criteria.experience.next(),
        (JobBoardFocus::Experience, KeyCode::Left) => criteria.experience.prev(),
        (JobBoardFocus::SalaryMin, KeyCode::Right) => criteria.salary.raise_min(),
        (JobBoardFocus::SalaryMin, KeyCode::Left) => criteria.salary.lower_min(),
        (JobBoardFocus::SalaryMax, KeyCode::Right) => criteria.salary.raise_max(),
        (JobBoardFocus::SalaryMax, KeyCode::Left) => criteria.salary.lower_max(),
        (JobBoardFocus::Results, KeyCode::Down) => board.list.select_next(),
        (JobBoardFocus::Results, KeyCode::Up) => board.list.select_prev(),
        (JobBoardFocus::Results, KeyCode::Enter) => return notify(board.apply_selected()),
        _ => {}
    }
    vec![]
}

fn vacancy_table_key(table: &mut VacancyTable, key: KeyEvent) -> (Vec<Action>, Option<HrSection>) {
    if is_ctrl(&key, 'n') {
        return (vec![], Some(HrSection::Vacancies));
    }
    if is_ctrl(&key, 'k') {
        return (vec![], Some(HrSection::Candidates));
    }
    if is_ctrl(&key, 'r') {
        table.list.clear_filters();
        return (vec![], None);
    }
    if cycle_focus(&mut table.focus, &key) {
        return (vec![], None);
    }
    match (table.focus, key.code) {
        (VacancyFocus::Search, _) => {
            edit_text(&mut table.list.criteria.search, key);
        }
        (VacancyFocus::Status, KeyCode::Right) => table.list.criteria.status.next(),
        (VacancyFocus::Status, KeyCode::Left) => table.list.criteria.status.prev(),
        (VacancyFocus::Results, KeyCode::Down) => table.list.select_next(),
        (VacancyFocus::Results, KeyCode::Up) => table.list.select_prev(),
        (VacancyFocus::Results, KeyCode::Enter) if table.list.selected().is_some() => {
            return (vec![], Some(HrSection::Analytics));
        }
        _ => {}
    }
    (vec![], None)
}

fn wizard_key(wizard: &mut VacancyWizard, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'n') {
        wizard.next();
        return vec![];
    }
    if is_ctrl(&key, 'p') {
        wizard.previous();
        return vec![];
    }
    if is_ctrl(&key, 's') {
        return notify(wizard.submit().map(|(_, notice)| notice));
    }
    match key.code {
        KeyCode::Tab => {
            wizard.focus_next();
            return vec![];
        }
        KeyCode::BackTab => {
            wizard.focus_prev();
            return vec![];
        }
        _ => {}
    }
    match wizard.step {
        WizardStep::BasicDetails => match (wizard.basic_focus, key.code) {
            (BasicField::Department, KeyCode::Right) => wizard.department.next(),
            (BasicField::Department, KeyCode::Left) => wizard.department.prev(),
            (BasicField::SaveTemplate, KeyCode::Char(' ')) => {
                wizard.save_as_template = !wizard.save_as_template
            }
            (BasicField::Title | BasicField::Description, _) => wizard_text(wizard, key),
            _ => {}
        },
        WizardStep::ScreeningCriteria => match (wizard.criteria_focus, key.code) {
            (CriteriaField::NewSkill, KeyCode::Enter) => {
                wizard.skills.add_draft();
            }
            (CriteriaField::NewSkill | CriteriaField::Years, _) => wizard_text(wizard, key),
            (CriteriaField::Skills, _) => tag_editor_key(&mut wizard.skills, key),
            (CriteriaField::SkillsRequired, KeyCode::Char(' ')) => {
                wizard.skills_requirement.toggle()
            }
            (CriteriaField::ExperienceLevel, KeyCode::Right) => wizard.experience_level.next(),
            (CriteriaField::ExperienceLevel, KeyCode::Left) => wizard.experience_level.prev(),
            (CriteriaField::ExperienceRequired, KeyCode::Char(' ')) => {
                wizard.experience_requirement.toggle()
            }
            (CriteriaField::Education, KeyCode::Right | KeyCode::Down) => {
                wizard.education_cursor = (wizard.education_cursor + 1) % wizard.education.len();
            }
            (CriteriaField::Education, KeyCode::Left | KeyCode::Up) => {
                let len = wizard.education.len();
                wizard.education_cursor = (wizard.education_cursor + len - 1) % len;
            }
            (CriteriaField::Education, KeyCode::Char(' ')) => {
                wizard.toggle_education(wizard.education_cursor)
            }
            (CriteriaField::EducationRequired, KeyCode::Char(' ')) => {
                wizard.education_requirement.toggle()
            }
            (CriteriaField::SaveTemplate, KeyCode::Char(' ')) => {
                wizard.save_as_template = !wizard.save_as_template
            }
            _ => {}
        },
    }
    vec![]
}

/// Typed characters go through the wizard so the years field can reject
/// non-digits; everything else is plain line editing.
fn wizard_text(wizard: &mut VacancyWizard, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => wizard.type_char(c),
        _ => {
            if let Some(input) = wizard.focused_input() {
                edit_text(input, key);
            }
        }
    }
}

fn candidate_list_key(view: &mut CandidateList, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'r') {
        view.list.clear_filters();
        return vec![];
    }
    if cycle_focus(&mut view.focus, &key) {
        return vec![];
    }
    let criteria = &mut view.list.criteria;
    match (view.focus, key.code) {
        (CandidateFocus::Search, _) => {
            edit_text(&mut criteria.search, key);
        }
        (CandidateFocus::MinScore, KeyCode::Right) => criteria.match_score.raise_min(),
        (CandidateFocus::MinScore, KeyCode::Left) => criteria.match_score.lower_min(),
        (CandidateFocus::MaxScore, KeyCode::Right) => criteria.match_score.raise_max(),
        (CandidateFocus::MaxScore, KeyCode::Left) => criteria.match_score.lower_max(),
        (CandidateFocus::Status, KeyCode::Right) => view.move_status_cursor(true),
        (CandidateFocus::Status, KeyCode::Left) => view.move_status_cursor(false),
        (CandidateFocus::Status, KeyCode::Char(' ')) => view.toggle_highlighted_status(),
        (CandidateFocus::Results, KeyCode::Down) => view.list.select_next(),
        (CandidateFocus::Results, KeyCode::Up) => view.list.select_prev(),
        _ => {}
    }
    vec![]
}

fn users_key(view: &mut UserManagement, key: KeyEvent) -> Vec<Action> {
    if is_ctrl(&key, 'r') {
        view.list.clear_filters();
        return vec![];
    }
    if is_ctrl(&key, 'a') {
        view.toggle_all();
        return vec![];
    }
    let bulk = if is_ctrl(&key, 't') {
        Some(BulkAction::Activate)
    } else if is_ctrl(&key, 'd') {
        Some(BulkAction::Deactivate)
    } else if is_ctrl(&key, 'x') {
        Some(BulkAction::Delete)
    } else {
        None
    };
    if let Some(action) = bulk {
        return notify(view.apply_bulk(action));
    }
    if cycle_focus(&mut view.focus, &key) {
        return vec![];
    }
    let criteria = &mut view.list.criteria;
    match (view.focus, key.code) {
        (UserFocus::Search, _) => {
            edit_text(&mut criteria.search, key);
        }
        (UserFocus::Role, KeyCode::Right) => criteria.role.next(),
        (UserFocus::Role, KeyCode::Left) => criteria.role.prev(),
        (UserFocus::Status, KeyCode::Right) => criteria.status.next(),
        (UserFocus::Status, KeyCode::Left) => criteria.status.prev(),
        (UserFocus::Results, KeyCode::Down) => view.list.select_next(),
        (UserFocus::Results, KeyCode::Up) => view.list.select_prev(),
        (UserFocus::Results, KeyCode::Char(' ')) => view.toggle_highlighted(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::PasswordSubject;
    use crate::auth::{FormError, Role, View};
    use crate::config::AppConfig;

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(event)))
    }

    fn ctrl(state: &mut AppState, c: char) -> Vec<Action> {
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        handle_event(state, AppEvent::Terminal(CEvent::Key(event)))
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    fn scheduled_id(actions: &[Action]) -> TimerId {
        actions
            .iter()
            .find_map(|a| match a {
                Action::ScheduleTransition { id, .. } => Some(*id),
                _ => None,
            })
            .expect("no transition scheduled")
    }

    #[test]
    fn test_candidate_demo_login_reaches_dashboard() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(1));
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.screen.view(), View::Dashboard(Role::Candidate));
        let user = state.router.current_user().unwrap();
        assert_eq!(user.name, "John Doe");
        assert!(!user.is_first_login);
    }

    #[test]
    fn test_first_login_gate_completes_after_transition() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(2));
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.screen.view(), View::PasswordGate);
        assert!(state.router.pending_user().unwrap().is_first_login);

        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "Abcdefgh1!");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "Abcdefgh1!");
        let actions = key(&mut state, KeyCode::Enter);
        let id = scheduled_id(&actions);
        assert_eq!(state.screen.view(), View::PasswordGate);

        let actions = handle_event(&mut state, AppEvent::TransitionDue { id });
        assert!(actions.iter().any(|a| matches!(a, Action::Notify(_))));
        assert_eq!(state.screen.view(), View::Dashboard(Role::HrManager));
        assert!(!state.router.current_user().unwrap().is_first_login);
    }

    #[test]
    fn test_weak_gate_password_is_rejected() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(3));
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "abcdefgh");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "abcdefgh");
        let actions = key(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        match &state.screen {
            Screen::PasswordGate(form) => {
                assert_eq!(form.error, Some(FormError::PasswordTooWeak { score: 25 }));
            }
            _ => panic!("gate not mounted"),
        }
    }

    #[test]
    fn test_closing_gate_abandons_sign_in() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(2));
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::Esc);
        assert_eq!(state.screen.view(), View::Login);
        assert!(state.router.pending_user().is_none());
    }

    #[test]
    fn test_register_mismatch_creates_no_session() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(5));
        type_str(&mut state, "Jane Doe");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "jane@x.io");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password1");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password2");
        let actions = key(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        match &state.screen {
            Screen::Register(form) => assert_eq!(
                form.error,
                Some(FormError::PasswordMismatch {
                    subject: PasswordSubject::Account
                })
            ),
            _ => panic!("register not mounted"),
        }
        assert!(state.router.current_user().is_none());
    }

    #[test]
    fn test_leaving_register_cancels_processing() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(5));
        type_str(&mut state, "Jane Doe");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "jane@x.io");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password1");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password1");
        key(&mut state, KeyCode::Tab);
        key(&mut state, KeyCode::Char(' '));
        let id = scheduled_id(&key(&mut state, KeyCode::Enter));

        let actions = key(&mut state, KeyCode::Esc);
        assert_eq!(actions, vec![Action::CancelTransition { id }]);
        assert_eq!(state.screen.view(), View::Login);

        // The timer may still fire after the cancel; it must be ignored.
        assert!(handle_event(&mut state, AppEvent::TransitionDue { id }).is_empty());
        assert!(state.router.current_user().is_none());
    }

    #[test]
    fn test_forgot_password_requires_email() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(4));
        match &state.screen {
            Screen::Login { form, recovery } => {
                assert!(recovery.is_none());
                assert_eq!(
                    form.error.as_ref().map(|e| e.to_string()).as_deref(),
                    Some("Please enter your email address first")
                );
            }
            _ => panic!("login not mounted"),
        }
        type_str(&mut state, "me@x.io");
        key(&mut state, KeyCode::F(4));
        assert!(matches!(
            &state.screen,
            Screen::Login {
                recovery: Some(_),
                ..
            }
        ));
        key(&mut state, KeyCode::Esc);
        assert!(matches!(&state.screen, Screen::Login { recovery: None, .. }));
    }

    fn notice_titles(actions: &[Action]) -> Vec<&str> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Notify(notice) => Some(notice.title.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_registration_signs_in_after_transition() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(5));
        type_str(&mut state, "Jane Doe");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "jane@x.io");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password1");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "password1");
        key(&mut state, KeyCode::Tab);
        key(&mut state, KeyCode::Char(' '));
        let id = scheduled_id(&key(&mut state, KeyCode::Enter));
        assert_eq!(state.screen.view(), View::Register);
        assert!(state.router.current_user().is_none());

        let actions = handle_event(&mut state, AppEvent::TransitionDue { id });
        assert_eq!(notice_titles(&actions), ["Account created successfully!"]);
        assert_eq!(state.screen.view(), View::Dashboard(Role::Candidate));
        let user = state.router.current_user().unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@x.io");
        assert_eq!(user.role, Role::Candidate);
        assert!(!user.is_first_login);
        assert!(state.pending_transitions.is_empty());
    }

    #[test]
    fn test_recovery_dialog_closes_after_transition() {
        let mut state = AppState::new(AppConfig::default());
        type_str(&mut state, "me@x.io");
        key(&mut state, KeyCode::F(4));
        type_str(&mut state, "Abcdefgh1!");
        key(&mut state, KeyCode::Tab);
        type_str(&mut state, "Abcdefgh1!");
        let id = scheduled_id(&key(&mut state, KeyCode::Enter));

        // Esc cannot dismiss the dialog while the change is processing.
        assert!(key(&mut state, KeyCode::Esc).is_empty());
        match &state.screen {
            Screen::Login {
                recovery: Some(dialog),
                ..
            } => {
                assert!(dialog.processing);
                assert_eq!(dialog.email.value(), "me@x.io");
            }
            _ => panic!("recovery dialog not open"),
        }

        let actions = handle_event(&mut state, AppEvent::TransitionDue { id });
        assert_eq!(notice_titles(&actions), ["Password changed successfully"]);
        assert!(matches!(&state.screen, Screen::Login { recovery: None, .. }));
        assert!(state.router.current_user().is_none());
        assert!(handle_event(&mut state, AppEvent::TransitionDue { id }).is_empty());
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(1));
        key(&mut state, KeyCode::Enter);
        ctrl(&mut state, 'l');
        assert_eq!(state.screen.view(), View::Login);
        assert!(state.router.current_user().is_none());
    }

    #[test]
    fn test_job_board_quick_apply_from_results() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(1));
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::BackTab);
        let actions = key(&mut state, KeyCode::Enter);
        match actions.as_slice() {
            [Action::Notify(notice)] => assert!(notice.title.starts_with("Applied to")),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_sidebar_navigation_remounts_section() {
        let mut state = AppState::new(AppConfig::default());
        key(&mut state, KeyCode::F(1));
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::Up);
        match &state.screen {
            Screen::Dashboard(Dashboard::Candidate(shell)) => {
                assert_eq!(shell.section(), CandidateSection::Applications);
                assert!(matches!(shell.content, CandidateContent::Applications(_)));
            }
            _ => panic!("candidate dashboard not mounted"),
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(ctrl(&mut state, 'c'), vec![Action::Quit]);
    }
}
