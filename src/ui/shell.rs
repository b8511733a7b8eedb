use crate::app::state::AppState;
use crate::dashboard::*;
use crate::ui::layout::ShellLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::{panel, placeholder};
use crate::ui::{admin, candidate, hr, status_bar};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, layout: &ShellLayout, state: &AppState, dashboard: &Dashboard) {
    render_header(frame, layout.header, state, dashboard);
    render_sidebar(frame, layout.sidebar, dashboard);
    render_content(frame, layout.content, dashboard);
    status_bar::render(frame, layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, dashboard: &Dashboard) {
    let block = panel("TalentDesk", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (items, selected) = dashboard.menu();
    let section = items.get(selected).copied().unwrap_or_default();
    let mut spans = vec![Span::styled(section.to_string(), Theme::title())];

    if let Some(user) = state.router.current_user() {
        let badge = format!(" {} ", user.role.label());
        let used = section.chars().count() + user.name.chars().count() + badge.chars().count() + 2;
        let gap = (inner.width as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(user.name.clone(), Theme::text()));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            badge,
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_PURPLE)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_sidebar(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let focused = dashboard.pane() == Pane::Sidebar;
    let (items, selected) = dashboard.menu();
    let items: Vec<ListItem> = items
        .into_iter()
        .map(|label| ListItem::new(Span::styled(label, Theme::text())))
        .collect();

    let highlight = if focused {
        Theme::selected_row()
    } else {
        Theme::label_focused()
    };
    let list = List::new(items)
        .block(panel("Menu", focused))
        .highlight_style(highlight)
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_content(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let focused = dashboard.pane() == Pane::Content;
    match dashboard {
        Dashboard::Candidate(shell) => match &shell.content {
            CandidateContent::Profile(profile) => {
                candidate::render_profile(frame, area, profile, focused)
            }
            CandidateContent::Applications(view) => {
                candidate::render_applications(frame, area, view, focused)
            }
            CandidateContent::Jobs(board) => candidate::render_job_board(frame, area, board, focused),
            CandidateContent::Settings => {
                placeholder(frame, area, shell.section().label(), focused)
            }
        },
        Dashboard::Hr(shell) => match &shell.content {
            HrContent::Home(table) => hr::render_home(frame, area, table, focused),
            HrContent::Wizard(wizard) => hr::render_wizard(frame, area, wizard, focused),
            HrContent::Candidates(list) => hr::render_candidates(frame, area, list, focused),
            HrContent::Analytics => hr::render_analytics(frame, area, focused),
            HrContent::Templates | HrContent::Settings => {
                placeholder(frame, area, shell.section().label(), focused)
            }
        },
        Dashboard::Admin(shell) => match &shell.content {
            AdminContent::Home => admin::render_home(frame, area, focused),
            AdminContent::Users(users) => admin::render_users(frame, area, users, focused),
            AdminContent::Logs | AdminContent::Settings => {
                placeholder(frame, area, shell.section().label(), focused)
            }
        },
    }
}
