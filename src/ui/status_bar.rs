use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::truncate;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const APP_TAG: &str = " TalentDesk ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let width = area.width as usize;
    let room = width.saturating_sub(APP_TAG.width() + 1);
    let text = format!(" {}", truncate(&state.status_line(), room));

    // Pad to fill remaining space
    let remaining = width.saturating_sub(text.width() + APP_TAG.width());
    let line = Line::from(vec![
        Span::styled(text, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(
            APP_TAG,
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
