use crate::notify::{Notifications, ToastKind};
use crate::ui::theme::Theme;
use crate::ui::widgets::truncate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const TOAST_WIDTH: u16 = 44;

/// Stack toasts in the top-right corner, newest on top.
pub fn render(frame: &mut Frame, notifications: &Notifications) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in notifications.visible() {
        let height = if toast.description.is_some() { 4 } else { 3 };
        if y + height > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, height);
        frame.render_widget(Clear, rect);

        let icon = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Info => "i",
            ToastKind::Error => "✗",
        };
        let room = width.saturating_sub(6) as usize;
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", icon), Theme::toast(toast.kind)),
            Span::styled(truncate(&toast.title, room), Theme::title()),
        ])];
        if let Some(description) = &toast.description {
            lines.push(Line::from(Span::styled(
                format!("  {}", truncate(description, room)),
                Theme::muted(),
            )));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::toast(toast.kind))
            .style(Style::default().bg(Theme::BG_SURFACE));
        frame.render_widget(Paragraph::new(lines).block(block), rect);
        y += height;
    }
}
