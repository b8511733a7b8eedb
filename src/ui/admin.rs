use crate::records::system::{ActivityKind, QUICK_STATS, RECENT_ACTIVITY, SERVICES, SYSTEM_METRICS};
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::Theme;
use crate::ui::widgets::{key_hints, panel, stat_tile, FormLines};
use crate::views::users::UserFocus;
use crate::views::UserManagement;
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Gauge, Paragraph, Row, Table, TableState};

const LABEL_WIDTH: usize = 10;

pub fn render_home(frame: &mut Frame, area: Rect, focused: bool) {
    let (tiles_area, rest) = split_top(area, 4);
    let tiles = columns(tiles_area, QUICK_STATS.len());
    for (stat, tile) in QUICK_STATS.iter().zip(tiles) {
        stat_tile(frame, tile, stat.label, stat.value, stat.note, Theme::ACCENT_BLUE);
    }

    let [metrics_area, side] = columns(rest, 2)[..] else {
        return;
    };

    let block = panel("System Metrics", focused);
    let inner = block.inner(metrics_area);
    frame.render_widget(block, metrics_area);
    for (i, metric) in SYSTEM_METRICS.iter().enumerate() {
        let y = inner.y + (i as u16) * 2;
        if y + 1 >= inner.bottom() {
            break;
        }
        let label = Line::from(vec![
            Span::styled(format!("{} ", metric.name), Theme::text()),
            Span::styled(metric.health.label(), Theme::health(metric.health)),
        ]);
        frame.render_widget(Paragraph::new(label), Rect::new(inner.x, y, inner.width, 1));
        let gauge = Gauge::default()
            .gauge_style(Theme::health(metric.health).bg(Theme::BG_SURFACE))
            .percent(metric.value.min(100));
        frame.render_widget(gauge, Rect::new(inner.x, y + 1, inner.width, 1));
    }

    let (activity_area, services_area) = split_top(side, side.height.saturating_sub(6));
    let activity: Vec<Line> = RECENT_ACTIVITY
        .iter()
        .flat_map(|entry| {
            let (icon, style) = match entry.kind {
                ActivityKind::Success => ("✓", Theme::success()),
                ActivityKind::Warning => ("!", Theme::key_hint()),
                ActivityKind::Info => ("•", Theme::header()),
            };
            [
                Line::from(vec![
                    Span::styled(format!("{} ", icon), style),
                    Span::styled(entry.action, Theme::text()),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", entry.actor, entry.when),
                    Theme::muted(),
                )),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(activity).block(panel("Recent Activity", false)),
        activity_area,
    );

    let services: Vec<Line> = SERVICES
        .iter()
        .map(|(name, up)| {
            let (dot, state) = if *up {
                (Theme::success(), "Operational")
            } else {
                (Theme::error(), "Degraded")
            };
            Line::from(vec![
                Span::styled("● ", dot),
                Span::styled(format!("{:<18}", name), Theme::text()),
                Span::styled(state, Theme::muted()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(services).block(panel("Services", false)),
        services_area,
    );
}

pub fn render_users(frame: &mut Frame, area: Rect, view: &UserManagement, focused: bool) {
    let (filters_area, table_area) = split_top(area, 7);
    let criteria = &view.list.criteria;
    let on = |f: UserFocus| focused && view.focus == f;

    let block = panel("User Management", focused && view.focus != UserFocus::Results);
    let inner = block.inner(filters_area);
    frame.render_widget(block, filters_area);
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.field("Search", &criteria.search, on(UserFocus::Search), "Name or email");
    lines.choice("Role", criteria.role.label(), on(UserFocus::Role));
    lines.choice("Status", criteria.status.label(), on(UserFocus::Status));
    lines.line(Span::styled(
        format!("{}  ·  {} selected", view.summary(), view.selection_len()),
        Theme::muted(),
    ));
    lines.line(key_hints(&[
        ("Space", "Select"),
        ("Ctrl+A", "All"),
        ("Ctrl+T", "Activate"),
        ("Ctrl+D", "Deactivate"),
        ("Ctrl+X", "Delete"),
    ]));
    lines.render(frame, inner);

    let rows: Vec<Row> = view
        .list
        .results()
        .iter()
        .map(|user| {
            let check = if view.is_selected(user) { "[x]" } else { "[ ]" };
            Row::new(vec![
                Cell::from(check),
                Cell::from(user.name),
                Cell::from(Span::styled(user.email, Theme::muted())),
                Cell::from(user.role.label()),
                Cell::from(user.status.label()),
                Cell::from(Span::styled(user.last_login, Theme::muted())),
            ])
        })
        .collect();
    let all = if view.all_visible_selected() { "[x]" } else { "[ ]" };
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(18),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec![all, "Name", "Email", "Role", "Status", "Last Login"]).style(Theme::header()),
    )
    .block(panel("Users", on(UserFocus::Results)))
    .row_highlight_style(Theme::selected_row());
    let mut state = TableState::default().with_selected(view.list.selected_index());
    frame.render_stateful_widget(table, table_area, &mut state);
}
