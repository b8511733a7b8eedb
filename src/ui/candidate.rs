use crate::filter::RangeFilter;
use crate::records::profile;
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::Theme;
use crate::ui::widgets::{key_hints, panel, tag_spans, truncate, FormLines};
use crate::views::applications::ApplicationTab;
use crate::views::job_board::JobBoardFocus;
use crate::views::profile::ProfileField;
use crate::views::{JobBoard, MyApplications, MyProfile};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Gauge, Paragraph, Row, Table, TableState, Tabs, Wrap};

const LABEL_WIDTH: usize = 14;

fn salary_label(range: &RangeFilter, value: u32) -> String {
    if value >= range.bounds().1 {
        format!("${}k+", value)
    } else {
        format!("${}k", value)
    }
}

pub fn render_job_board(frame: &mut Frame, area: Rect, board: &JobBoard, focused: bool) {
    let (filters_area, body) = split_top(area, 8);
    let criteria = &board.list.criteria;
    let on = |f: JobBoardFocus| focused && board.focus == f;

    let filters_focused = focused && board.focus != JobBoardFocus::Results;
    let block = panel("Find your next role", filters_focused);
    let inner = block.inner(filters_area);
    frame.render_widget(block, filters_area);

    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.field(
        "Search",
        &criteria.search,
        on(JobBoardFocus::Search),
        "Job title, company or skill",
    );
    lines.choice("Location", criteria.location.label(), on(JobBoardFocus::Location));
    lines.choice(
        "Experience",
        criteria.experience.label(),
        on(JobBoardFocus::Experience),
    );
    lines.choice(
        "Salary from",
        &salary_label(&criteria.salary, criteria.salary.min),
        on(JobBoardFocus::SalaryMin),
    );
    lines.choice(
        "Salary to",
        &salary_label(&criteria.salary, criteria.salary.max),
        on(JobBoardFocus::SalaryMax),
    );
    lines.line(Span::styled(
        format!(
            "{} of {} jobs  ·  {} saved",
            board.list.count(),
            board.list.total(),
            board.saved_count()
        ),
        Theme::muted(),
    ));
    lines.render(frame, inner);

    let [list_area, detail_area] = columns(body, 2)[..] else {
        return;
    };
    let results = board.list.results();
    let results_focused = on(JobBoardFocus::Results);

    let rows: Vec<Row> = results
        .iter()
        .map(|job| {
            let star = if board.is_saved(job) { "★" } else { " " };
            Row::new(vec![
                Cell::from(Span::styled(star, Theme::key_hint())),
                Cell::from(job.title),
                Cell::from(Span::styled(job.company, Theme::muted())),
                Cell::from(job.salary),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(Row::new(vec!["", "Title", "Company", "Salary"]).style(Theme::header()))
    .block(panel("Jobs", results_focused))
    .row_highlight_style(Theme::selected_row());
    let mut table_state = TableState::default().with_selected(board.list.selected_index());
    frame.render_stateful_widget(table, list_area, &mut table_state);

    let block = panel("Details", false);
    let inner = block.inner(detail_area);
    frame.render_widget(block, detail_area);
    let Some(job) = board.list.selected() else {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No jobs match your filters.", Theme::title())),
            Line::from(Span::styled("Ctrl+R clears every filter.", Theme::muted())),
        ]);
        frame.render_widget(empty, inner);
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(job.title, Theme::title())),
        Line::from(Span::styled(job.company, Theme::header())),
        Line::from(Span::styled(
            format!("{}  ·  {}  ·  {}", job.location, job.kind, job.experience),
            Theme::muted(),
        )),
        Line::from(vec![
            Span::styled(job.salary, Theme::text()),
            Span::styled(format!("  ·  posted {}", job.posted), Theme::muted()),
        ]),
        Line::default(),
        Line::from(tag_spans(job.skills, None)),
        Line::default(),
        Line::from(Span::styled(job.description, Theme::text())),
        Line::default(),
    ];
    lines.push(if job.quick_apply {
        Line::from(Span::styled("⚡ Quick Apply available", Theme::success()))
    } else {
        Line::from(Span::styled("External application", Theme::muted()))
    });
    lines.push(key_hints(&[("Enter", "Apply"), ("Ctrl+S", "Save")]));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_applications(frame: &mut Frame, area: Rect, view: &MyApplications, focused: bool) {
    let (tabs_area, body) = split_top(area, 3);
    let counts = view.counts();
    let titles: Vec<Line> = ApplicationTab::ALL
        .iter()
        .map(|tab| {
            let n = match tab {
                ApplicationTab::All => counts.total,
                ApplicationTab::Active => counts.active,
                ApplicationTab::Interview => counts.interview,
                ApplicationTab::Offer => counts.offer,
            };
            Line::from(format!("{} ({})", tab.label(), n))
        })
        .collect();
    let selected = ApplicationTab::ALL
        .iter()
        .position(|t| *t == view.tab())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(panel("My Applications", focused))
        .select(selected)
        .style(Theme::muted())
        .highlight_style(Theme::label_focused());
    frame.render_widget(tabs, tabs_area);

    let (table_area, detail_area) = split_top(body, body.height.saturating_sub(7));
    let rows: Vec<Row> = view
        .list
        .results()
        .iter()
        .map(|app| {
            Row::new(vec![
                Cell::from(app.job_title),
                Cell::from(Span::styled(app.company, Theme::muted())),
                Cell::from(app.applied_on),
                Cell::from(Span::styled(app.status.label(), Theme::header())),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(Row::new(vec!["Position", "Company", "Applied", "Status"]).style(Theme::header()))
    .block(panel("Applications", false))
    .row_highlight_style(Theme::selected_row());
    let mut table_state = TableState::default().with_selected(view.list.selected_index());
    frame.render_stateful_widget(table, table_area, &mut table_state);

    let Some(app) = view.list.selected() else {
        let empty = Paragraph::new(Span::styled("No applications in this tab.", Theme::muted()))
            .block(panel("Progress", false));
        frame.render_widget(empty, detail_area);
        return;
    };
    let block = panel("Progress", false);
    let inner = block.inner(detail_area);
    frame.render_widget(block, detail_area);
    let (gauge_area, notes_area) = split_top(inner, 1);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::ACCENT_BLUE).bg(Theme::BG_SURFACE))
        .percent(u16::from(app.progress.min(100)))
        .label(format!("{} · {}%", app.current_stage, app.progress));
    frame.render_widget(gauge, gauge_area);

    let mut notes = vec![Line::from(Span::styled(
        format!("{}  ·  {}", app.company, app.location),
        Theme::muted(),
    ))];
    if let Some(step) = app.next_step {
        notes.push(Line::from(vec![
            Span::styled("Next step: ", Theme::label()),
            Span::styled(step, Theme::text()),
        ]));
    }
    if let Some(date) = app.interview_on {
        notes.push(Line::from(vec![
            Span::styled("Interview: ", Theme::label()),
            Span::styled(date, Theme::key_hint()),
        ]));
    }
    frame.render_widget(Paragraph::new(notes), notes_area);
}

pub fn render_profile(frame: &mut Frame, area: Rect, view: &MyProfile, focused: bool) {
    let [left, right] = columns(area, 2)[..] else {
        return;
    };
    let on = |f: ProfileField| focused && view.editing && view.focus == f;

    let title = if view.editing { "My Profile (editing)" } else { "My Profile" };
    let block = panel(title, focused);
    let inner = block.inner(left);
    frame.render_widget(block, left);

    let (form_area, about_area) = split_top(inner, 7);
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.line(Span::styled(profile::HEADLINE, Theme::title()));
    lines.line(Span::styled(profile::LOCATION, Theme::muted()));
    lines.blank();
    if view.editing {
        lines.field("About", &view.about, on(ProfileField::About), "");
        lines.field("Add skill", &view.skills.draft, on(ProfileField::NewSkill), "type + Enter");
    }
    let highlighted = on(ProfileField::Skills).then_some(view.skills.cursor);
    lines.tags("Skills", view.skills.tags(), highlighted, on(ProfileField::Skills));
    lines.render(frame, form_area);

    let mut about = vec![
        Line::from(Span::styled("About", Theme::header())),
        Line::from(Span::styled(view.about.value().to_string(), Theme::text())),
        Line::default(),
    ];
    about.push(if view.editing {
        key_hints(&[("Tab", "Next field"), ("Ctrl+S", "Save"), ("Esc", "Menu")])
    } else {
        key_hints(&[("Ctrl+E", "Edit"), ("Ctrl+U", "Upload resume")])
    });
    frame.render_widget(Paragraph::new(about).wrap(Wrap { trim: true }), about_area);

    let block = panel("Background", false);
    let inner = block.inner(right);
    frame.render_widget(block, right);
    let width = inner.width as usize;
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled("Contact", Theme::header())));
    for (label, value) in profile::CONTACT {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", label), Theme::label()),
            Span::styled(*value, Theme::text()),
        ]));
    }
    lines.push(Line::default());
    for (heading, positions) in [
        ("Experience", profile::EXPERIENCE),
        ("Education", profile::EDUCATION),
    ] {
        lines.push(Line::from(Span::styled(heading, Theme::header())));
        for position in positions {
            lines.push(Line::from(Span::styled(position.title, Theme::title())));
            lines.push(Line::from(Span::styled(
                truncate(
                    &format!("{}  ·  {}", position.organisation, position.period),
                    width,
                ),
                Theme::muted(),
            )));
            if !position.summary.is_empty() {
                lines.push(Line::from(Span::styled(position.summary, Theme::text())));
            }
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled("Certifications", Theme::header())));
    for (name, issuer) in profile::CERTIFICATIONS {
        lines.push(Line::from(vec![
            Span::styled(*name, Theme::text()),
            Span::styled(format!("  {}", issuer), Theme::muted()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Resume", Theme::header())));
    lines.push(Line::from(Span::styled(profile::RESUME_FILE, Theme::text())));
    lines.push(Line::from(Span::styled(profile::RESUME_META, Theme::muted())));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
