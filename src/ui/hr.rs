use crate::records::analytics::{
    ANALYZED_SUBTITLE, ANALYZED_VACANCY, KEY_METRICS, MATCH_DISTRIBUTION, PIPELINE,
    SCREENING_RESULTS,
};
use crate::records::candidates::PipelineStatus;
use crate::records::vacancies::VacancyStatus;
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::Theme;
use crate::ui::widgets::{key_hints, pad, panel, stat_tile, tag_spans, FormLines};
use crate::views::candidates::CandidateFocus;
use crate::views::vacancies::VacancyFocus;
use crate::views::wizard::{BasicField, CriteriaField, Requirement, WizardStep, EDUCATION_OPTIONS};
use crate::views::{CandidateList, VacancyTable, VacancyWizard};
use ratatui::prelude::*;
use ratatui::widgets::{BarChart, Cell, Paragraph, Row, Table, TableState};

const LABEL_WIDTH: usize = 16;

pub fn render_home(frame: &mut Frame, area: Rect, table: &VacancyTable, focused: bool) {
    let (tiles_area, rest) = split_top(area, 4);
    let (filters_area, table_area) = split_top(rest, 5);
    let on = |f: VacancyFocus| focused && table.focus == f;

    let stats = table.stats();
    if let [a, b, c] = columns(tiles_area, 3)[..] {
        stat_tile(
            frame,
            a,
            "Active Vacancies",
            &stats.active.to_string(),
            "open for applications",
            Theme::ACCENT_BLUE,
        );
        stat_tile(
            frame,
            b,
            "Total Applicants",
            &stats.total_applicants.to_string(),
            "across all vacancies",
            Theme::ACCENT_PURPLE,
        );
        stat_tile(
            frame,
            c,
            "Avg. Match Rate",
            &format!("{}%", stats.average_match_rate),
            "AI screening score",
            Theme::ACCENT_GREEN,
        );
    }

    let block = panel("My Vacancies", focused && table.focus != VacancyFocus::Results);
    let inner = block.inner(filters_area);
    frame.render_widget(block, filters_area);
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.field("Search", &table.list.criteria.search, on(VacancyFocus::Search), "Job title");
    lines.choice("Status", table.list.criteria.status.label(), on(VacancyFocus::Status));
    lines.line(key_hints(&[
        ("Ctrl+N", "Create vacancy"),
        ("Ctrl+K", "Candidates"),
        ("Enter", "Analytics"),
    ]));
    lines.render(frame, inner);

    let rows: Vec<Row> = table
        .list
        .results()
        .iter()
        .map(|v| {
            let status_style = match v.status {
                VacancyStatus::Active => Theme::success(),
                VacancyStatus::Closed => Theme::muted(),
            };
            Row::new(vec![
                Cell::from(v.job_title),
                Cell::from(Span::styled(v.department, Theme::muted())),
                Cell::from(v.created_on),
                Cell::from(v.applicants.to_string()),
                Cell::from(Span::styled(
                    format!("{}%", v.match_rate),
                    Theme::vacancy_match(v.match_rate),
                )),
                Cell::from(Span::styled(v.status.label(), status_style)),
            ])
        })
        .collect();
    let title = format!("{} of {} vacancies", table.list.count(), table.list.total());
    let widget = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(13),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Job Title", "Department", "Created", "Applicants", "Match", "Status"])
            .style(Theme::header()),
    )
    .block(panel(&title, on(VacancyFocus::Results)))
    .row_highlight_style(Theme::selected_row());
    let mut state = TableState::default().with_selected(table.list.selected_index());
    frame.render_stateful_widget(widget, table_area, &mut state);
}

fn criteria_heading(name: &'static str, requirement: Requirement) -> Line<'static> {
    Line::from(vec![
        Span::styled(name, Theme::header()),
        Span::styled(format!("  ({})", requirement.label()), Theme::muted()),
    ])
}

pub fn render_wizard(frame: &mut Frame, area: Rect, wizard: &VacancyWizard, focused: bool) {
    let title = format!(
        "Create Vacancy · Step {} of {}: {}",
        wizard.step.number(),
        WizardStep::ALL.len(),
        wizard.step.title()
    );
    let block = panel(&title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = FormLines::new(LABEL_WIDTH);
    let progress: Vec<Span> = WizardStep::ALL
        .iter()
        .flat_map(|step| {
            let style = if *step == wizard.step {
                Theme::label_focused()
            } else {
                Theme::muted()
            };
            [
                Span::styled(format!("{}. {}", step.number(), step.title()), style),
                Span::raw("   "),
            ]
        })
        .collect();
    lines.line(Line::from(progress));
    lines.blank();

    match wizard.step {
        WizardStep::BasicDetails => {
            let on = |f: BasicField| focused && wizard.basic_focus == f;
            lines.field(
                "Job Title",
                &wizard.title,
                on(BasicField::Title),
                "e.g. Senior Frontend Developer",
            );
            lines.choice(
                "Department",
                wizard.department.label_or("Select department"),
                on(BasicField::Department),
            );
            lines.field(
                "Description",
                &wizard.description,
                on(BasicField::Description),
                "Role summary and responsibilities",
            );
            lines.blank();
            lines.checkbox(
                "Save as template",
                wizard.save_as_template,
                on(BasicField::SaveTemplate),
            );
        }
        WizardStep::ScreeningCriteria => {
            let on = |f: CriteriaField| focused && wizard.criteria_focus == f;
            lines.line(criteria_heading("Skills", wizard.skills_requirement));
            lines.field(
                "Add skill",
                &wizard.skills.draft,
                on(CriteriaField::NewSkill),
                "type + Enter",
            );
            let highlighted = on(CriteriaField::Skills).then_some(wizard.skills.cursor);
            lines.tags(
                "Skills",
                wizard.skills.tags(),
                highlighted,
                on(CriteriaField::Skills),
            );
            lines.checkbox(
                "Skills are required",
                wizard.skills_requirement.is_required(),
                on(CriteriaField::SkillsRequired),
            );
            lines.blank();
            lines.line(criteria_heading("Experience", wizard.experience_requirement));
            lines.choice(
                "Level",
                wizard.experience_level.label_or("Select level"),
                on(CriteriaField::ExperienceLevel),
            );
            lines.field("Min. years", &wizard.years, on(CriteriaField::Years), "e.g. 3");
            lines.checkbox(
                "Experience is required",
                wizard.experience_requirement.is_required(),
                on(CriteriaField::ExperienceRequired),
            );
            lines.blank();
            lines.line(criteria_heading("Education", wizard.education_requirement));
            let education_focused = on(CriteriaField::Education);
            for (i, option) in EDUCATION_OPTIONS.iter().enumerate() {
                lines.checkbox(
                    option,
                    wizard.education[i],
                    education_focused && wizard.education_cursor == i,
                );
            }
            lines.checkbox(
                "Education is required",
                wizard.education_requirement.is_required(),
                on(CriteriaField::EducationRequired),
            );
            lines.blank();
            lines.checkbox(
                "Save as template",
                wizard.save_as_template,
                on(CriteriaField::SaveTemplate),
            );
        }
    }

    lines.blank();
    lines.line(if wizard.is_last_step() {
        key_hints(&[("Ctrl+P", "Back"), ("Ctrl+S", "Create vacancy"), ("Space", "Toggle")])
    } else {
        key_hints(&[("Ctrl+N", "Next step"), ("←/→", "Choose"), ("Space", "Toggle")])
    });
    lines.render(frame, inner);
}

pub fn render_candidates(frame: &mut Frame, area: Rect, view: &CandidateList, focused: bool) {
    let (filters_area, list_area) = split_top(area, 7);
    let criteria = &view.list.criteria;
    let on = |f: CandidateFocus| focused && view.focus == f;

    let block = panel("Candidates", focused && view.focus != CandidateFocus::Results);
    let inner = block.inner(filters_area);
    frame.render_widget(block, filters_area);
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.field("Search", &criteria.search, on(CandidateFocus::Search), "Name or position");
    lines.choice(
        "Min. match",
        &format!("{}%", criteria.match_score.min),
        on(CandidateFocus::MinScore),
    );
    lines.choice(
        "Max. match",
        &format!("{}%", criteria.match_score.max),
        on(CandidateFocus::MaxScore),
    );

    let status_focused = on(CandidateFocus::Status);
    let mark = if status_focused { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(mark, Theme::label_focused()),
        Span::styled(
            pad("Status", LABEL_WIDTH),
            if status_focused { Theme::label_focused() } else { Theme::label() },
        ),
    ];
    for (i, status) in PipelineStatus::ALL.iter().enumerate() {
        let check = if criteria.statuses.is_selected(*status) { "[x]" } else { "[ ]" };
        let style = if status_focused && view.status_cursor == i {
            Theme::selected_row()
        } else {
            Theme::text()
        };
        spans.push(Span::styled(format!("{} {}", check, status.label()), style));
        spans.push(Span::raw("  "));
    }
    lines.line(Line::from(spans));
    lines.line(Span::styled(view.summary(), Theme::muted()));
    lines.render(frame, inner);

    let rows: Vec<Row> = view
        .list
        .results()
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(Span::styled(
                    format!("({})", c.initials()),
                    Theme::match_score(c.match_score),
                )),
                Cell::from(c.name),
                Cell::from(Span::styled(c.current_position, Theme::muted())),
                Cell::from(Span::styled(
                    format!("{}%", c.match_score),
                    Theme::match_score(c.match_score).add_modifier(Modifier::BOLD),
                )),
                Cell::from(c.status.label()),
                Cell::from(Line::from(tag_spans(c.skills, None))),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(18),
            Constraint::Length(24),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["", "Name", "Position", "Match", "Status", "Skills"]).style(Theme::header()),
    )
    .block(panel("Results", on(CandidateFocus::Results)))
    .row_highlight_style(Theme::selected_row());
    let mut state = TableState::default().with_selected(view.list.selected_index());
    frame.render_stateful_widget(table, list_area, &mut state);
}

pub fn render_analytics(frame: &mut Frame, area: Rect, focused: bool) {
    let block = panel(&format!("Analytics · {}", ANALYZED_VACANCY), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (header, rest) = split_top(inner, 2);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(ANALYZED_SUBTITLE, Theme::muted())),
            key_hints(&[("Enter", "View all candidates")]),
        ]),
        header,
    );

    let (tiles_area, rest) = split_top(rest, 4);
    let tiles = columns(tiles_area, KEY_METRICS.len());
    for (metric, tile) in KEY_METRICS.iter().zip(tiles) {
        let accent = if metric.positive {
            Theme::ACCENT_GREEN
        } else {
            Theme::ACCENT_AMBER
        };
        stat_tile(frame, tile, metric.label, metric.value, metric.note, accent);
    }

    let (charts_area, pipeline_area) = split_top(rest, rest.height.saturating_sub(8).max(8));
    let [chart_area, screening_area] = columns(charts_area, 2)[..] else {
        return;
    };

    let data: Vec<(&str, u64)> = MATCH_DISTRIBUTION
        .iter()
        .map(|bucket| (bucket.range, bucket.candidates))
        .collect();
    let chart = BarChart::default()
        .block(panel("Match Rate Distribution", false))
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(3)
        .bar_style(Style::default().fg(Theme::ACCENT_BLUE))
        .value_style(Style::default().fg(Theme::BG_DARK).bg(Theme::ACCENT_BLUE));
    frame.render_widget(chart, chart_area);

    let (passed, failed) = SCREENING_RESULTS;
    let total = passed + failed;
    let pass_rate = if total == 0 { 0 } else { passed * 100 / total };
    let screening = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Passed  ", Theme::label()),
            Span::styled(passed.to_string(), Theme::success().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Failed  ", Theme::label()),
            Span::styled(failed.to_string(), Theme::error().add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
        Line::from(Span::styled(format!("{}% pass rate", pass_rate), Theme::muted())),
    ])
    .block(panel("AI Screening Results", false));
    frame.render_widget(screening, screening_area);

    let stages = columns(pipeline_area, PIPELINE.len());
    for (stage, stage_area) in PIPELINE.iter().zip(stages) {
        let mut lines = vec![Line::from(Span::styled(
            stage.count.to_string(),
            Theme::title(),
        ))];
        for (name, score) in stage.top_candidates {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", name), Theme::text()),
                Span::styled(format!("{}%", score), Theme::match_score(*score)),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).block(panel(stage.title, false)),
            stage_area,
        );
    }
}
