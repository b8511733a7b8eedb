use crate::auth::strength::Strength;
use crate::auth::FormError;
use crate::input::TextInput;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const FOCUS_MARK: &str = "▸ ";
const NO_MARK: &str = "  ";

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `text` in exactly `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(fill))
}

/// Bordered panel; the border lights up while it has focus.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::muted() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

/// `key label  key label` help line.
pub fn key_hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(*key, Theme::key_hint()));
        spans.push(Span::styled(format!(" {}  ", label), Theme::muted()));
    }
    Line::from(spans)
}

fn cursor_offset(input: &TextInput) -> usize {
    if input.masked {
        input.cursor_column()
    } else {
        input.text[..input.cursor].width()
    }
}

/// Builds a column of form rows and remembers where the terminal cursor
/// belongs for the focused text field.
pub struct FormLines {
    lines: Vec<Line<'static>>,
    cursor: Option<(u16, u16)>,
    label_width: usize,
}

impl FormLines {
    pub fn new(label_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            label_width,
        }
    }

    fn label_spans(&self, label: &str, focused: bool) -> Vec<Span<'static>> {
        let (mark, style) = if focused {
            (FOCUS_MARK, Theme::label_focused())
        } else {
            (NO_MARK, Theme::label())
        };
        vec![
            Span::styled(mark, Theme::label_focused()),
            Span::styled(pad(label, self.label_width), style),
        ]
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn line(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn field(&mut self, label: &str, input: &TextInput, focused: bool, placeholder: &str) {
        let mut spans = self.label_spans(label, focused);
        if input.is_empty() && !placeholder.is_empty() {
            spans.push(Span::styled(placeholder.to_string(), Theme::muted()));
        } else {
            let style = if focused {
                Theme::text().add_modifier(Modifier::UNDERLINED)
            } else {
                Theme::text()
            };
            spans.push(Span::styled(input.display(), style));
        }
        if focused {
            let col = FOCUS_MARK.width() + self.label_width + cursor_offset(input);
            self.cursor = Some((col as u16, self.lines.len() as u16));
        }
        self.lines.push(Line::from(spans));
    }

    pub fn checkbox(&mut self, label: &str, checked: bool, focused: bool) {
        let focus_mark = if focused { FOCUS_MARK } else { NO_MARK };
        let check = if checked { "[x] " } else { "[ ] " };
        let style = if focused { Theme::label_focused() } else { Theme::text() };
        self.lines.push(Line::from(vec![
            Span::styled(focus_mark, Theme::label_focused()),
            Span::styled(check, style),
            Span::styled(label.to_string(), style),
        ]));
    }

    pub fn choice(&mut self, label: &str, value: &str, focused: bool) {
        let mut spans = self.label_spans(label, focused);
        let arrow = if focused { Theme::key_hint() } else { Theme::muted() };
        spans.push(Span::styled("◂ ", arrow));
        spans.push(Span::styled(value.to_string(), Theme::text()));
        spans.push(Span::styled(" ▸", arrow));
        self.lines.push(Line::from(spans));
    }

    /// Strength meter under a new-password field. Hidden while empty.
    pub fn strength(&mut self, input: &TextInput, score: u8) {
        if input.is_empty() {
            return;
        }
        let strength = Strength::from_score(score);
        let filled = usize::from(score) / 10;
        let mut spans = self.label_spans("Strength", false);
        spans.push(Span::styled("█".repeat(filled), Theme::strength(strength)));
        spans.push(Span::styled("░".repeat(10 - filled), Theme::border()));
        spans.push(Span::styled(
            format!(" {}", strength.label()),
            Theme::strength(strength),
        ));
        self.lines.push(Line::from(spans));
    }

    /// Tag chips; `highlighted` marks the chip Delete would remove.
    pub fn tags<S: AsRef<str>>(&mut self, label: &str, tags: &[S], highlighted: Option<usize>, focused: bool) {
        let mut spans = self.label_spans(label, focused);
        if tags.is_empty() {
            spans.push(Span::styled("none", Theme::muted()));
        }
        spans.extend(tag_spans(tags, highlighted));
        self.lines.push(Line::from(spans));
    }

    pub fn error(&mut self, error: Option<&FormError>) {
        if let Some(error) = error {
            self.lines
                .push(Line::from(Span::styled(format!("  ✗ {}", error), Theme::error())));
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        if let Some((col, row)) = self.cursor {
            if row < area.height {
                let x = (area.x + col).min(area.right().saturating_sub(1));
                frame.set_cursor_position((x, area.y + row));
            }
        }
        frame.render_widget(Paragraph::new(self.lines), area);
    }
}

/// `[React] [Rust]` chips.
pub fn tag_spans<S: AsRef<str>>(tags: &[S], highlighted: Option<usize>) -> Vec<Span<'static>> {
    tags.iter()
        .enumerate()
        .flat_map(|(i, tag)| {
            let style = if highlighted == Some(i) {
                Theme::selected_row()
            } else {
                Theme::tag()
            };
            [
                Span::styled(format!("[{}]", tag.as_ref()), style),
                Span::raw(" "),
            ]
        })
        .collect()
}

/// Small titled tile with a big value and a note underneath.
pub fn stat_tile(frame: &mut Frame, area: Rect, label: &str, value: &str, note: &str, accent: Color) {
    let block = panel(label, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(note.to_string(), Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Centered "coming soon" panel for sections without content yet.
pub fn placeholder(frame: &mut Frame, area: Rect, title: &str, focused: bool) {
    let block = panel(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), Theme::title())),
        Line::from(Span::styled("This section is coming soon.", Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
