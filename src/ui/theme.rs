use crate::auth::strength::Strength;
use crate::notify::ToastKind;
use crate::records::system::Health;
use crate::views::candidates::MatchTier;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39);
    pub const BG_SURFACE: Color = Color::Rgb(31, 41, 55);
    pub const BORDER_DIM: Color = Color::Rgb(75, 85, 99);
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246);
    pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
    pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
    pub const ACCENT_PURPLE: Color = Color::Rgb(192, 132, 252);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn tag() -> Style {
        Style::default().fg(Self::ACCENT_PURPLE)
    }

    pub fn strength(strength: Strength) -> Style {
        let color = match strength {
            Strength::Weak => Self::ACCENT_RED,
            Strength::Medium => Self::ACCENT_AMBER,
            Strength::Strong => Self::ACCENT_GREEN,
        };
        Style::default().fg(color)
    }

    pub fn health(health: Health) -> Style {
        let color = match health {
            Health::Good => Self::ACCENT_GREEN,
            Health::Warning => Self::ACCENT_AMBER,
            Health::Critical => Self::ACCENT_RED,
        };
        Style::default().fg(color)
    }

    pub fn toast(kind: ToastKind) -> Style {
        let color = match kind {
            ToastKind::Success => Self::ACCENT_GREEN,
            ToastKind::Info => Self::ACCENT_BLUE,
            ToastKind::Error => Self::ACCENT_RED,
        };
        Style::default().fg(color)
    }

    /// Candidate match score: green from 80, amber from 60, red below.
    pub fn match_score(score: u8) -> Style {
        Self::match_tier(MatchTier::of(score))
    }

    /// Vacancy match rate: green from 70, amber from 50, red below.
    pub fn vacancy_match(rate: u8) -> Style {
        Self::match_tier(MatchTier::of_vacancy(rate))
    }

    fn match_tier(tier: MatchTier) -> Style {
        let color = match tier {
            MatchTier::Strong => Self::ACCENT_GREEN,
            MatchTier::Fair => Self::ACCENT_AMBER,
            MatchTier::Weak => Self::ACCENT_RED,
        };
        Style::default().fg(color)
    }
}
