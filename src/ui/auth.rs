use crate::app::state::AppState;
use crate::auth::forms::*;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets::{key_hints, pad, panel, FormLines};
use ratatui::prelude::*;
use ratatui::widgets::Clear;

const LABEL_WIDTH: usize = 18;

pub fn render_login(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    form: &LoginForm,
    recovery: Option<&PasswordChangeForm>,
) {
    let block = panel("TalentDesk · Sign in", recovery.is_none());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = |field: LoginField| recovery.is_none() && form.focus == field;
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.line(Span::styled(
        "Welcome back! Please sign in to your account.",
        Theme::muted(),
    ));
    lines.blank();
    lines.field("Email", &form.email, focus(LoginField::Email), "you@example.com");
    lines.field("Password", &form.password, focus(LoginField::Password), "");
    lines.checkbox("Remember me", form.remember_me, focus(LoginField::RememberMe));
    lines.error(form.error.as_ref());
    lines.blank();
    lines.line(Span::styled("Demo accounts", Theme::header()));
    for (i, account) in state.router.accounts().iter().take(3).enumerate() {
        lines.line(Line::from(vec![
            Span::styled(format!("  F{} ", i + 1), Theme::key_hint()),
            Span::styled(pad(account.role.label(), 14), Theme::text()),
            Span::styled(account.email.clone(), Theme::muted()),
        ]));
    }
    lines.blank();
    lines.line(key_hints(&[
        ("Enter", "Sign in"),
        ("F4", "Forgot password?"),
        ("F5", "Create account"),
    ]));
    lines.render(frame, inner);

    if let Some(dialog) = recovery {
        let full = frame.area();
        render_password_change(frame, full, dialog);
    }
}

pub fn render_register(frame: &mut Frame, area: Rect, form: &RegisterForm) {
    let block = panel("TalentDesk · Create account", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = |field: RegisterField| !form.processing && form.focus == field;
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.line(Span::styled(
        "Join as a candidate and start applying today.",
        Theme::muted(),
    ));
    lines.blank();
    lines.field("Full Name", &form.full_name, focus(RegisterField::FullName), "Jane Doe");
    lines.field("Email", &form.email, focus(RegisterField::Email), "you@example.com");
    lines.field("Password", &form.password, focus(RegisterField::Password), "");
    lines.strength(&form.password, form.strength());
    lines.field("Confirm Password", &form.confirm, focus(RegisterField::Confirm), "");
    if !form.confirm.is_empty() {
        let matched = form.confirm.value() == form.password.value();
        let (text, style) = if matched {
            ("Passwords match", Theme::success())
        } else {
            ("Passwords do not match", Theme::error())
        };
        lines.line(Span::styled(format!("  {}{}", pad("", LABEL_WIDTH), text), style));
    }
    lines.checkbox(
        "I accept the Terms & Conditions",
        form.terms_accepted,
        focus(RegisterField::Terms),
    );
    lines.error(form.error.as_ref());
    lines.blank();
    if form.processing {
        lines.line(Span::styled("Creating account...", Theme::key_hint()));
    } else {
        lines.line(key_hints(&[("Enter", "Create account"), ("Esc", "Back to sign in")]));
    }
    lines.render(frame, inner);
}

/// Password-change popup, used both as the first-login gate and for
/// "Forgot password?".
pub fn render_password_change(frame: &mut Frame, area: Rect, form: &PasswordChangeForm) {
    let popup = layout::centered(area, 68, 17);
    frame.render_widget(Clear, popup);

    let (title, intro) = match &form.mode {
        PasswordChangeMode::Gate { user_name } => (
            "Change your password",
            format!(
                "Welcome, {}! Please set a new password before continuing.",
                user_name
            ),
        ),
        PasswordChangeMode::Recovery => (
            "Reset password",
            "Choose a new password for your account.".to_string(),
        ),
    };
    let block = panel(title, true).style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let focus = |field: PasswordField| !form.processing && form.focus == field;
    let mut lines = FormLines::new(LABEL_WIDTH);
    lines.line(Span::styled(intro, Theme::muted()));
    lines.blank();
    lines.field("Email", &form.email, focus(PasswordField::Email), "");
    lines.field(
        "New Password",
        &form.new_password,
        focus(PasswordField::NewPassword),
        "",
    );
    lines.strength(&form.new_password, form.strength());
    lines.field("Confirm Password", &form.confirm, focus(PasswordField::Confirm), "");
    lines.blank();
    lines.line(Span::styled(
        "Use 8+ characters mixing upper and lower case, digits and symbols.",
        Theme::muted(),
    ));
    lines.error(form.error.as_ref());
    lines.blank();
    if form.processing {
        lines.line(Span::styled("Updating password...", Theme::key_hint()));
    } else {
        lines.line(key_hints(&[("Enter", "Change password"), ("Esc", "Cancel")]));
    }
    lines.render(frame, inner);
}
