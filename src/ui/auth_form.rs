use crate::app::AppState;
use crate::ui::{
    layout::create_auth_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the login form
pub fn render_login_form(f: &mut Frame, app: &AppState, area: Rect) {
    let form_area = create_auth_area(area, 12);
    f.render_widget(Clear, form_area);

    let form = &app.login_form;
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    push_field(&mut lines, "Username:", &form.username, form.editing_field == 0, false);
    push_field(&mut lines, "Password:", &form.password, form.editing_field == 1, true);
    lines.push(Line::raw("Tab switch field  ·  Enter sign in"));
    lines.push(Line::raw("F2 create account  ·  Esc quit"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Sign In ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, form_area);
}

/// Render the registration form
pub fn render_register_form(f: &mut Frame, app: &AppState, area: Rect) {
    let form_area = create_auth_area(area, 18);
    f.render_widget(Clear, form_area);

    let form = &app.register_form;
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    push_field(&mut lines, "Username:", &form.username, form.editing_field == 0, false);
    push_field(&mut lines, "Email:", &form.email, form.editing_field == 1, false);
    push_field(&mut lines, "Password:", &form.password, form.editing_field == 2, true);
    push_field(&mut lines, "Confirm password:", &form.confirm, form.editing_field == 3, true);
    lines.push(Line::raw("Tab switch field  ·  Enter register  ·  Esc back"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Create Account ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, form_area);
}

/// Push a label line and a value line with a block cursor on the active field
fn push_field(lines: &mut Vec<Line>, label: &str, value: &str, active: bool, mask: bool) {
    let label_text = if active {
        format!("{label} (editing)")
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label_text));

    let shown = if mask {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(shown, modal_title_style()),
        if active {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));
}
