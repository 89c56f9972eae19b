use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Space complete   "),
        Span::raw("x delete   "),
        Span::raw("a add   "),
        Span::raw("s status   "),
        Span::raw("f priority   "),
        Span::raw("o sort   "),
        Span::raw("m quote   "),
        Span::raw("Esc sign out   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
