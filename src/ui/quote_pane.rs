use crate::app::AppState;
use crate::ui::styles::{border_style, quote_author_style, quote_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the motivational quote pane
pub fn render_quote_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = match &app.quote {
        Some(quote) => vec![
            Line::styled(format!("\"{}\"", quote.content), quote_style()),
            Line::styled(format!("— {}", quote.author), quote_author_style()),
        ],
        None if app.quote_pending => vec![Line::styled("Fetching quote…", quote_author_style())],
        None => vec![Line::styled(
            "Press m for a dose of motivation",
            quote_author_style(),
        )],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Motivation ", title_style())),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
