use crate::app::AppState;
use crate::ui::styles::{border_style, gauge_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Gauge},
    Frame,
};

/// Render the completion-progress gauge over the full (unfiltered) store
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let percent = app.progress();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Progress ", title_style())),
        )
        .gauge_style(gauge_style())
        .percent(u16::from(percent))
        .label(format!("{percent}%"));

    f.render_widget(gauge, area);
}
