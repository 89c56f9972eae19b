use crate::app::{AppState, BannerKind};
use crate::ui::styles::{error_style, success_style};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the transient message line, if any
pub fn render_banner(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(banner) = &app.banner {
        let style = match banner.kind {
            BannerKind::Error => error_style(),
            BannerKind::Success => success_style(),
        };
        let line = Line::styled(format!(" {}", banner.text), style);
        f.render_widget(Paragraph::new(line), area);
    }
}
