// Splitter handle between the content area and the list pane

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::utilities::{DimmingContext, NavBarTheme};

pub fn render_splitter(f: &mut Frame, area: Rect, dragging: bool, theme: &NavBarTheme, dimming: &DimmingContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let rule = if dragging { "━" } else { "─" };
    let grip = "⋯";

    let width = area.width as usize;
    let left = width.saturating_sub(1) / 2;
    let mut text = rule.repeat(left);
    text.push_str(grip);
    text.push_str(&rule.repeat(width.saturating_sub(left + 1)));

    let style = dimming.dim_style(Style::default().fg(theme.handle_fg));
    let line_row = Rect { height: 1, ..area };
    f.render_widget(Paragraph::new(text).style(style), line_row);
}
