// Title strip
// The current page title written top to bottom, shown in place of the content while folded

use ratatui::{
    layout::Rect,
    style::Modifier,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::utilities::{DimmingContext, NavBarTheme};

/// One character per row, centered horizontally, one row of padding on top
pub fn title_strip_cells(area: Rect, title: &str) -> Vec<(Rect, char)> {
    if area.width == 0 || area.height < 2 {
        return Vec::new();
    }
    let x = area.x + (area.width - 1) / 2;
    title
        .chars()
        .take(area.height as usize - 1)
        .enumerate()
        .map(|(i, c)| (Rect::new(x, area.y + 1 + i as u16, 1, 1), c))
        .collect()
}

pub fn render_title_strip(f: &mut Frame, area: Rect, title: Option<&str>, theme: &NavBarTheme, dimming: &DimmingContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = dimming.dim_style(theme.header_style());
    f.render_widget(Block::default().style(style), area);

    let text_style = style.add_modifier(Modifier::BOLD);
    for (cell, c) in title_strip_cells(area, title.unwrap_or("")) {
        f.render_widget(Paragraph::new(c.to_string()).style(text_style), cell);
    }
}
