// Page list pane
// One row per inline page: icon column, title, checked row highlighted

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::icon::{fit_glyph, IconGlyph};
use crate::core::app_config::IconSize;
use crate::managers::ListRow;
use crate::utilities::{truncate, DimmingContext, NavBarTheme};

/// Rectangles of the rows, top to bottom, clipped to `area`
pub fn row_rects(area: Rect, row_count: usize, row_height: u16) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(row_count);
    let bottom = area.y as u32 + area.height as u32;
    for i in 0..row_count {
        let y = area.y as u32 + i as u32 * row_height as u32;
        if y + row_height as u32 > bottom {
            break;
        }
        rects.push(Rect::new(area.x, y as u16, area.width, row_height));
    }
    rects
}

/// Render the list pane; returns each row's page and rectangle
pub fn render_page_list<I: IconGlyph>(
    f: &mut Frame,
    area: Rect,
    rows: &[ListRow<'_, I>],
    row_height: u16,
    icon_size: IconSize,
    theme: &NavBarTheme,
    dimming: &DimmingContext,
) -> Vec<(usize, Rect)> {
    let mut placed = Vec::with_capacity(rows.len());
    if area.width == 0 || area.height == 0 {
        return placed;
    }

    for (row, rect) in rows.iter().zip(row_rects(area, rows.len(), row_height)) {
        let style = dimming.dim_style(theme.row_style(row.checked, row.enabled));
        f.render_widget(Block::default().style(style), rect);

        let icon = fit_glyph(row.icon, icon_size.width);
        let room = (rect.width as usize).saturating_sub(icon.chars().count() + 2);
        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(icon),
            Span::raw(" "),
            Span::raw(truncate(row.title, room)),
        ]);

        // Text sits on the middle line of the row
        let text_row = Rect {
            y: rect.y + (rect.height.saturating_sub(1)) / 2,
            height: 1,
            ..rect
        };
        f.render_widget(Paragraph::new(line).style(style), text_row);
        placed.push((row.page, rect));
    }
    placed
}
