// Header band
// Shows the current page title with the fold button at the trailing edge

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{FOLD_GLYPH, UNFOLD_GLYPH};
use crate::utilities::{truncate, DimmingContext, NavBarTheme};

/// Width of the fold button: glyph with one cell of padding on each side
pub const FOLD_BUTTON_WIDTH: u16 = 3;

/// Fold button rectangle inside the header; the whole header when it is too narrow
pub fn fold_button_rect(area: Rect) -> Rect {
    let width = FOLD_BUTTON_WIDTH.min(area.width);
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

/// Render the header and return the fold button rectangle
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    title: Option<&str>,
    collapsed: bool,
    theme: &NavBarTheme,
    dimming: &DimmingContext,
) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::default();
    }
    let style = dimming.dim_style(theme.header_style());
    f.render_widget(Block::default().style(style), area);

    let button = fold_button_rect(area);
    let glyph = if collapsed { UNFOLD_GLYPH } else { FOLD_GLYPH };

    // Folded headers are too narrow for a title; the strip below carries it
    let title_width = if collapsed {
        0
    } else {
        (button.x - area.x).saturating_sub(1) as usize
    };
    let title = truncate(title.unwrap_or(""), title_width);

    let text_row = Rect { height: 1, ..area };
    if title_width > 0 {
        let label = Rect {
            width: button.x - area.x,
            ..text_row
        };
        let line = Line::from(vec![Span::raw(" "), Span::raw(title)]);
        f.render_widget(Paragraph::new(line).style(style), label);
    }
    let button_row = Rect { height: 1, ..button };
    let text = if button.width >= FOLD_BUTTON_WIDTH {
        format!(" {} ", glyph)
    } else {
        glyph.to_string()
    };
    f.render_widget(Paragraph::new(text).style(style), button_row);
    button
}
