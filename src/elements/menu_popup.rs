// Visibility menu popup
// Checklist of all pages drawn above the toolbar's menu button

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::managers::MenuEntry;
use crate::utilities::{truncate, NavBarTheme};

/// Popup rectangle: right-aligned to `anchor`, sitting on top of it, kept inside `bounds`
pub fn popup_rect(anchor: Rect, bounds: Rect, entries: &[MenuEntry]) -> Rect {
    let longest = entries.iter().map(|e| e.title.chars().count()).max().unwrap_or(0) as u16;
    // "│[x] title │"
    let width = longest.saturating_add(7).min(bounds.width);
    let height = (entries.len() as u16).saturating_add(2).min(anchor.y.saturating_sub(bounds.y));

    let right = anchor.x.saturating_add(anchor.width).min(bounds.x + bounds.width);
    let x = right.saturating_sub(width).max(bounds.x);
    let y = anchor.y.saturating_sub(height);
    Rect::new(x, y, width, height)
}

/// Render the checklist; returns each visible entry's page and rectangle
pub fn render_menu_popup(
    f: &mut Frame,
    area: Rect,
    entries: &[MenuEntry],
    highlighted: usize,
    theme: &NavBarTheme,
) -> Vec<(usize, Rect)> {
    if area.width < 3 || area.height < 3 {
        return Vec::new();
    }
    let style = theme.menu_style();
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style.fg(theme.border))
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let room = (inner.width as usize).saturating_sub(5);
    let mut placed = Vec::new();
    for (i, entry) in entries.iter().enumerate().take(inner.height as usize) {
        let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let mark = if entry.checked { "[x]" } else { "[ ]" };
        let text = format!("{} {}", mark, truncate(&entry.title, room));
        let line_style = if i == highlighted {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        f.render_widget(Paragraph::new(Line::from(text)).style(line_style), rect);
        placed.push((entry.page, rect));
    }
    placed
}
