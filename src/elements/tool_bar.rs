// Overflow toolbar
// Spacer on the left, overflow entries and the menu button packed to the right edge

use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph},
    Frame,
};

use super::icon::{fit_glyph, IconGlyph};
use crate::constants::{EXTENSION_GLYPH, MENU_BUTTON_GLYPH};
use crate::core::app_config::IconSize;
use crate::utilities::{DimmingContext, NavBarTheme, ToolbarItem};

/// Width of one overflow entry: icon plus one cell of padding on each side
pub fn entry_width(icon_size: IconSize) -> u16 {
    icon_size.width.saturating_add(2)
}

/// Width of the menu button
pub const MENU_BUTTON_WIDTH: u16 = 3;

/// Width of the marker shown when overflow entries are dropped
pub const EXTENSION_WIDTH: u16 = 2;

/// Where the toolbar items landed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarPlacement {
    /// Placed items, left to right
    pub items: Vec<(ToolbarItem, Rect)>,
    /// Marker after the last placed entry, present when entries were dropped
    pub extension: Option<Rect>,
    /// Overflow pages that did not fit, in toolbar order
    pub hidden: Vec<usize>,
}

/// Place the toolbar items inside `area`
///
/// The menu button sits at the trailing edge and the overflow entries are
/// packed against it; the spacer takes whatever is left. Entries that do not
/// fit are dropped from the leading side and an extension marker is placed
/// between the remaining entries and the menu button.
pub fn place_items(area: Rect, items: &[ToolbarItem], icon_size: IconSize) -> ToolbarPlacement {
    let pages: Vec<usize> = items
        .iter()
        .filter_map(|item| match item {
            ToolbarItem::Page(page) => Some(*page),
            _ => None,
        })
        .collect();
    let entry = entry_width(icon_size) as u32;
    let left = area.x as u32;
    let mut right = left + area.width as u32;
    let slot = |x: u32, width: u32| Rect::new(x as u16, area.y, width as u16, area.height);

    // Right to left
    let mut trailing = Vec::with_capacity(items.len());
    if items.contains(&ToolbarItem::MenuButton) && right - left >= MENU_BUTTON_WIDTH as u32 {
        right -= MENU_BUTTON_WIDTH as u32;
        trailing.push((ToolbarItem::MenuButton, slot(right, MENU_BUTTON_WIDTH as u32)));
    }

    let mut extension = None;
    let needed = entry * pages.len() as u32;
    if needed > right - left && right - left >= EXTENSION_WIDTH as u32 {
        right -= EXTENSION_WIDTH as u32;
        extension = Some(slot(right, EXTENSION_WIDTH as u32));
    }

    let mut hidden = Vec::new();
    for (n, &page) in pages.iter().enumerate().rev() {
        if right - left < entry {
            hidden = pages[..=n].to_vec();
            break;
        }
        right -= entry;
        trailing.push((ToolbarItem::Page(page), slot(right, entry)));
    }

    let mut placed = Vec::with_capacity(trailing.len() + 1);
    if items.contains(&ToolbarItem::Spacer) {
        placed.push((ToolbarItem::Spacer, slot(left, right - left)));
    }
    placed.extend(trailing.into_iter().rev());

    ToolbarPlacement {
        items: placed,
        extension,
        hidden,
    }
}

/// Render the toolbar; `icon_for` resolves a page index to its icon and current flag
pub fn render_toolbar<'a, I, F>(
    f: &mut Frame,
    area: Rect,
    items: &[ToolbarItem],
    icon_size: IconSize,
    icon_for: F,
    menu_open: bool,
    theme: &NavBarTheme,
    dimming: &DimmingContext,
) -> ToolbarPlacement
where
    I: IconGlyph + 'a,
    F: Fn(usize) -> Option<(&'a I, bool)>,
{
    if area.width == 0 || area.height == 0 {
        return ToolbarPlacement::default();
    }
    let base = dimming.dim_style(theme.toolbar_style());
    f.render_widget(Block::default().style(base), area);

    let placement = place_items(area, items, icon_size);
    let text_row = |rect: &Rect| Rect {
        y: rect.y + rect.height.saturating_sub(1) / 2,
        height: 1,
        ..*rect
    };
    for (item, rect) in &placement.items {
        let text_row = text_row(rect);
        match item {
            ToolbarItem::Spacer => {}
            ToolbarItem::Page(index) => {
                let Some((icon, current)) = icon_for(*index) else {
                    continue;
                };
                let style = if current {
                    dimming.dim_style(theme.row_style(true, true))
                } else {
                    base
                };
                let text = format!(" {} ", fit_glyph(icon, icon_size.width));
                f.render_widget(Paragraph::new(text).style(style), text_row);
            }
            ToolbarItem::MenuButton => {
                let style = if menu_open {
                    dimming.dim_style(theme.menu_style())
                } else {
                    base
                };
                let text = format!(" {} ", MENU_BUTTON_GLYPH);
                f.render_widget(Paragraph::new(text).style(style), text_row);
            }
        }
    }

    if let Some(rect) = placement.extension {
        // Highlighted while the current page is one of the dropped entries
        let current_hidden = placement
            .hidden
            .iter()
            .any(|&page| icon_for(page).map(|(_, current)| current).unwrap_or(false));
        let style = if current_hidden {
            dimming.dim_style(theme.row_style(true, true))
        } else {
            base
        };
        let text = format!("{} ", EXTENSION_GLYPH);
        f.render_widget(Paragraph::new(text).style(style), text_row(&rect));
    }
    placement
}
