// Helper utilities for the navbar front end
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name or "#RRGGBB" string
/// Returns `None` for anything unrecognized
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        "reset" | "default" => Color::Reset,
        _ => return None,
    };
    Some(parsed)
}

/// Dimming context - tracks if the visibility menu is open over the control
pub struct DimmingContext {
    pub modal_visible: bool,
}

impl DimmingContext {
    pub fn new(modal_visible: bool) -> Self {
        Self { modal_visible }
    }

    /// Apply dimming to a color based on modal state
    pub fn dim_color(&self, color: Color) -> Color {
        if self.modal_visible {
            hex_color(0x444444)
        } else {
            color
        }
    }

    /// Apply dimming to a style based on modal state
    pub fn dim_style(&self, style: Style) -> Style {
        if self.modal_visible {
            style.fg(hex_color(0x444444))
        } else {
            style
        }
    }
}

/// Shrink `area` by one cell on every side
pub fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Whether (x, y) falls inside `rect`
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && (x as u32) < rect.x as u32 + rect.width as u32
        && (y as u32) < rect.y as u32 + rect.height as u32
}

/// Truncate `text` to at most `max_width` characters
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}
