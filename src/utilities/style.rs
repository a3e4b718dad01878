// Style loading
// Reads YAML theme files and turns them into navbar colors
//
// Usage:
//   let text = load_style(&style_path("styles", "Office2003Blue"));
//   let theme = NavBarTheme::from_style_text(&text).unwrap_or_default();

use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::helpers::{hex_color, parse_color};
use crate::core::error::{NavBarError, Result};

/// Read the raw text of a style file
/// Failures are not errors: they are logged and yield empty text
pub fn load_style(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "style unavailable");
            String::new()
        }
    }
}

/// Path of the named style inside `dir`
pub fn style_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.yaml", name))
}

/// Names of the styles available in `dir`, sorted
pub fn available_styles(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "yaml").unwrap_or(false))
        .filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}

/// On-disk shape of a style file; every color is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    name: Option<String>,
    header_fg: Option<String>,
    header_bg: Option<String>,
    list_fg: Option<String>,
    list_bg: Option<String>,
    current_fg: Option<String>,
    current_bg: Option<String>,
    disabled_fg: Option<String>,
    handle_fg: Option<String>,
    toolbar_fg: Option<String>,
    toolbar_bg: Option<String>,
    menu_fg: Option<String>,
    menu_bg: Option<String>,
    border: Option<String>,
}

/// Colors of every navbar band
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarTheme {
    pub name: String,
    pub header_fg: Color,
    pub header_bg: Color,
    pub list_fg: Color,
    pub list_bg: Color,
    pub current_fg: Color,
    pub current_bg: Color,
    pub disabled_fg: Color,
    pub handle_fg: Color,
    pub toolbar_fg: Color,
    pub toolbar_bg: Color,
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub border: Color,
}

impl Default for NavBarTheme {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            header_fg: Color::White,
            header_bg: hex_color(0x1A2A2A),
            list_fg: hex_color(0xCCCCCC),
            list_bg: Color::Reset,
            current_fg: Color::Cyan,
            current_bg: hex_color(0x1A2A2A),
            disabled_fg: hex_color(0x555555),
            handle_fg: hex_color(0x777777),
            toolbar_fg: hex_color(0xCCCCCC),
            toolbar_bg: hex_color(0x151515),
            menu_fg: Color::White,
            menu_bg: hex_color(0x222222),
            border: hex_color(0x333333),
        }
    }
}

impl NavBarTheme {
    /// Parse style text; empty text yields the default theme
    pub fn from_style_text(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: StyleFile =
            serde_yaml::from_str(text).map_err(|e| NavBarError::StyleParse(e.to_string()))?;
        let base = Self::default();

        let pick = |value: Option<String>, fallback: Color| -> Result<Color> {
            match value {
                None => Ok(fallback),
                Some(raw) => parse_color(&raw)
                    .ok_or_else(|| NavBarError::StyleParse(format!("unknown color '{}'", raw))),
            }
        };

        Ok(Self {
            name: file.name.unwrap_or(base.name),
            header_fg: pick(file.header_fg, base.header_fg)?,
            header_bg: pick(file.header_bg, base.header_bg)?,
            list_fg: pick(file.list_fg, base.list_fg)?,
            list_bg: pick(file.list_bg, base.list_bg)?,
            current_fg: pick(file.current_fg, base.current_fg)?,
            current_bg: pick(file.current_bg, base.current_bg)?,
            disabled_fg: pick(file.disabled_fg, base.disabled_fg)?,
            handle_fg: pick(file.handle_fg, base.handle_fg)?,
            toolbar_fg: pick(file.toolbar_fg, base.toolbar_fg)?,
            toolbar_bg: pick(file.toolbar_bg, base.toolbar_bg)?,
            menu_fg: pick(file.menu_fg, base.menu_fg)?,
            menu_bg: pick(file.menu_bg, base.menu_bg)?,
            border: pick(file.border, base.border)?,
        })
    }

    /// Load and parse a style file, falling back to the default theme
    pub fn load(path: &Path) -> Self {
        match Self::from_style_text(&load_style(path)) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "style rejected, using default");
                Self::default()
            }
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_style(&self, current: bool, enabled: bool) -> Style {
        if current {
            Style::default().fg(self.current_fg).bg(self.current_bg)
        } else if !enabled {
            Style::default().fg(self.disabled_fg).bg(self.list_bg)
        } else {
            Style::default().fg(self.list_fg).bg(self.list_bg)
        }
    }

    pub fn toolbar_style(&self) -> Style {
        Style::default().fg(self.toolbar_fg).bg(self.toolbar_bg)
    }

    pub fn menu_style(&self) -> Style {
        Style::default().fg(self.menu_fg).bg(self.menu_bg)
    }
}
