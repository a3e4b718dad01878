// Navbar Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::fmt;
use std::str::FromStr;

use super::error::NavBarError;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Smallest accepted row height
pub const MIN_ROW_HEIGHT: u16 = 1;

/// Size of an icon slot, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u16,
    pub height: u16,
}

impl IconSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for IconSize {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parse "WIDTHxHEIGHT"
impl FromStr for IconSize {
    type Err = NavBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(|| NavBarError::Config(format!("icon size '{}' is not WIDTHxHEIGHT", s)))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| NavBarError::Config(format!("bad icon width in '{}'", s)))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| NavBarError::Config(format!("bad icon height in '{}'", s)))?;
        Ok(Self { width, height })
    }
}

/// Configuration surface of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarConfig {
    /// Height of one list row and of the toolbar band
    pub row_height: u16,

    /// Height of the header band when it is shown
    pub header_height: u16,

    /// Height of the splitter handle between content and list pane
    pub handle_height: u16,

    /// Show the header band with the current page title
    pub show_header: bool,

    /// Append the page visibility menu button to the toolbar
    pub show_menu_button: bool,

    /// Icon slot of inline list rows
    pub list_icon_size: IconSize,

    /// Icon slot of overflow toolbar entries
    pub toolbar_icon_size: IconSize,
}

impl NavBarConfig {
    /// Clamp values that have a floor
    pub fn normalized(mut self) -> Self {
        self.row_height = self.row_height.max(MIN_ROW_HEIGHT);
        self
    }
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            row_height: compiled::ROW_HEIGHT.max(MIN_ROW_HEIGHT),
            header_height: compiled::HEADER_HEIGHT,
            handle_height: compiled::HANDLE_HEIGHT,
            show_header: compiled::SHOW_HEADER,
            show_menu_button: compiled::SHOW_MENU_BUTTON,
            list_icon_size: compiled::LIST_ICON_SIZE.into(),
            toolbar_icon_size: compiled::TOOLBAR_ICON_SIZE.into(),
        }
    }
}
