// Navbar Library
// Outlook-style navigation bar control for terminal UIs

// Core infrastructure - pages, selection, notifications, errors
pub mod core;

// Managers - the NavBar control and its visibility menu
pub mod managers;

// Utilities - overflow and geometry math, styles, helpers
pub mod utilities;

// Elements - ratatui rendering of the derived views
pub mod elements;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use crate::core::{IconSize, NavBarConfig, NavBarError, NavBarEvent};
pub use elements::{HitMap, HitTarget, IconGlyph, NavBarView};
pub use managers::{ListRow, NavBar};
pub use utilities::{load_style, NavBarTheme, ToolbarItem};
pub use constants::*;
