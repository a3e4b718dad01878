// Managers module
// Stateful wrappers combining the core pieces into the navbar control

pub mod navbar;
pub mod visibility_menu;

pub use navbar::{ListRow, NavBar, COLLAPSED_WIDTH, SIZE_HINT};
pub use visibility_menu::{MenuEntry, VisibilityMenu};
