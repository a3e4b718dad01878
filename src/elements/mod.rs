// GUI Elements module
// Visual components that render the navbar's derived views

pub mod header;
pub mod icon;
pub mod menu_popup;
pub mod navbar_view;
pub mod page_list;
pub mod splitter;
pub mod title_strip;
pub mod tool_bar;

pub use header::{fold_button_rect, render_header, FOLD_BUTTON_WIDTH};
pub use icon::{fit_glyph, IconGlyph};
pub use menu_popup::{popup_rect, render_menu_popup};
pub use navbar_view::{HitMap, HitTarget, NavBarView};
pub use page_list::{render_page_list, row_rects};
pub use splitter::render_splitter;
pub use title_strip::{render_title_strip, title_strip_cells};
pub use tool_bar::{entry_width, place_items, render_toolbar, ToolbarPlacement, EXTENSION_WIDTH, MENU_BUTTON_WIDTH};
