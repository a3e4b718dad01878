// Utilities module
// Layout math, style loading and rendering helpers

pub mod geometry;
pub mod helpers;
pub mod overflow;
pub mod style;

pub use geometry::{row_span, BandLayout, GeometryCoordinator};
pub use helpers::{hex_color, inner_rect, parse_color, rect_contains, truncate, DimmingContext};
pub use overflow::{capacity_for, OverflowLayout, OverflowPartition, ToolbarItem};
pub use style::{available_styles, load_style, style_path, NavBarTheme};
