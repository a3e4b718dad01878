// Application constants
// Glyphs drawn by the navbar view

/// Glyph of the toolbar button opening the visibility menu
pub const MENU_BUTTON_GLYPH: &str = "▾";

/// Toolbar marker shown when overflow entries do not fit
pub const EXTENSION_GLYPH: &str = "»";

/// Header button folding the control
pub const FOLD_GLYPH: &str = "«";

/// Header button unfolding a folded control
pub const UNFOLD_GLYPH: &str = "»";
