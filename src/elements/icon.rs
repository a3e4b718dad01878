// Icon glyphs
// Turns the embedder's opaque icon handle into something a terminal can draw

use std::borrow::Cow;

/// An icon that can be drawn as text
pub trait IconGlyph {
    fn glyph(&self) -> Cow<'_, str>;
}

impl IconGlyph for String {
    fn glyph(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl IconGlyph for &'static str {
    fn glyph(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl IconGlyph for char {
    fn glyph(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

/// No icon
impl IconGlyph for () {
    fn glyph(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

/// Glyph padded or cut to exactly `width` columns
pub fn fit_glyph<I: IconGlyph>(icon: &I, width: u16) -> String {
    let glyph = icon.glyph();
    let mut out: String = glyph.chars().take(width as usize).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width as usize - used));
    out
}
