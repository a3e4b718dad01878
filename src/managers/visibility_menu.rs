// Visibility Menu Manager
// Checklist of every page (visible or not) used to toggle per-page visibility
//
// The menu never changes visibility itself: the navbar reads the toggled entry,
// calls set_page_visible and rebuilds the menu from the registry afterwards.

use crate::core::registry::PageRegistry;

/// One checklist row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Registry index of the page
    pub page: usize,
    pub title: String,
    /// Mirrors the page's `visible` flag
    pub checked: bool,
}

/// State of the page visibility menu
#[derive(Debug, Clone, Default)]
pub struct VisibilityMenu {
    enabled: bool,
    open: bool,
    highlighted: usize,
    entries: Vec<MenuEntry>,
}

impl VisibilityMenu {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Whether the toolbar carries the menu button
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning the feature off also closes the menu
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.open = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> bool {
        if !self.enabled || self.open {
            return false;
        }
        self.open = true;
        self.highlighted = self.highlighted.min(self.entries.len().saturating_sub(1));
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            true
        } else {
            self.open()
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Rebuild the checklist from the registry
    pub fn rebuild<C, I>(&mut self, registry: &PageRegistry<C, I>) {
        self.entries = registry
            .iter()
            .map(|page| MenuEntry {
                page: page.position(),
                title: page.title().to_string(),
                checked: page.is_visible(),
            })
            .collect();
        self.highlighted = self.highlighted.min(self.entries.len().saturating_sub(1));
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight, wrapping at both ends
    pub fn move_highlight(&mut self, forward: bool) {
        let count = self.entries.len();
        if count == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else {
            (self.highlighted + count - 1) % count
        };
    }

    pub fn set_highlighted(&mut self, entry: usize) {
        if entry < self.entries.len() {
            self.highlighted = entry;
        }
    }

    /// Registry index of the highlighted entry
    pub fn highlighted_page(&self) -> Option<usize> {
        self.entries.get(self.highlighted).map(|entry| entry.page)
    }
}
