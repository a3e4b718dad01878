// Page Registry
// Ordered, densely indexed collection of pages (arena-style, indexed by position)
//
// Usage:
//   let mut registry = PageRegistry::new();
//   let index = registry.push("inbox", "Mail".to_string(), "✉");
//   registry.set_title(index, "Inbox".to_string())?;

use super::error::{NavBarError, Result};
use super::page::{Page, PageId};

/// Registry owning every page of a navigation bar
#[derive(Debug, Clone)]
pub struct PageRegistry<C, I> {
    /// Pages in list order; `pages[i].position == i` at all times
    pages: Vec<Page<C, I>>,
    /// Next page ID to assign
    next_id: u64,
}

impl<C, I> PageRegistry<C, I> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Append a page and return its index
    pub fn push(&mut self, content: C, title: String, icon: I) -> usize {
        self.insert(self.pages.len(), content, title, icon)
    }

    /// Insert a page at `index`, or append when `index` is past the end
    /// Returns the index the page landed at
    pub fn insert(&mut self, index: usize, content: C, title: String, icon: I) -> usize {
        let index = index.min(self.pages.len());
        let id = PageId::new(self.next_id);
        self.next_id += 1;

        self.pages.insert(index, Page::new(id, content, title, icon));
        self.reindex_from(index);
        index
    }

    /// Detach the page at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) -> Option<Page<C, I>> {
        if index >= self.pages.len() {
            return None;
        }
        let mut page = self.pages.remove(index);
        self.reindex_from(index);
        page.position = 0;
        Some(page)
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, page) in self.pages.iter_mut().enumerate().skip(start) {
            page.position = position;
        }
    }

    /// Get a page by index (strict)
    pub fn page(&self, index: usize) -> Result<&Page<C, I>> {
        let count = self.pages.len();
        self.pages.get(index).ok_or(NavBarError::InvalidIndex { index, count })
    }

    fn page_mut(&mut self, index: usize) -> Result<&mut Page<C, I>> {
        let count = self.pages.len();
        self.pages.get_mut(index).ok_or(NavBarError::InvalidIndex { index, count })
    }

    /// Get a page by index, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Page<C, I>> {
        self.pages.get(index)
    }

    pub fn title(&self, index: usize) -> Result<&str> {
        self.page(index).map(|p| p.title.as_str())
    }

    pub fn icon(&self, index: usize) -> Result<&I> {
        self.page(index).map(|p| &p.icon)
    }

    pub fn is_enabled(&self, index: usize) -> Result<bool> {
        self.page(index).map(|p| p.enabled)
    }

    pub fn is_visible(&self, index: usize) -> Result<bool> {
        self.page(index).map(|p| p.visible)
    }

    pub fn set_title(&mut self, index: usize, title: String) -> Result<()> {
        self.page_mut(index)?.title = title;
        Ok(())
    }

    pub fn set_icon(&mut self, index: usize, icon: I) -> Result<()> {
        self.page_mut(index)?.icon = icon;
        Ok(())
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        self.page_mut(index)?.enabled = enabled;
        Ok(())
    }

    /// Set the visible flag; returns true if the flag actually changed
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<bool> {
        let page = self.page_mut(index)?;
        let changed = page.visible != visible;
        page.visible = visible;
        Ok(changed)
    }

    /// Content of the page at `index`, `None` when out of range
    pub fn content(&self, index: usize) -> Option<&C> {
        self.pages.get(index).map(|p| &p.content)
    }

    /// Current index of the page with the given identity
    pub fn position_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Indices of visible pages, in list order
    pub fn visible_indices(&self) -> Vec<usize> {
        self.pages
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.position)
            .collect()
    }

    /// Number of visible pages
    pub fn visible_count(&self) -> usize {
        self.pages.iter().filter(|p| p.visible).count()
    }

    /// Number of visible pages strictly before `index`
    pub fn visible_ordinal(&self, index: usize) -> usize {
        self.pages.iter().take(index).filter(|p| p.visible).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page<C, I>> {
        self.pages.iter()
    }
}

impl<C: PartialEq, I> PageRegistry<C, I> {
    /// Index of the first page holding `content`
    pub fn index_of(&self, content: &C) -> Option<usize> {
        self.pages.iter().position(|p| &p.content == content)
    }
}

impl<C, I> Default for PageRegistry<C, I> {
    fn default() -> Self {
        Self::new()
    }
}
