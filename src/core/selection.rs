// Selection Controller
// Tracks the single current page by index and identity

use super::page::PageId;
use super::registry::PageRegistry;

/// The current page: where it is and which page it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPage {
    pub index: usize,
    pub id: PageId,
}

/// Holds at most one current page; the current page is always a visible page
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    current: Option<CurrentPage>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn current(&self) -> Option<CurrentPage> {
        self.current
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current.map(|c| c.index)
    }

    /// Whether the page at `index` is the checked (current) entry
    pub fn is_current(&self, index: usize) -> bool {
        self.current_index() == Some(index)
    }

    /// Make the page at `index` current, replacing the previous one
    /// Out-of-range and hidden pages are refused; returns whether the request was accepted
    pub fn select<C, I>(&mut self, registry: &PageRegistry<C, I>, index: usize) -> bool {
        match registry.get(index) {
            Some(page) if page.is_visible() => {
                self.current = Some(CurrentPage { index, id: page.id() });
                true
            }
            _ => false,
        }
    }

    /// Re-assert the current page after the registry changed shape
    ///
    /// The current page keeps being current wherever it moved to. When it is gone
    /// or hidden (or there was none), the visible page at `fallback_ordinal` among
    /// the visible pages takes over, clamped to the last visible page.
    pub fn reconcile<C, I>(&mut self, registry: &PageRegistry<C, I>, fallback_ordinal: usize) {
        if let Some(current) = self.current {
            if let Some(index) = registry.position_of(current.id) {
                if registry.get(index).map(|p| p.is_visible()).unwrap_or(false) {
                    self.current = Some(CurrentPage { index, id: current.id });
                    return;
                }
            }
        }

        let visible = registry.visible_indices();
        self.current = match visible.last() {
            None => None,
            Some(&last) => {
                let index = visible.get(fallback_ordinal).copied().unwrap_or(last);
                registry.get(index).map(|p| CurrentPage { index, id: p.id() })
            }
        };
    }

    /// Move to the next (or previous) visible, enabled page, wrapping around
    /// Returns true if the current page changed
    pub fn step<C, I>(&mut self, registry: &PageRegistry<C, I>, forward: bool) -> bool {
        let count = registry.len();
        if count == 0 {
            return false;
        }

        let start = self.current_index().unwrap_or(if forward { count - 1 } else { 0 });
        for offset in 1..=count {
            let index = if forward {
                (start + offset) % count
            } else {
                (start + count - offset % count) % count
            };
            let activatable = registry
                .get(index)
                .map(|p| p.is_visible() && p.is_enabled())
                .unwrap_or(false);
            if activatable {
                if self.current_index() == Some(index) {
                    return false;
                }
                return self.select(registry, index);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(count: usize) -> PageRegistry<usize, ()> {
        let mut registry = PageRegistry::new();
        for i in 0..count {
            registry.push(i, format!("Page {}", i + 1), ());
        }
        registry
    }

    #[test]
    fn test_select_refuses_out_of_range_and_hidden() {
        let mut registry = registry(3);
        registry.set_visible(1, false).unwrap();
        let mut selection = SelectionController::new();

        assert!(!selection.select(&registry, 5));
        assert!(!selection.select(&registry, 1));
        assert_eq!(selection.current_index(), None);

        assert!(selection.select(&registry, 2));
        assert!(selection.is_current(2));
        assert!(!selection.is_current(0));
    }

    #[test]
    fn test_reconcile_follows_moved_page() {
        let mut registry = registry(3);
        let mut selection = SelectionController::new();
        selection.select(&registry, 1);

        registry.insert(0, 9, "New".to_string(), ());
        selection.reconcile(&registry, 0);
        assert_eq!(selection.current_index(), Some(2));
    }

    #[test]
    fn test_reconcile_after_removing_current() {
        let mut registry = registry(5);
        let mut selection = SelectionController::new();
        selection.select(&registry, 2);

        let ordinal = registry.visible_ordinal(2);
        let removed = registry.remove(2).unwrap();
        selection.reconcile(&registry, ordinal);

        assert_eq!(selection.current_index(), Some(2));
        assert_ne!(selection.current().unwrap().id, removed.id());
        assert_eq!(*registry.content(2).unwrap(), 3);
    }

    #[test]
    fn test_reconcile_clamps_to_last_visible() {
        let mut registry = registry(3);
        let mut selection = SelectionController::new();
        selection.select(&registry, 2);

        let ordinal = registry.visible_ordinal(2);
        registry.remove(2);
        selection.reconcile(&registry, ordinal);
        assert_eq!(selection.current_index(), Some(1));

        registry.remove(1);
        registry.remove(0);
        selection.reconcile(&registry, 0);
        assert_eq!(selection.current_index(), None);
    }

    #[test]
    fn test_step_skips_hidden_and_disabled_and_wraps() {
        let mut registry = registry(4);
        registry.set_visible(1, false).unwrap();
        registry.set_enabled(2, false).unwrap();
        let mut selection = SelectionController::new();
        selection.select(&registry, 0);

        assert!(selection.step(&registry, true));
        assert_eq!(selection.current_index(), Some(3));

        assert!(selection.step(&registry, true));
        assert_eq!(selection.current_index(), Some(0));

        assert!(selection.step(&registry, false));
        assert_eq!(selection.current_index(), Some(3));
    }

    #[test]
    fn test_step_with_single_candidate_reports_no_change() {
        let registry = registry(1);
        let mut selection = SelectionController::new();
        selection.select(&registry, 0);
        assert!(!selection.step(&registry, true));
        assert_eq!(selection.current_index(), Some(0));
    }
}
