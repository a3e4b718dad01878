// Navigation Bar Manager
// Ties the page registry, selection, overflow layout, geometry and visibility menu together
//
// Every public mutation runs to completion (reindexing, selection reconciliation,
// layout pass, menu rebuild) before any notification is dispatched.
//
// Usage:
//   let mut navbar: NavBar<String> = NavBar::new();
//   navbar.add_page("inbox".to_string(), "Mail", ());
//   navbar.subscribe(|event| println!("{}", event));
//   navbar.resize(24, 20);

use ratatui::layout::Rect;
use tracing::debug;

use crate::core::app_config::{IconSize, NavBarConfig, MIN_ROW_HEIGHT};
use crate::core::error::Result;
use crate::core::events::{NavBarEvent, Notifier};
use crate::core::page::Page;
use crate::core::registry::PageRegistry;
use crate::core::selection::{CurrentPage, SelectionController};
use crate::utilities::geometry::{row_span, BandLayout, GeometryCoordinator};
use crate::utilities::overflow::{OverflowLayout, ToolbarItem};

use super::visibility_menu::{MenuEntry, VisibilityMenu};

/// Preferred size of the control, in cells
pub const SIZE_HINT: (u16, u16) = (24, 20);

/// Preferred width of a folded control: menu button plus toolbar extension marker
pub const COLLAPSED_WIDTH: u16 = 5;

/// Derived view of one inline list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a, I> {
    pub page: usize,
    pub title: &'a str,
    pub icon: &'a I,
    /// The row's page is current
    pub checked: bool,
    pub enabled: bool,
}

/// Outlook-style navigation bar
///
/// `C` is the page content handle, `I` the icon handle. Both are opaque to the
/// navbar and handed back to the embedder on request.
pub struct NavBar<C, I = ()> {
    registry: PageRegistry<C, I>,
    selection: SelectionController,
    overflow: OverflowLayout,
    geometry: GeometryCoordinator,
    menu: VisibilityMenu,
    config: NavBarConfig,
    notifier: Notifier,
}

impl<C, I> NavBar<C, I> {
    pub fn new() -> Self {
        Self::with_config(NavBarConfig::default())
    }

    pub fn with_config(config: NavBarConfig) -> Self {
        let config = config.normalized();
        Self {
            registry: PageRegistry::new(),
            selection: SelectionController::new(),
            overflow: OverflowLayout::new(),
            geometry: GeometryCoordinator::new(&config),
            menu: VisibilityMenu::new(config.show_menu_button),
            config,
            notifier: Notifier::new(),
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Notifications                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Register a listener called synchronously for every notification
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&NavBarEvent) + 'static,
    {
        self.notifier.subscribe(listener);
    }

    /// Keep dispatched notifications for `take_events`
    /// Off by default; turning it off discards what was not taken
    pub fn record_events(&mut self, enabled: bool) {
        self.notifier.set_recording(enabled);
    }

    pub fn is_recording_events(&self) -> bool {
        self.notifier.is_recording()
    }

    /// Notifications recorded since the last call; empty unless recording
    pub fn take_events(&mut self) -> Vec<NavBarEvent> {
        self.notifier.take()
    }

    /// Finish a public call: queue notifications, optionally run a layout pass, dispatch
    fn commit(&mut self, before: Option<CurrentPage>, relayout: bool) {
        let after = self.selection.current();
        if after != before {
            if let Some(current) = after {
                debug!(index = current.index, "current page changed");
                self.notifier.queue(NavBarEvent::CurrentChanged(current.index));
            }
        }

        if relayout {
            let visible = self.registry.visible_indices();
            self.geometry.relayout(visible.len());
            if let Some(capacity) = self.overflow.recompute(
                &visible,
                self.geometry.list_height(),
                self.geometry.row_height(),
                self.menu.is_enabled(),
            ) {
                self.notifier.queue(NavBarEvent::VisibleRowsChanged(capacity));
            }
            self.menu.rebuild(&self.registry);
        }

        self.notifier.flush();
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Page Registry                                          │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Append a page and return its index
    pub fn add_page(&mut self, content: C, title: impl Into<String>, icon: I) -> usize {
        self.insert_page(self.registry.len(), content, title, icon)
    }

    /// Insert a page at `index` (appending when out of range) and return where it landed
    pub fn insert_page(&mut self, index: usize, content: C, title: impl Into<String>, icon: I) -> usize {
        let before = self.selection.current();
        let index = self.registry.insert(index, content, title.into(), icon);
        debug!(index, count = self.registry.len(), "page inserted");

        if before.is_none() {
            self.selection.select(&self.registry, index);
        } else {
            self.selection.reconcile(&self.registry, 0);
        }
        self.commit(before, true);
        index
    }

    /// Detach the page at `index` and hand its content back
    /// Out-of-range indices are ignored
    pub fn remove_page(&mut self, index: usize) -> Option<C> {
        let before = self.selection.current();
        let ordinal = self.registry.visible_ordinal(index);
        let page = self.registry.remove(index)?;
        debug!(index, count = self.registry.len(), "page removed");

        self.selection.reconcile(&self.registry, ordinal);
        self.commit(before, true);
        Some(page.into_content())
    }

    pub fn count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn page(&self, index: usize) -> Result<&Page<C, I>> {
        self.registry.page(index)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page<C, I>> {
        self.registry.iter()
    }

    pub fn page_title(&self, index: usize) -> Result<&str> {
        self.registry.title(index)
    }

    pub fn page_icon(&self, index: usize) -> Result<&I> {
        self.registry.icon(index)
    }

    pub fn is_page_enabled(&self, index: usize) -> Result<bool> {
        self.registry.is_enabled(index)
    }

    pub fn is_page_visible(&self, index: usize) -> Result<bool> {
        self.registry.is_visible(index)
    }

    pub fn set_page_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        self.registry.set_title(index, title.into())?;
        self.menu.rebuild(&self.registry);
        Ok(())
    }

    pub fn set_page_icon(&mut self, index: usize, icon: I) -> Result<()> {
        self.registry.set_icon(index, icon)
    }

    /// Disabled pages stay in the layout but refuse UI activation
    pub fn set_page_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        self.registry.set_enabled(index, enabled)
    }

    /// Show or hide a page
    ///
    /// Hidden pages leave both the list and the toolbar. Hiding the current
    /// page moves the selection to the visible page that takes its place.
    pub fn set_page_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        let before = self.selection.current();
        let ordinal = self.registry.visible_ordinal(index);
        if !self.registry.set_visible(index, visible)? {
            return Ok(());
        }
        debug!(index, visible, "page visibility changed");

        if visible && before.is_none() {
            self.selection.select(&self.registry, index);
        } else {
            self.selection.reconcile(&self.registry, ordinal);
        }
        self.commit(before, true);
        Ok(())
    }

    /// Content of the page at `index`, `None` when out of range
    pub fn content(&self, index: usize) -> Option<&C> {
        self.registry.content(index)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                           Selection                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn current_index(&self) -> Option<usize> {
        self.selection.current_index()
    }

    pub fn current_content(&self) -> Option<&C> {
        self.current_index().and_then(|index| self.registry.content(index))
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current_index()
            .and_then(|index| self.registry.get(index))
            .map(|page| page.title())
    }

    /// Make `index` current; out-of-range and hidden pages are ignored
    pub fn set_current_index(&mut self, index: usize) {
        let before = self.selection.current();
        self.selection.select(&self.registry, index);
        self.commit(before, false);
    }

    /// Activate a page from the list, the toolbar or the keyboard
    /// Unlike `set_current_index`, disabled pages are refused
    pub fn activate(&mut self, index: usize) -> bool {
        let activatable = self
            .registry
            .get(index)
            .map(|page| page.is_visible() && page.is_enabled())
            .unwrap_or(false);
        if !activatable {
            return false;
        }
        self.set_current_index(index);
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.step(true)
    }

    pub fn select_previous(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> bool {
        let before = self.selection.current();
        let moved = self.selection.step(&self.registry, forward);
        self.commit(before, false);
        moved
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Overflow Layout                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Number of inline list rows
    pub fn visible_rows(&self) -> usize {
        self.overflow.capacity()
    }

    /// Request `rows` inline rows, clamped to the visible page count
    /// The request becomes a list pane height; the layout decides what fits
    pub fn set_visible_rows(&mut self, rows: usize) {
        let before = self.selection.current();
        let rows = rows.min(self.registry.visible_count());
        self.geometry
            .request_list_height(Some(row_span(rows, self.geometry.row_height())));
        self.commit(before, true);
    }

    pub fn row_height(&self) -> u16 {
        self.config.row_height
    }

    /// Change the row height, keeping the requested number of rows
    pub fn set_row_height(&mut self, row_height: u16) {
        let row_height = row_height.max(MIN_ROW_HEIGHT);
        if row_height == self.config.row_height {
            return;
        }
        let before = self.selection.current();
        let rows = self.overflow.capacity();
        self.config.row_height = row_height;
        self.geometry.set_row_height(row_height);
        if self.geometry.requested_list_height().is_some() {
            self.geometry
                .request_list_height(Some(row_span(rows, row_height)));
        }
        self.commit(before, true);
    }

    pub fn inline_pages(&self) -> &[usize] {
        self.overflow.inline_pages()
    }

    pub fn overflow_pages(&self) -> &[usize] {
        self.overflow.overflow_pages()
    }

    pub fn toolbar_items(&self) -> &[ToolbarItem] {
        self.overflow.toolbar()
    }

    /// Inline list rows, in list order
    pub fn list_rows(&self) -> Vec<ListRow<'_, I>> {
        self.overflow
            .inline_pages()
            .iter()
            .filter_map(|&index| self.registry.get(index))
            .map(|page| ListRow {
                page: page.position(),
                title: page.title(),
                icon: page.icon(),
                checked: self.selection.is_current(page.position()),
                enabled: page.is_enabled(),
            })
            .collect()
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                            Geometry                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Resize the control to `width` x `height` at the origin
    pub fn resize(&mut self, width: u16, height: u16) {
        self.set_area(Rect::new(0, 0, width, height));
    }

    /// Place the control in `area`
    /// Only a height change can change the number of rows, so anything else
    /// just moves the bands
    pub fn set_area(&mut self, area: Rect) {
        if area == self.geometry.area() {
            return;
        }
        let before = self.selection.current();
        if self.geometry.set_area(area) {
            self.commit(before, true);
        } else {
            self.geometry.relayout(self.registry.visible_count());
        }
    }

    pub fn area(&self) -> Rect {
        self.geometry.area()
    }

    pub fn bands(&self) -> &BandLayout {
        self.geometry.bands()
    }

    /// Preferred size; a folded control only needs a narrow strip
    pub fn size_hint(&self) -> (u16, u16) {
        if self.is_collapsed() {
            (COLLAPSED_WIDTH, SIZE_HINT.1)
        } else {
            SIZE_HINT
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.geometry.is_collapsed()
    }

    /// Fold the control down to the header, a title strip and the toolbar
    ///
    /// The list pane empties while folded, so every visible page moves to the
    /// toolbar. The requested row count comes back on unfold.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if collapsed == self.is_collapsed() {
            return;
        }
        let before = self.selection.current();
        self.geometry.set_collapsed(collapsed);
        debug!(collapsed, "navbar folded");
        self.commit(before, true);
    }

    /// Flip the folded state; returns the new state
    pub fn toggle_collapsed(&mut self) -> bool {
        let collapsed = !self.is_collapsed();
        self.set_collapsed(collapsed);
        collapsed
    }

    pub fn show_header(&self) -> bool {
        self.config.show_header
    }

    /// Hiding the header hands its height to the split region
    pub fn set_show_header(&mut self, show: bool) {
        if show == self.config.show_header {
            return;
        }
        let before = self.selection.current();
        self.config.show_header = show;
        self.geometry.set_header_visible(show);
        self.commit(before, true);
    }

    /// Start a splitter drag at row `y`
    pub fn press_splitter(&mut self, y: u16) {
        self.geometry.press_splitter(y);
    }

    /// Follow the pointer; the list pane moves in whole rows
    pub fn drag_splitter(&mut self, y: u16) {
        let before = self.selection.current();
        if self
            .geometry
            .drag_splitter(y, self.registry.visible_count())
        {
            self.commit(before, true);
        }
    }

    pub fn release_splitter(&mut self) {
        self.geometry.release_splitter();
    }

    pub fn is_dragging_splitter(&self) -> bool {
        self.geometry.is_dragging()
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Visibility Menu                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn show_menu_button(&self) -> bool {
        self.config.show_menu_button
    }

    /// Add or remove the trailing menu button
    pub fn set_show_menu_button(&mut self, show: bool) {
        if show == self.config.show_menu_button {
            return;
        }
        let before = self.selection.current();
        self.config.show_menu_button = show;
        self.menu.set_enabled(show);
        self.commit(before, true);
    }

    pub fn menu(&self) -> &VisibilityMenu {
        &self.menu
    }

    pub fn menu_entries(&self) -> &[MenuEntry] {
        self.menu.entries()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn open_menu(&mut self) -> bool {
        self.menu.open()
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn move_menu_highlight(&mut self, forward: bool) {
        self.menu.move_highlight(forward);
    }

    pub fn set_menu_highlight(&mut self, entry: usize) {
        self.menu.set_highlighted(entry);
    }

    /// Flip the visibility of the page behind a menu entry
    pub fn toggle_menu_entry(&mut self, page: usize) -> Result<()> {
        let visible = self.registry.is_visible(page)?;
        self.set_page_visible(page, !visible)
    }

    /// Flip the highlighted entry; does nothing when the menu is empty
    pub fn toggle_highlighted_entry(&mut self) {
        if let Some(page) = self.menu.highlighted_page() {
            if let Err(e) = self.toggle_menu_entry(page) {
                debug!(error = %e, "menu entry vanished before toggle");
            }
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Configuration                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn config(&self) -> &NavBarConfig {
        &self.config
    }

    pub fn list_icon_size(&self) -> IconSize {
        self.config.list_icon_size
    }

    pub fn set_list_icon_size(&mut self, size: IconSize) {
        self.config.list_icon_size = size;
    }

    pub fn toolbar_icon_size(&self) -> IconSize {
        self.config.toolbar_icon_size
    }

    pub fn set_toolbar_icon_size(&mut self, size: IconSize) {
        self.config.toolbar_icon_size = size;
    }
}

impl<C: PartialEq, I> NavBar<C, I> {
    /// Index of the page holding `content`
    pub fn index_of(&self, content: &C) -> Option<usize> {
        self.registry.index_of(content)
    }
}

impl<C, I> Default for NavBar<C, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NavBarError;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::events::NavBarEvent::{CurrentChanged, VisibleRowsChanged};

    fn config() -> NavBarConfig {
        NavBarConfig {
            row_height: 32,
            header_height: 10,
            handle_height: 1,
            show_header: false,
            show_menu_button: false,
            list_icon_size: (2, 1).into(),
            toolbar_icon_size: (1, 1).into(),
        }
    }

    fn recording() -> NavBar<u32> {
        let mut navbar = NavBar::with_config(config());
        navbar.record_events(true);
        navbar
    }

    /// Five pages "Page 1".."Page 5" with contents 1..=5
    fn five_pages() -> NavBar<u32> {
        let mut navbar = recording();
        for n in 1..=5u32 {
            navbar.add_page(n, format!("Page {}", n), ());
        }
        navbar.take_events();
        navbar
    }

    /// Room for exactly three 32-cell rows: 133 - toolbar 32 - handle 1 = 100
    fn three_rows(navbar: &mut NavBar<u32>) {
        navbar.resize(40, 133);
    }

    fn assert_consistent(navbar: &NavBar<u32>) {
        for (i, page) in navbar.pages().enumerate() {
            assert_eq!(page.position(), i);
        }
        let visible: Vec<usize> = navbar
            .pages()
            .filter(|p| p.is_visible())
            .map(|p| p.position())
            .collect();
        match navbar.current_index() {
            Some(index) => assert!(visible.contains(&index)),
            None => assert!(visible.is_empty()),
        }
        let mut all = navbar.inline_pages().to_vec();
        all.extend(navbar.overflow_pages());
        assert_eq!(all, visible);
        assert!(navbar.visible_rows() <= visible.len());
    }

    #[test]
    fn test_first_page_becomes_current() {
        let mut navbar = recording();
        assert_eq!(navbar.current_index(), None);
        navbar.add_page(7, "Only", ());
        assert_eq!(navbar.current_index(), Some(0));
        assert_eq!(navbar.current_content(), Some(&7));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(0)]);
    }

    #[test]
    fn test_five_pages_three_rows() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);

        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(3)]);
        assert_eq!(navbar.inline_pages(), &[0, 1, 2]);
        assert_eq!(
            navbar.toolbar_items(),
            &[ToolbarItem::Spacer, ToolbarItem::Page(3), ToolbarItem::Page(4)]
        );
        let titles: Vec<&str> = navbar.list_rows().iter().map(|row| row.title).collect();
        assert_eq!(titles, vec!["Page 1", "Page 2", "Page 3"]);
        assert!(navbar.list_rows()[0].checked);
    }

    #[test]
    fn test_remove_current_selects_page_now_at_same_index() {
        let mut navbar = five_pages();
        navbar.set_current_index(2);
        assert_eq!(navbar.take_events(), vec![CurrentChanged(2)]);

        assert_eq!(navbar.remove_page(2), Some(3));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(2)]);
        assert_eq!(navbar.current_content(), Some(&4));
        assert_consistent(&navbar);
    }

    #[test]
    fn test_remove_last_current_clamps() {
        let mut navbar = five_pages();
        navbar.set_current_index(4);
        navbar.take_events();

        navbar.remove_page(4);
        assert_eq!(navbar.current_index(), Some(3));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(3)]);
    }

    #[test]
    fn test_remove_before_current_keeps_same_page() {
        let mut navbar = five_pages();
        navbar.set_current_index(3);
        navbar.take_events();

        navbar.remove_page(0);
        assert_eq!(navbar.current_content(), Some(&4));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(2)]);
    }

    #[test]
    fn test_remove_everything_leaves_no_current() {
        let mut navbar = five_pages();
        while !navbar.is_empty() {
            navbar.remove_page(0);
            assert_consistent(&navbar);
        }
        assert_eq!(navbar.current_index(), None);
        assert_eq!(navbar.current_content(), None);
    }

    #[test]
    fn test_set_visible_rows_zero() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        navbar.set_visible_rows(0);
        assert!(navbar.inline_pages().is_empty());
        assert_eq!(navbar.overflow_pages(), &[0, 1, 2, 3, 4]);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(0)]);
        assert_eq!(navbar.current_index(), Some(0));
    }

    #[test]
    fn test_set_visible_rows_clamps_to_visible_pages_and_room() {
        let mut navbar = five_pages();
        navbar.resize(40, 400);
        navbar.set_visible_rows(2);
        assert_eq!(navbar.visible_rows(), 2);

        navbar.set_visible_rows(99);
        assert_eq!(navbar.visible_rows(), 5);

        three_rows(&mut navbar);
        navbar.set_visible_rows(5);
        assert_eq!(navbar.visible_rows(), 3);
    }

    #[test]
    fn test_width_only_resize_is_silent() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        navbar.resize(80, 133);
        assert!(navbar.take_events().is_empty());
        assert_eq!(navbar.bands().toolbar.width, 80);
        assert_eq!(navbar.visible_rows(), 3);
    }

    #[test]
    fn test_height_change_without_capacity_change_is_silent() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        navbar.resize(40, 140);
        assert!(navbar.take_events().is_empty());
        navbar.resize(40, 170);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(4)]);
    }

    #[test]
    fn test_hiding_pages() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        navbar.set_page_visible(1, false).unwrap();
        assert_eq!(navbar.inline_pages(), &[0, 2, 3]);
        assert_eq!(navbar.overflow_pages(), &[4]);
        assert_eq!(navbar.current_index(), Some(0));
        assert!(navbar.take_events().is_empty());

        navbar.set_page_visible(0, false).unwrap();
        assert_eq!(navbar.current_index(), Some(2));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(2)]);
        assert_consistent(&navbar);

        // hiding an already hidden page is a no-op
        navbar.set_page_visible(0, false).unwrap();
        assert!(navbar.take_events().is_empty());
    }

    #[test]
    fn test_hiding_everything_then_showing_one() {
        let mut navbar = five_pages();
        for index in 0..5 {
            navbar.set_page_visible(index, false).unwrap();
        }
        assert_eq!(navbar.current_index(), None);
        assert!(navbar.toolbar_items().iter().all(|item| *item == ToolbarItem::Spacer));
        navbar.take_events();

        navbar.set_page_visible(3, true).unwrap();
        assert_eq!(navbar.current_index(), Some(3));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(3)]);
    }

    #[test]
    fn test_hidden_pages_cannot_become_current() {
        let mut navbar = five_pages();
        navbar.set_page_visible(4, false).unwrap();
        navbar.take_events();

        navbar.set_current_index(4);
        assert_eq!(navbar.current_index(), Some(0));
        assert!(!navbar.activate(4));
        assert!(navbar.take_events().is_empty());
    }

    #[test]
    fn test_tolerant_paths_ignore_bad_indices() {
        let mut navbar = five_pages();
        assert_eq!(navbar.remove_page(5), None);
        navbar.set_current_index(17);
        navbar.set_visible_rows(usize::MAX);
        assert_eq!(navbar.count(), 5);
        assert_eq!(navbar.current_index(), Some(0));
        assert!(navbar.take_events().is_empty());
    }

    #[test]
    fn test_strict_paths_report_invalid_index() {
        let mut navbar = five_pages();
        assert_eq!(
            navbar.set_page_title(9, "Nine"),
            Err(NavBarError::InvalidIndex { index: 9, count: 5 })
        );
        assert!(navbar.page_icon(5).is_err());
        assert!(navbar.set_page_enabled(5, false).is_err());
        assert!(navbar.set_page_visible(5, false).is_err());
        assert!(navbar.is_page_visible(5).is_err());
        assert!(navbar.toggle_menu_entry(5).is_err());

        navbar.set_page_title(1, "Inbox").unwrap();
        assert_eq!(navbar.page_title(1), Ok("Inbox"));
    }

    #[test]
    fn test_setting_same_index_does_not_notify() {
        let mut navbar = five_pages();
        navbar.set_current_index(0);
        assert!(navbar.take_events().is_empty());
        navbar.set_current_index(1);
        navbar.set_current_index(1);
        assert_eq!(navbar.take_events(), vec![CurrentChanged(1)]);
    }

    #[test]
    fn test_insert_before_current_shifts_index() {
        let mut navbar = five_pages();
        navbar.set_current_index(2);
        navbar.take_events();

        let index = navbar.insert_page(0, 0, "Page 0", ());
        assert_eq!(index, 0);
        assert_eq!(navbar.current_index(), Some(3));
        assert_eq!(navbar.current_content(), Some(&3));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(3)]);

        // out-of-range insert appends
        assert_eq!(navbar.insert_page(99, 6, "Page 6", ()), 6);
        assert!(navbar.take_events().is_empty());
    }

    #[test]
    fn test_disabled_pages_refuse_ui_activation_only() {
        let mut navbar = five_pages();
        navbar.set_page_enabled(3, false).unwrap();

        assert!(!navbar.activate(3));
        assert_eq!(navbar.current_index(), Some(0));

        navbar.set_current_index(3);
        assert_eq!(navbar.current_index(), Some(3));
        assert_eq!(navbar.take_events(), vec![CurrentChanged(3)]);
    }

    #[test]
    fn test_keyboard_navigation_skips_disabled() {
        let mut navbar = five_pages();
        navbar.set_page_enabled(1, false).unwrap();
        assert!(navbar.select_next());
        assert_eq!(navbar.current_index(), Some(2));
        assert!(navbar.select_previous());
        assert_eq!(navbar.current_index(), Some(0));
        assert!(navbar.select_previous());
        assert_eq!(navbar.current_index(), Some(4));
    }

    #[test]
    fn test_notification_order_within_one_call() {
        let mut navbar = recording();
        three_rows_empty(&mut navbar);

        navbar.add_page(1, "Page 1", ());
        assert_eq!(
            navbar.take_events(),
            vec![CurrentChanged(0), VisibleRowsChanged(1)]
        );
    }

    fn three_rows_empty(navbar: &mut NavBar<u32>) {
        navbar.resize(40, 133);
        navbar.take_events();
    }

    #[test]
    fn test_listener_sees_consistent_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut navbar = five_pages();
        navbar.subscribe(move |event| sink.borrow_mut().push(*event));
        three_rows(&mut navbar);
        navbar.remove_page(0);

        assert_eq!(
            *seen.borrow(),
            vec![VisibleRowsChanged(3), CurrentChanged(0)]
        );
    }

    #[test]
    fn test_row_height_change() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        // unrequested list fills the room: smaller rows fit more pages
        navbar.set_row_height(16);
        assert_eq!(navbar.row_height(), 16);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(5)]);

        // an explicit row request survives row height changes
        navbar.set_visible_rows(2);
        navbar.take_events();
        navbar.set_row_height(20);
        assert_eq!(navbar.visible_rows(), 2);
        assert!(navbar.take_events().is_empty());

        navbar.set_row_height(0);
        assert_eq!(navbar.row_height(), MIN_ROW_HEIGHT);
    }

    #[test]
    fn test_header_toggle_reclaims_height() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        // header of 10 cells leaves room for 90: two rows
        navbar.set_show_header(true);
        assert_eq!(navbar.bands().header.height, 10);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(2)]);

        navbar.set_show_header(false);
        assert_eq!(navbar.bands().header.height, 0);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(3)]);
    }

    #[test]
    fn test_splitter_drag_moves_whole_rows() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.take_events();

        let handle_y = navbar.bands().handle.y;
        navbar.press_splitter(handle_y);
        assert!(navbar.is_dragging_splitter());

        navbar.drag_splitter(handle_y + 10);
        assert!(navbar.take_events().is_empty());

        navbar.drag_splitter(handle_y + 32);
        assert_eq!(navbar.visible_rows(), 2);
        assert_eq!(navbar.bands().list.height, 64);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(2)]);

        navbar.release_splitter();
        assert!(!navbar.is_dragging_splitter());
    }

    #[test]
    fn test_menu_button_and_entries() {
        let mut navbar = five_pages();
        assert!(!navbar.open_menu());

        navbar.set_show_menu_button(true);
        assert_eq!(navbar.toolbar_items().last(), Some(&ToolbarItem::MenuButton));
        assert!(navbar.open_menu());
        assert_eq!(navbar.menu_entries().len(), 5);

        navbar.toggle_menu_entry(2).unwrap();
        assert!(!navbar.menu_entries()[2].checked);
        assert_eq!(navbar.is_page_visible(2), Ok(false));
        assert!(!navbar.overflow_pages().contains(&2));

        navbar.set_menu_highlight(2);
        navbar.toggle_highlighted_entry();
        assert!(navbar.menu_entries()[2].checked);

        navbar.set_show_menu_button(false);
        assert!(!navbar.is_menu_open());
        assert!(!navbar.toolbar_items().contains(&ToolbarItem::MenuButton));
    }

    #[test]
    fn test_index_of_and_content() {
        let navbar = five_pages();
        assert_eq!(navbar.index_of(&4), Some(3));
        assert_eq!(navbar.index_of(&42), None);
        assert_eq!(navbar.content(0), Some(&1));
        assert_eq!(navbar.content(5), None);
        assert_eq!(navbar.size_hint(), (24, 20));
    }

    #[test]
    fn test_mixed_sequence_keeps_invariants() {
        let mut navbar = recording();
        three_rows_empty(&mut navbar);
        for step in 0..60u32 {
            let n = navbar.count();
            match step % 6 {
                0 | 1 => {
                    navbar.add_page(step, format!("P{}", step), ());
                }
                2 => {
                    navbar.insert_page((step as usize * 7) % (n + 2), step, "I", ());
                }
                3 => {
                    navbar.remove_page((step as usize * 3) % (n + 1));
                }
                4 if n > 0 => {
                    let index = (step as usize) % n;
                    let visible = navbar.is_page_visible(index).unwrap();
                    navbar.set_page_visible(index, !visible).unwrap();
                }
                _ => {
                    navbar.set_current_index(step as usize % (n + 1));
                }
            }
            assert_consistent(&navbar);
            let rows_events = navbar
                .take_events()
                .into_iter()
                .filter(|e| matches!(e, VisibleRowsChanged(_)))
                .count();
            assert!(rows_events <= 1);
        }
    }

    #[test]
    fn test_listener_only_navbar_retains_no_events() {
        let seen = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&seen);
        let mut navbar: NavBar<u32> = NavBar::with_config(config());
        navbar.subscribe(move |_| *sink.borrow_mut() += 1);
        navbar.add_page(1, "Page 1", ());
        navbar.add_page(2, "Page 2", ());

        for i in 0..10_000 {
            navbar.set_current_index(i % 2);
        }
        assert_eq!(*seen.borrow(), 10_000);
        assert!(!navbar.is_recording_events());
        assert!(navbar.take_events().is_empty());
    }

    #[test]
    fn test_collapse_moves_every_page_to_toolbar() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.set_visible_rows(2);
        navbar.take_events();

        assert!(navbar.toggle_collapsed());
        assert!(navbar.is_collapsed());
        assert_eq!(navbar.size_hint(), (COLLAPSED_WIDTH, 20));
        assert_eq!(navbar.bands().list.height, 0);
        assert_eq!(navbar.bands().handle.height, 0);
        assert!(navbar.inline_pages().is_empty());
        assert_eq!(navbar.overflow_pages(), &[0, 1, 2, 3, 4]);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(0)]);

        // folding does not touch the selection
        assert_eq!(navbar.current_index(), Some(0));
        navbar.set_collapsed(true);
        assert!(navbar.take_events().is_empty());

        assert!(!navbar.toggle_collapsed());
        assert_eq!(navbar.inline_pages(), &[0, 1]);
        assert_eq!(navbar.take_events(), vec![VisibleRowsChanged(2)]);
        assert_eq!(navbar.size_hint(), SIZE_HINT);
    }

    #[test]
    fn test_collapsed_ignores_splitter() {
        let mut navbar = five_pages();
        three_rows(&mut navbar);
        navbar.set_collapsed(true);

        navbar.press_splitter(50);
        assert!(!navbar.is_dragging_splitter());
        navbar.drag_splitter(0);
        assert_eq!(navbar.visible_rows(), 0);
    }
}
