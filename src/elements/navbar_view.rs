// Navbar View
// Renders a NavBar into a frame and builds the hit map used for mouse handling
//
// Usage:
//   let view = NavBarView::new(&theme);
//   let hits = view.render(f, area, &mut navbar, |f, rect, content| { ... });
//   // Later, on a mouse press...
//   hits.press(&mut navbar, column, row);

use ratatui::{layout::Rect, Frame};

use super::header::render_header;
use super::icon::IconGlyph;
use super::menu_popup::{popup_rect, render_menu_popup};
use super::page_list::render_page_list;
use super::splitter::render_splitter;
use super::title_strip::render_title_strip;
use super::tool_bar::render_toolbar;
use crate::managers::NavBar;
use crate::utilities::{rect_contains, DimmingContext, NavBarTheme, ToolbarItem};

/// What a screen cell of the control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Header,
    /// Header button folding or unfolding the control
    FoldButton,
    Content,
    /// Vertical title shown in place of the content while folded
    TitleStrip,
    Splitter,
    /// Inline list row of this page
    ListRow(usize),
    /// Overflow toolbar entry of this page
    ToolbarPage(usize),
    /// Marker standing in for toolbar entries that did not fit
    ToolbarExtension,
    MenuButton,
    /// Visibility menu entry of this page
    MenuEntry(usize),
}

/// Clickable rectangles of the last render, in paint order
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    targets: Vec<(HitTarget, Rect)>,
    /// Overflow pages the toolbar had no room for
    hidden: Vec<usize>,
}

impl HitMap {
    pub fn push(&mut self, target: HitTarget, rect: Rect) {
        self.targets.push((target, rect));
    }

    /// Topmost target under (x, y)
    pub fn target_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(_, rect)| rect_contains(*rect, x, y))
            .map(|(target, _)| *target)
    }

    /// Pages dropped from the toolbar, reachable through the extension marker
    pub fn hidden_pages(&self) -> &[usize] {
        &self.hidden
    }

    /// Apply a left-button press at (x, y) to the navbar
    /// A press anywhere outside the open menu closes it
    pub fn press<C, I>(&self, navbar: &mut NavBar<C, I>, x: u16, y: u16) -> Option<HitTarget> {
        let target = self.target_at(x, y);
        let keeps_menu = matches!(target, Some(HitTarget::MenuEntry(_)) | Some(HitTarget::MenuButton));
        if navbar.is_menu_open() && !keeps_menu {
            navbar.close_menu();
            return target;
        }

        match target? {
            HitTarget::ListRow(page) | HitTarget::ToolbarPage(page) => {
                navbar.activate(page);
            }
            HitTarget::ToolbarExtension => {
                self.activate_next_hidden(navbar);
            }
            HitTarget::MenuButton => {
                navbar.toggle_menu();
            }
            HitTarget::MenuEntry(page) => {
                navbar.set_menu_highlight(page);
                if let Err(e) = navbar.toggle_menu_entry(page) {
                    tracing::debug!(error = %e, "menu entry vanished before toggle");
                }
            }
            HitTarget::FoldButton => {
                navbar.toggle_collapsed();
            }
            HitTarget::TitleStrip => navbar.set_collapsed(false),
            HitTarget::Splitter => navbar.press_splitter(y),
            HitTarget::Header | HitTarget::Content => {}
        }
        target
    }

    /// Activate the enabled hidden page after the current one, wrapping around
    fn activate_next_hidden<C, I>(&self, navbar: &mut NavBar<C, I>) -> Option<usize> {
        let count = self.hidden.len();
        let start = navbar
            .current_index()
            .and_then(|current| self.hidden.iter().position(|&page| page == current))
            .map_or(0, |position| position + 1);
        let page = (0..count)
            .map(|n| self.hidden[(start + n) % count])
            .find(|&page| navbar.is_page_enabled(page).unwrap_or(false))?;
        navbar.activate(page).then_some(page)
    }
}

/// Renders the navbar bands with a theme
pub struct NavBarView<'a> {
    theme: &'a NavBarTheme,
}

impl<'a> NavBarView<'a> {
    pub fn new(theme: &'a NavBarTheme) -> Self {
        Self { theme }
    }

    /// Lay the navbar out in `area` and draw it
    ///
    /// `content` draws the current page body into the content band. It is
    /// not called while the control is folded.
    pub fn render<C, I, F>(&self, f: &mut Frame, area: Rect, navbar: &mut NavBar<C, I>, content: F) -> HitMap
    where
        I: IconGlyph,
        F: FnOnce(&mut Frame, Rect, Option<&C>),
    {
        navbar.set_area(area);
        let navbar: &NavBar<C, I> = navbar;
        let bands = *navbar.bands();
        let collapsed = navbar.is_collapsed();
        let dimming = DimmingContext::new(navbar.is_menu_open());
        let mut hits = HitMap::default();

        if bands.header.height > 0 {
            let button = render_header(f, bands.header, navbar.current_title(), collapsed, self.theme, &dimming);
            hits.push(HitTarget::Header, bands.header);
            hits.push(HitTarget::FoldButton, button);
        }

        if collapsed {
            render_title_strip(f, bands.content, navbar.current_title(), self.theme, &dimming);
            hits.push(HitTarget::TitleStrip, bands.content);
        } else {
            content(f, bands.content, navbar.current_content());
            hits.push(HitTarget::Content, bands.content);

            render_splitter(f, bands.handle, navbar.is_dragging_splitter(), self.theme, &dimming);
            hits.push(HitTarget::Splitter, bands.handle);

            let rows = navbar.list_rows();
            let placed_rows = render_page_list(
                f,
                bands.list,
                &rows,
                navbar.row_height(),
                navbar.list_icon_size(),
                self.theme,
                &dimming,
            );
            for (page, rect) in placed_rows {
                hits.push(HitTarget::ListRow(page), rect);
            }
        }

        let current = navbar.current_index();
        let placement = render_toolbar(
            f,
            bands.toolbar,
            navbar.toolbar_items(),
            navbar.toolbar_icon_size(),
            |index| {
                navbar
                    .page(index)
                    .ok()
                    .map(|page| (page.icon(), current == Some(index)))
            },
            navbar.is_menu_open(),
            self.theme,
            &dimming,
        );
        let mut menu_button = None;
        for (item, rect) in placement.items {
            match item {
                ToolbarItem::Spacer => {}
                ToolbarItem::Page(page) => hits.push(HitTarget::ToolbarPage(page), rect),
                ToolbarItem::MenuButton => {
                    hits.push(HitTarget::MenuButton, rect);
                    menu_button = Some(rect);
                }
            }
        }
        if let Some(rect) = placement.extension {
            hits.push(HitTarget::ToolbarExtension, rect);
        }
        hits.hidden = placement.hidden;

        if let Some(anchor) = menu_button.filter(|_| navbar.is_menu_open()) {
            // The popup may spill out of a narrow control onto the rest of the frame
            let entries = navbar.menu_entries();
            let popup = popup_rect(anchor, f.area(), entries);
            let placed = render_menu_popup(f, popup, entries, navbar.menu().highlighted(), self.theme);
            for (page, rect) in placed {
                hits.push(HitTarget::MenuEntry(page), rect);
            }
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::core::app_config::NavBarConfig;
    use crate::managers::COLLAPSED_WIDTH;
    use ratatui::{backend::TestBackend, widgets::Paragraph, Terminal};

    fn navbar() -> NavBar<String, char> {
        let config = NavBarConfig {
            row_height: 1,
            header_height: 1,
            handle_height: 1,
            show_header: true,
            show_menu_button: true,
            list_icon_size: (2, 1).into(),
            toolbar_icon_size: (1, 1).into(),
        };
        let mut navbar = NavBar::with_config(config);
        for (n, icon) in ['✉', '▦', '☺', '✓', '✎'].into_iter().enumerate() {
            navbar.add_page(format!("This is page {}", n + 1), format!("Page {}", n + 1), icon);
        }
        navbar
    }

    fn draw(terminal: &mut Terminal<TestBackend>, navbar: &mut NavBar<String, char>) -> HitMap {
        let theme = NavBarTheme::default();
        let view = NavBarView::new(&theme);
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                let area = f.area();
                hits = view.render(f, area, navbar, |f, rect, content| {
                    if let Some(text) = content {
                        f.render_widget(Paragraph::new(text.as_str()), rect);
                    }
                });
            })
            .unwrap();
        hits
    }

    fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_renders_all_bands_at_size_hint() {
        let mut navbar = navbar();
        let (width, height) = navbar.size_hint();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        let hits = draw(&mut terminal, &mut navbar);

        // header 1, content 12, handle 1, list 5, toolbar 1
        assert!(line(&terminal, 0).contains("Page 1"));
        assert!(line(&terminal, 0).contains(FOLD_GLYPH));
        assert!(line(&terminal, 1).contains("This is page 1"));
        assert!(line(&terminal, 14).contains("Page 1"));
        assert!(line(&terminal, 18).contains("Page 5"));
        assert!(line(&terminal, 19).contains(MENU_BUTTON_GLYPH));
        assert!(!line(&terminal, 19).contains(EXTENSION_GLYPH));

        assert_eq!(hits.target_at(3, 0), Some(HitTarget::Header));
        assert_eq!(hits.target_at(22, 0), Some(HitTarget::FoldButton));
        assert_eq!(hits.target_at(3, 15), Some(HitTarget::ListRow(1)));
        assert_eq!(hits.target_at(3, 13), Some(HitTarget::Splitter));
        assert_eq!(hits.target_at(22, 19), Some(HitTarget::MenuButton));
        assert!(hits.hidden_pages().is_empty());
    }

    #[test]
    fn test_overflow_entries_and_clicks() {
        let mut navbar = navbar();
        let mut terminal = Terminal::new(TestBackend::new(24, 6)).unwrap();

        let hits = draw(&mut terminal, &mut navbar);
        assert_eq!(navbar.visible_rows(), 3);
        assert!(line(&terminal, 5).contains('✓'));
        assert!(line(&terminal, 5).contains('✎'));

        assert_eq!(hits.press(&mut navbar, 16, 5), Some(HitTarget::ToolbarPage(3)));
        assert_eq!(navbar.current_index(), Some(3));

        assert_eq!(hits.press(&mut navbar, 1, 3), Some(HitTarget::ListRow(1)));
        assert_eq!(navbar.current_index(), Some(1));
    }

    #[test]
    fn test_menu_popup_toggles_visibility() {
        let mut navbar = navbar();
        let mut terminal = Terminal::new(TestBackend::new(24, 6)).unwrap();

        let hits = draw(&mut terminal, &mut navbar);
        assert_eq!(hits.press(&mut navbar, 22, 5), Some(HitTarget::MenuButton));
        assert!(navbar.is_menu_open());

        let hits = draw(&mut terminal, &mut navbar);
        // popup spans columns 11..24 and rows 0..5, room for three entries
        assert!(line(&terminal, 1).contains("[x] Page 1"));
        assert_eq!(hits.target_at(12, 3), Some(HitTarget::MenuEntry(2)));
        assert_eq!(hits.target_at(10, 1), Some(HitTarget::Splitter));

        assert_eq!(hits.press(&mut navbar, 13, 1), Some(HitTarget::MenuEntry(0)));
        assert_eq!(navbar.is_page_visible(0), Ok(false));
        assert_eq!(navbar.current_index(), Some(1));

        // a press elsewhere closes the menu without activating anything
        hits.press(&mut navbar, 1, 3);
        assert!(!navbar.is_menu_open());
        assert_eq!(navbar.current_index(), Some(1));
    }

    #[test]
    fn test_splitter_press_starts_drag() {
        let mut navbar = navbar();
        let mut terminal = Terminal::new(TestBackend::new(24, 20)).unwrap();

        let hits = draw(&mut terminal, &mut navbar);
        assert_eq!(hits.press(&mut navbar, 0, 13), Some(HitTarget::Splitter));
        assert!(navbar.is_dragging_splitter());

        navbar.drag_splitter(15);
        navbar.release_splitter();
        assert_eq!(navbar.visible_rows(), 3);
    }

    #[test]
    fn test_hidden_header_gives_row_to_content() {
        let mut navbar = navbar();
        let mut terminal = Terminal::new(TestBackend::new(24, 20)).unwrap();

        let hits = draw(&mut terminal, &mut navbar);
        assert_eq!(hits.target_at(3, 0), Some(HitTarget::Header));

        navbar.set_show_header(false);
        let hits = draw(&mut terminal, &mut navbar);
        assert_eq!(hits.target_at(3, 0), Some(HitTarget::Content));
        assert!(line(&terminal, 0).contains("This is page 1"));
    }

    #[test]
    fn test_fold_button_collapses_to_title_strip() {
        let mut navbar = navbar();
        let mut terminal = Terminal::new(TestBackend::new(24, 20)).unwrap();
        let hits = draw(&mut terminal, &mut navbar);

        assert_eq!(hits.press(&mut navbar, 22, 0), Some(HitTarget::FoldButton));
        assert!(navbar.is_collapsed());
        assert_eq!(navbar.visible_rows(), 0);

        let (width, height) = navbar.size_hint();
        assert_eq!(width, COLLAPSED_WIDTH);
        let mut narrow = Terminal::new(TestBackend::new(width, height)).unwrap();
        let hits = draw(&mut narrow, &mut navbar);

        assert!(line(&narrow, 0).contains(UNFOLD_GLYPH));
        assert_eq!(line(&narrow, 2).trim(), "P");
        assert_eq!(line(&narrow, 7).trim(), "1");
        assert!(line(&narrow, 19).contains(EXTENSION_GLYPH));
        assert!(line(&narrow, 19).contains(MENU_BUTTON_GLYPH));

        assert_eq!(hits.press(&mut navbar, 2, 8), Some(HitTarget::TitleStrip));
        assert!(!navbar.is_collapsed());
        assert_eq!(navbar.visible_rows(), 5);
    }

    #[test]
    fn test_extension_marker_cycles_dropped_pages() {
        let mut navbar = navbar();
        navbar.set_page_enabled(2, false).unwrap();
        navbar.set_collapsed(true);
        let mut terminal = Terminal::new(TestBackend::new(COLLAPSED_WIDTH, 20)).unwrap();
        let hits = draw(&mut terminal, &mut navbar);

        assert_eq!(hits.hidden_pages(), &[0, 1, 2, 3, 4]);
        assert_eq!(hits.press(&mut navbar, 0, 19), Some(HitTarget::ToolbarExtension));
        assert_eq!(navbar.current_index(), Some(1));
        // disabled pages are skipped
        hits.press(&mut navbar, 1, 19);
        assert_eq!(navbar.current_index(), Some(3));
        hits.press(&mut navbar, 0, 19);
        hits.press(&mut navbar, 0, 19);
        assert_eq!(navbar.current_index(), Some(0));
    }
}
