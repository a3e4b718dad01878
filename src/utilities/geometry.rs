// Geometry Coordinator
// Places the header, content, splitter handle, list pane and toolbar bands

use ratatui::layout::Rect;

use crate::core::app_config::{NavBarConfig, MIN_ROW_HEIGHT};

/// Band rectangles of the control, top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandLayout {
    pub header: Rect,
    pub content: Rect,
    pub handle: Rect,
    pub list: Rect,
    pub toolbar: Rect,
}

/// An in-progress splitter drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SplitterDrag {
    origin_y: u16,
    origin_rows: u16,
}

/// Owns the control's area and turns it into bands
#[derive(Debug, Clone)]
pub struct GeometryCoordinator {
    area: Rect,
    row_height: u16,
    header_height: u16,
    handle_height: u16,
    header_visible: bool,
    /// Folded down to the header, a title strip and the toolbar
    collapsed: bool,
    /// Preferred list pane height; `None` lets the list take every row that fits
    requested_list_height: Option<u16>,
    bands: BandLayout,
    drag: Option<SplitterDrag>,
}

impl GeometryCoordinator {
    pub fn new(config: &NavBarConfig) -> Self {
        Self {
            area: Rect::default(),
            row_height: config.row_height.max(MIN_ROW_HEIGHT),
            header_height: config.header_height,
            handle_height: config.handle_height,
            header_visible: config.show_header,
            collapsed: false,
            requested_list_height: None,
            bands: BandLayout::default(),
            drag: None,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn bands(&self) -> &BandLayout {
        &self.bands
    }

    /// Effective list pane height of the last layout pass
    pub fn list_height(&self) -> u16 {
        self.bands.list.height
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn requested_list_height(&self) -> Option<u16> {
        self.requested_list_height
    }

    /// Store a new container area; returns true if the height changed
    pub fn set_area(&mut self, area: Rect) -> bool {
        let height_changed = area.height != self.area.height;
        self.area = area;
        height_changed
    }

    pub fn set_row_height(&mut self, row_height: u16) {
        self.row_height = row_height.max(MIN_ROW_HEIGHT);
    }

    pub fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = visible;
    }

    /// Fold or unfold; folding ends any splitter drag
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        if collapsed {
            self.drag = None;
        }
    }

    pub fn request_list_height(&mut self, height: Option<u16>) {
        self.requested_list_height = height;
    }

    /// Recompute every band in order: header, split region, toolbar
    pub fn relayout(&mut self, visible_count: usize) -> &BandLayout {
        let area = self.area;

        let header_height = if self.header_visible {
            self.header_height.min(area.height)
        } else {
            0
        };
        let header = Rect::new(area.x, area.y, area.width, header_height);

        let remaining = area.height - header_height;
        let toolbar_height = self.row_height.min(remaining);
        let split_height = remaining - toolbar_height;
        let split_y = area.y.saturating_add(header_height);

        // Folded: the whole split region is the title strip
        let handle_height = if self.collapsed {
            0
        } else {
            self.handle_height.min(split_height)
        };
        let room = split_height - handle_height;
        let max_list = if self.collapsed {
            0
        } else {
            row_span(visible_count, self.row_height)
        };
        // List pane always holds a whole number of rows
        let list_height = self
            .requested_list_height
            .unwrap_or(u16::MAX)
            .min(room)
            .min(max_list)
            / self.row_height
            * self.row_height;
        let content_height = room - list_height;

        let content = Rect::new(area.x, split_y, area.width, content_height);
        let handle = Rect::new(
            area.x,
            split_y.saturating_add(content_height),
            area.width,
            handle_height,
        );
        let list = Rect::new(
            area.x,
            handle.y.saturating_add(handle_height),
            area.width,
            list_height,
        );
        let toolbar = Rect::new(
            area.x,
            split_y.saturating_add(split_height),
            area.width,
            toolbar_height,
        );

        self.bands = BandLayout {
            header,
            content,
            handle,
            list,
            toolbar,
        };
        &self.bands
    }

    /// Room the split region leaves for the list pane
    fn list_room(&self) -> u16 {
        self.bands.content.height + self.bands.list.height
    }

    /// Start dragging the splitter at row `y`
    pub fn press_splitter(&mut self, y: u16) {
        if self.collapsed {
            return;
        }
        self.drag = Some(SplitterDrag {
            origin_y: y,
            origin_rows: self.bands.list.height / self.row_height,
        });
    }

    /// Follow the pointer to row `y`, moving the split point in whole rows
    /// Returns true if the requested list height changed
    pub fn drag_splitter(&mut self, y: u16, visible_count: usize) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };

        // Dragging up grows the list pane
        let delta = drag.origin_y as i32 - y as i32;
        let row_delta = delta / self.row_height as i32;
        let max_rows = (self.list_room() / self.row_height).min(clamp_u16(visible_count)) as i32;
        let rows = (drag.origin_rows as i32 + row_delta).clamp(0, max_rows.max(0));

        let height = Some(rows as u16 * self.row_height);
        if height == self.requested_list_height {
            return false;
        }
        self.requested_list_height = height;
        true
    }

    pub fn release_splitter(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

/// Height of `rows` rows, saturating at u16::MAX
pub fn row_span(rows: usize, row_height: u16) -> u16 {
    (rows as u64 * row_height as u64).min(u16::MAX as u64) as u16
}
