// Overflow Layout Engine
// Splits the visible pages between inline list rows and overflow toolbar entries

use crate::core::app_config::MIN_ROW_HEIGHT;

/// Number of list rows that fit `available_height`, clamped to the visible page count
pub fn capacity_for(available_height: u16, row_height: u16, visible_count: usize) -> usize {
    let rows = (available_height / row_height.max(MIN_ROW_HEIGHT)) as usize;
    rows.min(visible_count)
}

/// One entry of the overflow toolbar, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    /// Flexible spacer pushing the entries to the trailing edge
    Spacer,
    /// Overflow entry for the page at this registry index
    Page(usize),
    /// Button opening the page visibility menu
    MenuButton,
}

/// Inline/overflow split of the visible pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowPartition {
    /// Registry indices rendered as list rows
    pub inline: Vec<usize>,
    /// Registry indices rendered as toolbar entries
    pub overflow: Vec<usize>,
}

impl OverflowPartition {
    /// Split `visible` (registry indices in list order) after `capacity` entries
    pub fn split(visible: &[usize], capacity: usize) -> Self {
        let capacity = capacity.min(visible.len());
        Self {
            inline: visible[..capacity].to_vec(),
            overflow: visible[capacity..].to_vec(),
        }
    }
}

/// Holds the last computed partition and the toolbar built from it
#[derive(Debug, Clone, Default)]
pub struct OverflowLayout {
    capacity: usize,
    partition: OverflowPartition,
    toolbar: Vec<ToolbarItem>,
}

impl OverflowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline capacity of the last pass
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn inline_pages(&self) -> &[usize] {
        &self.partition.inline
    }

    pub fn overflow_pages(&self) -> &[usize] {
        &self.partition.overflow
    }

    pub fn toolbar(&self) -> &[ToolbarItem] {
        &self.toolbar
    }

    /// Run one recomputation pass
    ///
    /// Rebuilds the partition and the toolbar from scratch. Returns the new
    /// capacity when it differs from the previous pass, `None` otherwise.
    pub fn recompute(
        &mut self,
        visible: &[usize],
        available_height: u16,
        row_height: u16,
        menu_button: bool,
    ) -> Option<usize> {
        let capacity = capacity_for(available_height, row_height, visible.len());
        self.partition = OverflowPartition::split(visible, capacity);

        self.toolbar.clear();
        self.toolbar.push(ToolbarItem::Spacer);
        self.toolbar
            .extend(self.partition.overflow.iter().map(|&index| ToolbarItem::Page(index)));
        if menu_button {
            self.toolbar.push(ToolbarItem::MenuButton);
        }

        tracing::debug!(
            capacity,
            inline = self.partition.inline.len(),
            overflow = self.partition.overflow.len(),
            "overflow layout recomputed"
        );

        let previous = std::mem::replace(&mut self.capacity, capacity);
        (previous != capacity).then_some(capacity)
    }
}
