// Page record
// One entry of the page registry: plain data only, no toolkit widgets

/// Stable identity of a page, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(u64);

impl PageId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the internal ID of this page
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A page of the navigation bar
///
/// `C` is the embedder's content handle and `I` its icon handle. Neither is
/// inspected by the navbar; both are stored and handed back on request.
#[derive(Debug, Clone)]
pub struct Page<C, I> {
    pub(crate) id: PageId,
    pub(crate) position: usize,
    pub(crate) title: String,
    pub(crate) icon: I,
    pub(crate) enabled: bool,
    pub(crate) visible: bool,
    pub(crate) content: C,
}

impl<C, I> Page<C, I> {
    pub(crate) fn new(id: PageId, content: C, title: String, icon: I) -> Self {
        Self {
            id,
            position: 0,
            title,
            icon,
            enabled: true,
            visible: true,
            content,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    /// 0-based position in the registry
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &I {
        &self.icon
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Consume the page and hand the content back to its owner
    pub fn into_content(self) -> C {
        self.content
    }
}
