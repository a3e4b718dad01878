// Event Handling
// Navbar notifications and terminal input translation

use std::fmt;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Notifications emitted by the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarEvent {
    /// The current page changed; carries its index
    CurrentChanged(usize),

    /// The number of inline list rows changed
    VisibleRowsChanged(usize),
}

impl fmt::Display for NavBarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavBarEvent::CurrentChanged(index) => write!(f, "currentChanged({})", index),
            NavBarEvent::VisibleRowsChanged(rows) => write!(f, "visibleRowsChanged({})", rows),
        }
    }
}

type Listener = Box<dyn FnMut(&NavBarEvent)>;

/// Collects notifications during a call and dispatches them when the call completes
///
/// Dispatched notifications are kept for `take` only while recording is on.
#[derive(Default)]
pub struct Notifier {
    pending: Vec<NavBarEvent>,
    log: Option<Vec<NavBarEvent>>,
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records dispatched notifications from the start
    pub fn with_log() -> Self {
        Self {
            log: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn is_recording(&self) -> bool {
        self.log.is_some()
    }

    /// Start or stop recording; stopping discards anything not yet taken
    pub fn set_recording(&mut self, enabled: bool) {
        match (enabled, self.log.is_some()) {
            (true, false) => self.log = Some(Vec::new()),
            (false, true) => self.log = None,
            _ => {}
        }
    }

    /// Register a listener called synchronously for every notification
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&NavBarEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Queue a notification for the end of the current call
    pub fn queue(&mut self, event: NavBarEvent) {
        self.pending.push(event);
    }

    /// Dispatch everything queued so far, in order
    pub fn flush(&mut self) {
        for event in self.pending.drain(..) {
            tracing::trace!(?event, "dispatching navbar notification");
            for listener in self.listeners.iter_mut() {
                listener(&event);
            }
            if let Some(log) = self.log.as_mut() {
                log.push(event);
            }
        }
    }

    /// Take the notifications recorded since the last call
    /// Always empty while recording is off
    pub fn take(&mut self) -> Vec<NavBarEvent> {
        self.log.as_mut().map(std::mem::take).unwrap_or_default()
    }
}

/// Application events that can be handled by the demo shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Select the previous page
    SelectPrevious,

    /// Select the next page
    SelectNext,

    /// Show one more inline row
    MoreRows,

    /// Show one less inline row
    FewerRows,

    /// Grow the row height by one cell
    TallerRows,

    /// Shrink the row height by one cell
    ShorterRows,

    /// Toggle the header band
    ToggleHeader,

    /// Fold or unfold the navbar
    ToggleCollapsed,

    /// Open or close the page visibility menu
    ToggleMenu,

    /// Toggle the highlighted page in the visibility menu
    ToggleMenuEntry,

    /// Switch to the next style
    CycleStyle,

    /// Close the menu / escape current mode
    Back,

    /// Left button pressed at (column, row)
    Press(u16, u16),

    /// Left button dragged to (column, row)
    Drag(u16, u16),

    /// Left button released
    Release,

    /// Terminal resized to (width, height)
    Resize(u16, u16),

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,

            // Geometry
            KeyCode::Char('+') => AppEvent::MoreRows,
            KeyCode::Char('-') => AppEvent::FewerRows,
            KeyCode::Char(']') => AppEvent::TallerRows,
            KeyCode::Char('[') => AppEvent::ShorterRows,

            // Toggles
            KeyCode::Char('h') => AppEvent::ToggleHeader,
            KeyCode::Char('f') => AppEvent::ToggleCollapsed,
            KeyCode::Char('m') => AppEvent::ToggleMenu,
            KeyCode::Char(' ') | KeyCode::Enter => AppEvent::ToggleMenuEntry,
            KeyCode::Char('s') => AppEvent::CycleStyle,

            // Back / Escape
            KeyCode::Esc => AppEvent::Back,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => AppEvent::Drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => AppEvent::Release,
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}
