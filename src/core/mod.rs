// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app_config;
pub mod error;
pub mod events;
pub mod page;
pub mod registry;
pub mod selection;

pub use app_config::{IconSize, NavBarConfig, MIN_ROW_HEIGHT};
pub use error::{NavBarError, Result};
pub use events::{AppEvent, EventHandler, NavBarEvent, Notifier};
pub use page::{Page, PageId};
pub use registry::PageRegistry;
pub use selection::{CurrentPage, SelectionController};
