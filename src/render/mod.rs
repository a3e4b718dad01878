// Render module - demo rendering functions

pub mod content;
pub mod frame;

pub use content::{render_content, render_signal_log};
pub use frame::render_frame;
