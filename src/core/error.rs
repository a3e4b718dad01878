// Navbar errors
// Failures reported by the strict (programmatic) API paths

/// Errors returned by the navigation bar library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NavBarError {
    /// Per-page accessor called with an index outside `0..count`
    #[error("page index {index} out of range (page count is {count})")]
    InvalidIndex { index: usize, count: usize },

    /// Style text could not be parsed into a theme
    #[error("invalid style: {0}")]
    StyleParse(String),

    /// Navbar configuration value could not be interpreted
    #[error("invalid navbar configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NavBarError>;
