// Configuration validation module

use std::path::Path;

use navbar::NavBarConfig;

use crate::config::{load_config, AppConfig};

/// Configuration the demo can run with
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub navbar: NavBarConfig,
}

/// Load and validate configuration with error recovery
pub fn load_and_validate_config(config_path: Option<&Path>) -> ValidatedConfig {
    validate_config(load_config(config_path))
}

/// Fall back to defaults for anything that failed to load or validate
pub fn validate_config(loaded: anyhow::Result<AppConfig>) -> ValidatedConfig {
    let app = match loaded {
        Ok(config) => config,
        Err(e) => {
            let chain = format!("{:#}", e);
            tracing::warn!(error = %chain, "failed to load configuration, using defaults");
            AppConfig::fallback()
        }
    };

    let navbar = match app.navbar.to_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid navbar section, using compiled defaults");
            NavBarConfig::default()
        }
    };

    if app.pages.is_empty() {
        tracing::warn!("configuration defines no pages");
    }

    ValidatedConfig { app, navbar }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let validated = load_and_validate_config(Some(&dir.path().join("none.yaml")));
        assert_eq!(validated.app.pages.len(), 5);
        assert_eq!(validated.navbar, NavBarConfig::default());
    }

    #[test]
    fn test_invalid_navbar_section_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "application:\n  title: T\n  status_bar:\n    default_text: x\nnavbar:\n  list_icon_size: huge\n  row_height: 4\n"
        )
        .unwrap();

        let validated = load_and_validate_config(Some(file.path()));
        assert_eq!(validated.app.application.title, "T");
        assert_eq!(validated.navbar, NavBarConfig::default());
        assert!(validated.app.pages.is_empty());
    }
}
