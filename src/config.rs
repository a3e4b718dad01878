// Configuration loading module

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use navbar::{IconSize, NavBarConfig, NavBarError};

pub const DEFAULT_STYLE_DIR: &str = "styles";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub navbar: NavBarConfigYaml,
    #[serde(default)]
    pub pages: Vec<PageConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default = "default_style_dir")]
    pub style_dir: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

fn default_style_dir() -> String {
    DEFAULT_STYLE_DIR.to_string()
}

fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
    #[serde(default)]
    pub modal_text: Option<String>,
}

/// Navbar overrides; anything left out keeps the compiled default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavBarConfigYaml {
    pub row_height: Option<u16>,
    pub header_height: Option<u16>,
    pub handle_height: Option<u16>,
    pub show_header: Option<bool>,
    pub show_menu_button: Option<bool>,
    /// "WIDTHxHEIGHT"
    pub list_icon_size: Option<String>,
    /// "WIDTHxHEIGHT"
    pub toolbar_icon_size: Option<String>,
}

impl NavBarConfigYaml {
    /// Apply the overrides on top of the compiled defaults
    pub fn to_config(&self) -> Result<NavBarConfig, NavBarError> {
        let defaults = NavBarConfig::default();
        let icon = |value: &Option<String>, fallback: IconSize| -> Result<IconSize, NavBarError> {
            match value {
                Some(raw) => raw.parse(),
                None => Ok(fallback),
            }
        };

        Ok(NavBarConfig {
            row_height: self.row_height.unwrap_or(defaults.row_height),
            header_height: self.header_height.unwrap_or(defaults.header_height),
            handle_height: self.handle_height.unwrap_or(defaults.handle_height),
            show_header: self.show_header.unwrap_or(defaults.show_header),
            show_menu_button: self.show_menu_button.unwrap_or(defaults.show_menu_button),
            list_icon_size: icon(&self.list_icon_size, defaults.list_icon_size)?,
            toolbar_icon_size: icon(&self.toolbar_icon_size, defaults.toolbar_icon_size)?,
        }
        .normalized())
    }
}

/// One demo page
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfigYaml {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Configuration used when config.yaml cannot be loaded
    pub fn fallback() -> Self {
        Self {
            application: ApplicationConfig {
                title: "Navigation Bar Demo".to_string(),
                style_dir: default_style_dir(),
                style: None,
                log_dir: default_log_dir(),
                bindings: Vec::new(),
                status_bar: StatusBarConfigYaml {
                    default_text: String::new(),
                    modal_text: None,
                },
            },
            navbar: NavBarConfigYaml::default(),
            pages: (1..=5)
                .map(|n| PageConfigYaml {
                    title: format!("Page {}", n),
                    icon: String::new(),
                    body: format!("This is page {}", n),
                    enabled: true,
                    visible: true,
                })
                .collect(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("can't read configuration {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("can't parse configuration {}", path.display()))?;
    Ok(config)
}
