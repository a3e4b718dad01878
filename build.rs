// Build script - reads config.yaml at compile time and generates navbar defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const ROW_HEIGHT: u16 = {row_height};
pub const HEADER_HEIGHT: u16 = {header_height};
pub const HANDLE_HEIGHT: u16 = {handle_height};
pub const SHOW_HEADER: bool = {show_header};
pub const SHOW_MENU_BUTTON: bool = {show_menu_button};

// Icon sizes as (width, height) in cells
pub const LIST_ICON_SIZE: (u16, u16) = {list_icon_size};
pub const TOOLBAR_ICON_SIZE: (u16, u16) = {toolbar_icon_size};
"#,
        row_height = config.row_height,
        header_height = config.header_height,
        handle_height = config.handle_height,
        show_header = config.show_header,
        show_menu_button = config.show_menu_button,
        list_icon_size = format!("({}, {})", config.list_icon_size.0, config.list_icon_size.1),
        toolbar_icon_size = format!("({}, {})", config.toolbar_icon_size.0, config.toolbar_icon_size.1),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    row_height: u16,
    header_height: u16,
    handle_height: u16,
    show_header: bool,
    show_menu_button: bool,
    list_icon_size: (u16, u16),
    toolbar_icon_size: (u16, u16),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            row_height: 1,
            header_height: 1,
            handle_height: 1,
            show_header: true,
            show_menu_button: true,
            list_icon_size: (2, 1),
            toolbar_icon_size: (1, 1),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_navbar = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys switch sections; only `navbar:` feeds the compiled defaults
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_navbar = trimmed.starts_with("navbar:");
            continue;
        }

        if !in_navbar {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "row_height" => config.row_height = value.parse().unwrap_or(1).max(1),
                "header_height" => config.header_height = value.parse().unwrap_or(1),
                "handle_height" => config.handle_height = value.parse().unwrap_or(1),
                "show_header" => config.show_header = parse_bool(value),
                "show_menu_button" => config.show_menu_button = parse_bool(value),
                "list_icon_size" => config.list_icon_size = parse_size(value, config.list_icon_size),
                "toolbar_icon_size" => config.toolbar_icon_size = parse_size(value, config.toolbar_icon_size),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value.trim_matches('"').trim_matches('\'')))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Parse a "WIDTHxHEIGHT" size, keeping the fallback on malformed input
fn parse_size(s: &str, fallback: (u16, u16)) -> (u16, u16) {
    let mut parts = s.split(|c| c == 'x' || c == 'X');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) => match (w.trim().parse(), h.trim().parse()) {
            (Ok(w), Ok(h)) => (w, h),
            _ => fallback,
        },
        _ => fallback,
    }
}
