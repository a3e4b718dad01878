// Navigation Bar Demo
// Interactive terminal demo of the navbar control: pages, overflow toolbar, visibility menu, splitter

// MODULES ------------------>>

mod config;
mod config_validation;
mod logging;
mod render;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use navbar::core::{AppEvent, EventHandler};
use navbar::utilities::{available_styles, style_path, DimmingContext};
use navbar::{HitMap, NavBar, NavBarEvent, NavBarTheme, NavBarView};

// Module imports
use config::{load_config, DEFAULT_LOG_DIR};
use config_validation::validate_config;
use render::{render_content, render_frame, render_signal_log};

//--------------------------------------------------------<<

/// Oldest signal log entries are dropped past this many
const SIGNAL_LOG_LIMIT: usize = 200;

/// Width of the navbar column
const NAVBAR_COLUMN_WIDTH: u16 = 30;

/// Cycles through the style files of the style directory
struct StyleSelector {
    dir: PathBuf,
    names: Vec<String>,
    index: usize,
}

impl StyleSelector {
    fn new(dir: PathBuf, initial: Option<&str>) -> Self {
        let names = available_styles(&dir);
        let index = initial
            .and_then(|name| names.iter().position(|n| n == name))
            .unwrap_or(0);
        Self { dir, names, index }
    }

    fn name(&self) -> &str {
        self.names.get(self.index).map(String::as_str).unwrap_or("Default")
    }

    fn theme(&self) -> NavBarTheme {
        match self.names.get(self.index) {
            Some(name) => NavBarTheme::load(&style_path(&self.dir, name)),
            None => NavBarTheme::default(),
        }
    }

    fn next(&mut self) -> NavBarTheme {
        if !self.names.is_empty() {
            self.index = (self.index + 1) % self.names.len();
        }
        tracing::info!(style = self.name(), "style selected");
        self.theme()
    }
}

/// Append dispatched notifications to the on-screen log
fn record_signals(log: &mut Vec<String>, events: Vec<NavBarEvent>) {
    log.extend(events.iter().map(NavBarEvent::to_string));
    if log.len() > SIGNAL_LOG_LIMIT {
        let excess = log.len() - SIGNAL_LOG_LIMIT;
        log.drain(..excess);
    }
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> anyhow::Result<()> {
    // Logging needs the log directory from the config, validation needs logging
    let loaded = load_config(None);
    let log_dir = loaded
        .as_ref()
        .map(|c| c.application.log_dir.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    let _log_guard = logging::init_logging(Path::new(&log_dir))?;
    let validated = validate_config(loaded);
    let app_config = validated.app;

    // Build the navbar from the configured pages
    let mut navbar: NavBar<String, String> = NavBar::with_config(validated.navbar);
    navbar.record_events(true);
    navbar.subscribe(|event| tracing::debug!(%event, "navbar notification"));
    let mut signal_log: Vec<String> = Vec::new();

    for page in &app_config.pages {
        let index = navbar.add_page(page.body.clone(), page.title.clone(), page.icon.clone());
        if !page.enabled {
            navbar.set_page_enabled(index, false)?;
        }
        if !page.visible {
            navbar.set_page_visible(index, false)?;
        }
    }
    tracing::info!(pages = navbar.count(), "navbar ready");

    let style_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&app_config.application.style_dir);
    let mut styles = StyleSelector::new(style_dir, app_config.application.style.as_deref());
    let mut theme = styles.theme();

    let mut hits = HitMap::default();

    // Setup terminal
    enable_raw_mode().context("can't enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                           MAIN LOOP                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    loop {
        record_signals(&mut signal_log, navbar.take_events());

        terminal.draw(|f| {
            let area = f.area();
            let dimming = DimmingContext::new(navbar.is_menu_open());

            let workspace = render_frame(f, area, &app_config.application, styles.name(), &dimming);
            let navbar_width = if navbar.is_collapsed() {
                navbar.size_hint().0
            } else {
                NAVBAR_COLUMN_WIDTH
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(navbar_width), Constraint::Min(0)])
                .split(workspace);

            let view = NavBarView::new(&theme);
            hits = view.render(f, columns[0], &mut navbar, |f, rect, body| {
                render_content(f, rect, body.map(String::as_str), &theme, &dimming);
            });

            render_signal_log(f, columns[1], &signal_log, &dimming);
        })?;

        // ┌──────────────────────────────────────────────────────────────────────────────────────────────┐
        // │                              Handle events (keyboard and mouse)                              │
        // └──────────────────────────────────────────────────────────────────────────────────────────────┘

        if !event::poll(std::time::Duration::from_millis(50))? {
            continue;
        }

        match EventHandler::handle(event::read()?) {
            AppEvent::Quit => break,
            AppEvent::SelectPrevious => {
                if navbar.is_menu_open() {
                    navbar.move_menu_highlight(false);
                } else {
                    navbar.select_previous();
                }
            }
            AppEvent::SelectNext => {
                if navbar.is_menu_open() {
                    navbar.move_menu_highlight(true);
                } else {
                    navbar.select_next();
                }
            }
            AppEvent::MoreRows => navbar.set_visible_rows(navbar.visible_rows() + 1),
            AppEvent::FewerRows => navbar.set_visible_rows(navbar.visible_rows().saturating_sub(1)),
            AppEvent::TallerRows => navbar.set_row_height(navbar.row_height().saturating_add(1)),
            AppEvent::ShorterRows => navbar.set_row_height(navbar.row_height().saturating_sub(1)),
            AppEvent::ToggleHeader => navbar.set_show_header(!navbar.show_header()),
            AppEvent::ToggleCollapsed => {
                navbar.toggle_collapsed();
            }
            AppEvent::ToggleMenu => {
                navbar.toggle_menu();
            }
            AppEvent::ToggleMenuEntry => {
                if navbar.is_menu_open() {
                    navbar.toggle_highlighted_entry();
                }
            }
            AppEvent::CycleStyle => theme = styles.next(),
            AppEvent::Back => navbar.close_menu(),
            AppEvent::Press(x, y) => {
                hits.press(&mut navbar, x, y);
            }
            AppEvent::Drag(_, y) => {
                if navbar.is_dragging_splitter() {
                    navbar.drag_splitter(y);
                }
            }
            AppEvent::Release => navbar.release_splitter(),
            // Terminal resize - handled by the next draw
            AppEvent::Resize(_, _) | AppEvent::None => {}
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}
