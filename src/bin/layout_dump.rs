// Debug script to show navbar band layout and overflow partition for a given size
// Usage: layout-dump <width> <height> [pages] [rows]

use anyhow::Context;
use ratatui::layout::Rect;
use tracing_subscriber::EnvFilter;

use navbar::{NavBar, NavBarEvent, ToolbarItem};

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> anyhow::Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(index)
        .map(|raw| raw.parse::<T>().with_context(|| format!("invalid {}: {}", name, raw)))
        .transpose()
}

fn describe(rect: Rect) -> String {
    format!("y={:<3} h={:<3} ({}x{} at {},{})", rect.y, rect.height, rect.width, rect.height, rect.x, rect.y)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let width = parse_arg::<u16>(&args, 0, "width")?.unwrap_or(24);
    let height = parse_arg::<u16>(&args, 1, "height")?.unwrap_or(20);
    let page_count = parse_arg::<usize>(&args, 2, "page count")?.unwrap_or(5);
    let rows = parse_arg::<usize>(&args, 3, "rows")?;

    let mut navbar: NavBar<String> = NavBar::new();
    navbar.record_events(true);
    for n in 1..=page_count {
        navbar.add_page(format!("This is page {}", n), format!("Page {}", n), ());
    }
    navbar.resize(width, height);
    if let Some(rows) = rows {
        navbar.set_visible_rows(rows);
    }

    println!("=== AREA ===");
    println!("  {}x{}  (size hint {:?})", width, height, navbar.size_hint());
    println!();

    let bands = navbar.bands();
    println!("=== BANDS ===");
    println!("  header   {}", describe(bands.header));
    println!("  content  {}", describe(bands.content));
    println!("  handle   {}", describe(bands.handle));
    println!("  list     {}", describe(bands.list));
    println!("  toolbar  {}", describe(bands.toolbar));
    println!();

    println!("=== PARTITION ===");
    println!("  capacity {}", navbar.visible_rows());
    println!("  inline   {:?}", navbar.inline_pages());
    println!("  overflow {:?}", navbar.overflow_pages());
    let items: Vec<String> = navbar
        .toolbar_items()
        .iter()
        .map(|item| match item {
            ToolbarItem::Spacer => "~".to_string(),
            ToolbarItem::Page(index) => index.to_string(),
            ToolbarItem::MenuButton => "menu".to_string(),
        })
        .collect();
    println!("  toolbar  [{}]", items.join(", "));
    println!();

    let events: Vec<String> = navbar.take_events().iter().map(NavBarEvent::to_string).collect();
    println!("=== SIGNALS ===");
    if events.is_empty() {
        println!("  (none)");
    }
    for event in events {
        println!("  {}", event);
    }

    Ok(())
}
