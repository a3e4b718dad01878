// Content rendering

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use navbar::utilities::{hex_color, inner_rect, DimmingContext, NavBarTheme};

/// Render the current page body inside the navbar's content band
pub fn render_content(f: &mut Frame, area: Rect, body: Option<&str>, theme: &NavBarTheme, dimming: &DimmingContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(dimming.dim_style(Style::default().fg(theme.border)));
    f.render_widget(content_block, area);

    let text = body.unwrap_or("No page");
    let paragraph = Paragraph::new(text)
        .style(dimming.dim_style(Style::default().fg(theme.list_fg)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner_rect(area));
}

/// Render the notification log, newest entry at the bottom
pub fn render_signal_log(f: &mut Frame, area: Rect, entries: &[String], dimming: &DimmingContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Signals ")
        .border_style(dimming.dim_style(Style::default().fg(hex_color(0x333333))));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let skip = entries.len().saturating_sub(inner.height as usize);
    let lines: Vec<Line> = entries.iter().skip(skip).map(|e| Line::from(e.as_str())).collect();
    f.render_widget(Paragraph::new(lines).style(dimming.dim_style(Style::default())), inner);
}
