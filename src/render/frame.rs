// Demo frame rendering
// Title banner, binding hints and status bar around the demo workspace

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use navbar::utilities::{hex_color, DimmingContext};

use crate::config::ApplicationConfig;

/// Render the frame and return the area left for the workspace
pub fn render_frame(f: &mut Frame, area: Rect, app: &ApplicationConfig, style_name: &str, dimming: &DimmingContext) -> Rect {
    if area.width == 0 || area.height < 6 {
        return area;
    }

    let title_banner = Rect { height: 3, ..area };
    let status_bar = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let bindings_row = Rect {
        y: status_bar.y - 1,
        height: 1,
        ..area
    };

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(dimming.dim_style(Style::default().fg(hex_color(0x333333))));
    let title = Paragraph::new(Line::from(format!(" {}  [{}]", app.title, style_name)))
        .block(title_block)
        .style(dimming.dim_style(Style::default().add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center);
    f.render_widget(title, title_banner);

    let mut spans = Vec::new();
    for binding in &app.bindings {
        spans.push(Span::styled(
            format!(" {}", binding.key),
            dimming.dim_style(Style::default().fg(hex_color(0x00AAAA))),
        ));
        spans.push(Span::styled(
            format!(" {} ", binding.description),
            dimming.dim_style(Style::default().fg(hex_color(0x777777))),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), bindings_row);

    let status_text = if dimming.modal_visible {
        app.status_bar
            .modal_text
            .as_deref()
            .unwrap_or(&app.status_bar.default_text)
    } else {
        &app.status_bar.default_text
    };
    f.render_widget(
        Paragraph::new(format!(" {}", status_text)).style(Style::default().fg(hex_color(0x555555))),
        status_bar,
    );

    Rect {
        y: title_banner.y + title_banner.height,
        height: bindings_row.y - (title_banner.y + title_banner.height),
        ..area
    }
}
