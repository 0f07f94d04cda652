use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;
use crate::Config;

pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let popup_area = popup_area(area, 60, 60);
    f.render_widget(Clear, popup_area);

    let kb = &config.key_bindings;
    let entries = [
        (kb.list_up.as_str(), "Move up"),
        (kb.list_down.as_str(), "Move down"),
        (kb.toggle_done.as_str(), "Toggle watered"),
        (kb.new.as_str(), "New reminder"),
        (kb.select.as_str(), "Edit (or delete when revealed)"),
        (kb.swipe_open.as_str(), "Reveal delete"),
        (kb.swipe_close.as_str(), "Hide delete"),
        (kb.save.as_str(), "Save form"),
        ("Esc", "Close form / help"),
        (kb.quit.as_str(), "Quit"),
    ];

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for (key, action) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>8}  ", format_key_binding_for_display(key)),
                Style::default().fg(parse_color(&active_theme.accent)),
            ),
            Span::styled(action, Style::default().fg(fg_color)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));

    f.render_widget(paragraph, popup_area);
}

/// Centered rect taking a percentage of the available area.
/// Based on the ratatui popup example.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
