use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::Config;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let (mut content, style) = if let Some(msg) = message {
        // Transient status messages get a highlighted background
        let msg_fg = get_contrast_text_color(highlight_bg);
        (
            msg.clone(),
            Style::default()
                .fg(msg_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        // Fit as many hints as the width allows, ellipsize the rest
        let max_width = area.width as usize;
        let separator = " • ";

        let mut hints_text = String::new();
        for (i, hint) in key_hints.iter().enumerate() {
            let would_be_len = if i == 0 {
                hint.chars().count()
            } else {
                hints_text.chars().count() + separator.chars().count() + hint.chars().count()
            };
            if would_be_len > max_width {
                if !hints_text.is_empty() && hints_text.chars().count() + 3 <= max_width {
                    hints_text.push_str("...");
                }
                break;
            }
            if i > 0 {
                hints_text.push_str(separator);
            }
            hints_text.push_str(hint);
        }

        (hints_text, Style::default().fg(fg_color).bg(bg_color))
    };

    if message.is_some() {
        let max_width = area.width as usize;
        if content.chars().count() > max_width {
            content =
                content.chars().take(max_width.saturating_sub(3)).collect::<String>() + "...";
        }
    }

    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}
