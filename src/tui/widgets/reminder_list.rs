use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState,
    StatefulWidget,
};
use ratatui::Frame;
use std::collections::HashMap;

use crate::models::ReminderId;
use crate::store::ReminderStore;
use crate::tui::app::SwipeState;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::Config;

const DELETE_LABEL: &str = " Delete ";

pub fn render_reminder_list(
    f: &mut Frame,
    area: Rect,
    store: &ReminderStore,
    swipe: &HashMap<ReminderId, SwipeState>,
    list_state: &mut ListState,
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let accent = parse_color(&active_theme.accent);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = if active_theme.highlight_fg.is_empty() {
        get_contrast_text_color(highlight_bg)
    } else {
        parse_color(&active_theme.highlight_fg)
    };

    // Row width inside borders and padding; rows shrink further by their
    // swipe offset to make room for the delete control.
    let max_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = store
        .reminders()
        .iter()
        .map(|reminder| {
            let done = store.progress_for(reminder.id) >= 1.0;
            let marker = if done { "✓" } else { "○" };
            let swipe_state = swipe.get(&reminder.id).copied().unwrap_or_default();
            let offset = swipe_state.offset as usize;

            let mut text = format!(
                "{} {} — {}  [{} · {}]",
                marker, reminder.name, reminder.room, reminder.light, reminder.water_amount
            );

            let content_width = max_width.saturating_sub(offset);
            if text.chars().count() > content_width {
                text = text
                    .chars()
                    .take(content_width.saturating_sub(3))
                    .collect::<String>()
                    + "...";
            }

            let marker_style = if done {
                Style::default().fg(accent)
            } else {
                Style::default().fg(fg_color)
            };

            if offset == 0 {
                return ListItem::new(Line::from(Span::styled(text, marker_style)));
            }

            // Pad the content out so the delete control sits flush right,
            // then clip the label to however far the row slid open.
            let pad = content_width.saturating_sub(text.chars().count());
            let label: String = DELETE_LABEL.chars().take(offset).collect();
            let delete_style = if swipe_state.is_revealed() {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red)
            };

            ListItem::new(Line::from(vec![
                Span::styled(text, marker_style),
                Span::raw(" ".repeat(pad)),
                Span::styled(label, delete_style),
            ]))
        })
        .collect();

    // Reserve a column for the scrollbar
    let list_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let list_area = list_areas[0];
    let scrollbar_area = list_areas[1];

    let title = format!("Reminders ({})", store.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(fg_color))
        .highlight_style(Style::default().fg(highlight_fg).bg(highlight_bg));

    StatefulWidget::render(list, list_area, f.buffer_mut(), list_state);

    let total_items = store.len();
    let visible_items = list_area.height.saturating_sub(2) as usize;

    if total_items > visible_items && scrollbar_area.width > 0 && list_area.height > 2 {
        let scrollbar_inner_area = Rect::new(
            scrollbar_area.x,
            list_area.y + 1,
            scrollbar_area.width,
            list_area.height.saturating_sub(2),
        );

        let selected_index = list_state.selected().unwrap_or(0);
        let scroll_position = if selected_index < visible_items {
            0
        } else {
            selected_index.saturating_sub(visible_items - 1)
        };

        let mut scrollbar_state = ScrollbarState::new(total_items)
            .viewport_content_length(visible_items)
            .position(scroll_position);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(scrollbar, scrollbar_inner_area, &mut scrollbar_state);
    }
}
