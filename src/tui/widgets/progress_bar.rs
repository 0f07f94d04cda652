use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::store::ReminderStore;
use crate::tui::widgets::color::parse_color;
use crate::Config;

/// Summary header above the list: an encouragement line driven by the
/// completed count and a bar showing the mean progress across all plants.
pub fn render_summary(f: &mut Frame, area: Rect, store: &ReminderStore, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let accent = parse_color(&active_theme.accent);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let completed = store.completed_count();
    let message = if completed == 0 {
        "Your plants are waiting for a sip".to_string()
    } else {
        format!("{} of your plants feel loved today", completed)
    };
    f.render_widget(
        Paragraph::new(message).style(Style::default().fg(fg_color)),
        rows[0],
    );

    let overall = store.overall_progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent))
        .ratio(overall)
        .label(format!("{:.0}%", overall * 100.0));
    f.render_widget(gauge, rows[1]);
}
