use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{FormField, ReminderForm};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::Config;

/// Render the add/edit sheet: a name field, four option pickers and a Save
/// row. The active field is highlighted; picker fields show cycle arrows.
pub fn render_reminder_form(f: &mut Frame, area: Rect, form: &ReminderForm, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = get_contrast_text_color(highlight_bg);

    let title = if form.editing_id.is_some() {
        "Edit Reminder"
    } else {
        "Set Reminder"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(fg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Room
            Constraint::Length(1), // Light
            Constraint::Length(1), // Watering Days
            Constraint::Length(1), // Water
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Save
            Constraint::Min(0),
        ])
        .split(inner);

    let field_style = |field: FormField| {
        if form.current_field == field {
            Style::default().fg(highlight_fg).bg(highlight_bg)
        } else {
            Style::default().fg(fg_color)
        }
    };

    let name_line = Line::from(vec![
        Span::styled("Plant Name     ", Style::default().fg(fg_color)),
        Span::styled(form.name.value.clone(), field_style(FormField::Name)),
    ]);
    f.render_widget(Paragraph::new(name_line), rows[0]);

    // Cursor in the name field while it is active
    if form.current_field == FormField::Name {
        let prefix_width = "Plant Name     ".chars().count() as u16;
        let cursor_x = rows[0].x + prefix_width + form.name.cursor as u16;
        if cursor_x < inner.x + inner.width {
            f.set_cursor_position((cursor_x, rows[0].y));
        }
    }

    let picker_rows = [
        ("Room           ", form.room.as_str(), FormField::Room, rows[1]),
        ("Light          ", form.light.as_str(), FormField::Light, rows[2]),
        ("Watering Days  ", form.watering.as_str(), FormField::Watering, rows[3]),
        ("Water          ", form.water_amount.as_str(), FormField::WaterAmount, rows[4]),
    ];

    for (label, value, field, row) in picker_rows {
        let line = Line::from(vec![
            Span::styled(label, Style::default().fg(fg_color)),
            Span::styled(format!("‹ {} ›", value), field_style(field)),
        ]);
        f.render_widget(Paragraph::new(line), row);
    }

    let save_style = if form.current_field == FormField::Save {
        Style::default()
            .fg(highlight_fg)
            .bg(highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fg_color).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Save ]", save_style))),
        rows[6],
    );
}
