use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{Mode, Screen};
use crate::tui::widgets::{
    color::parse_color, form::render_reminder_form, help::render_help,
    progress_bar::render_summary, reminder_list::render_reminder_list,
    status_bar::render_status_bar,
};
use crate::tui::{App, Layout};
use crate::utils::format_key_binding_for_display;

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let accent = parse_color(&active_theme.accent);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("Sprig")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    let header = Paragraph::new("My Plants 🌱")
        .style(Style::default().fg(fg_color).add_modifier(Modifier::BOLD));
    f.render_widget(header, layout.header_area);

    if app.ui.mode == Mode::Form {
        // The sheet replaces the main pane; the summary stays visible so the
        // aggregate state doesn't jump around while adding
        if app.screen() == Screen::List {
            render_summary(f, layout.summary_area, &app.store, &app.config);
        }
        if let Some(ref form) = app.form {
            render_reminder_form(f, layout.main_area, form, &app.config);
        }
    } else {
        match app.screen() {
            Screen::Completion => {
                let lines = vec![
                    Line::from(""),
                    Line::from("🎉"),
                    Line::from(""),
                    Line::styled(
                        "All Done!",
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Line::from("All Reminders Completed"),
                    Line::from(""),
                    Line::from(format!(
                        "Press {} to add another plant",
                        format_key_binding_for_display(&app.config.key_bindings.new)
                    )),
                ];
                let paragraph = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(fg_color));
                f.render_widget(paragraph, layout.main_area);
            }
            Screen::Empty => {
                let lines = vec![
                    Line::from(""),
                    Line::styled(
                        "Start your plant journey!",
                        Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                    ),
                    Line::from(""),
                    Line::from("Now all your plants will be in one place"),
                    Line::from("and we will help you take care of them 🪴"),
                    Line::from(""),
                    Line::from(format!(
                        "Press {} to set your first reminder",
                        format_key_binding_for_display(&app.config.key_bindings.new)
                    )),
                ];
                let paragraph = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(fg_color));
                f.render_widget(paragraph, layout.main_area);
            }
            Screen::List => {
                render_summary(f, layout.summary_area, &app.store, &app.config);
                render_reminder_list(
                    f,
                    layout.main_area,
                    &app.store,
                    &app.swipe,
                    &mut app.ui.list_state,
                    &app.config,
                );
            }
        }
    }

    if app.ui.mode == Mode::Help {
        render_help(f, f.area(), &app.config);
    }

    let key_hints = get_key_hints(app);
    render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &key_hints,
        &app.config,
    );
}

fn get_key_hints(app: &App) -> Vec<String> {
    let kb = &app.config.key_bindings;
    match app.ui.mode {
        Mode::Help => {
            vec![format!(
                "Esc or {}: Exit help",
                format_key_binding_for_display(&kb.help)
            )]
        }
        Mode::Form => {
            vec![
                "Tab/Enter: Next field".to_string(),
                "←/→: Pick option".to_string(),
                format!("{}: Save", format_key_binding_for_display(&kb.save)),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::View => match app.screen() {
            Screen::List => vec![
                format!("{}: Quit", format_key_binding_for_display(&kb.quit)),
                format!("{}: New", format_key_binding_for_display(&kb.new)),
                format!("{}: Water", format_key_binding_for_display(&kb.toggle_done)),
                format!("{}: Edit", format_key_binding_for_display(&kb.select)),
                format!("{}: Reveal delete", format_key_binding_for_display(&kb.swipe_open)),
                format!("{}: Help", format_key_binding_for_display(&kb.help)),
            ],
            Screen::Empty | Screen::Completion => vec![
                format!("{}: Quit", format_key_binding_for_display(&kb.quit)),
                format!("{}: New reminder", format_key_binding_for_display(&kb.new)),
                format!("{}: Help", format_key_binding_for_display(&kb.help)),
            ],
        },
    }
}
