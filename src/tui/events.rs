use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

use crate::tui::app::{FormField, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::tui::App;
use crate::utils::parse_key_binding;

/// Guard that ensures terminal state is restored even on panic.
/// If the terminal is left in raw mode or the alternate screen, the user's
/// shell becomes unusable.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Restore terminal state on normal exit; the guard then does nothing
    /// on drop.
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Already in a cleanup path, ignore errors
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering the alternate screen so the error
    // message lands in the normal terminal
    let (width, height) = terminal_size()?;
    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    // Only Press events; Release would double-process on Windows
                    if key_event.kind == KeyEventKind::Press && handle_key_event(&mut app, key_event) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Layout is recalculated from the frame area on next draw
                }
                _ => {}
            }
        }
    }

    guard.restore()?;

    Ok(())
}

fn binding_matches(binding: &str, key_event: &KeyEvent) -> bool {
    parse_key_binding(binding)
        .map(|parsed| parsed.matches(key_event))
        .unwrap_or(false)
}

/// Dispatch one key press. Returns true when the app should quit.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> bool {
    match app.ui.mode {
        Mode::Help => handle_help_key(app, key_event),
        Mode::Form => handle_form_key(app, key_event),
        Mode::View => return handle_view_key(app, key_event),
    }
    false
}

fn handle_help_key(app: &mut App, key_event: KeyEvent) {
    let help = app.config.key_bindings.help.clone();
    if key_event.code == KeyCode::Esc || binding_matches(&help, &key_event) {
        app.ui.mode = Mode::View;
    }
}

fn handle_form_key(app: &mut App, key_event: KeyEvent) {
    let save = app.config.key_bindings.save.clone();

    if key_event.code == KeyCode::Esc {
        app.cancel_form();
        return;
    }
    if binding_matches(&save, &key_event) {
        app.save_form();
        return;
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    let on_name = form.current_field == FormField::Name;

    match key_event.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if form.current_field == FormField::Save {
                app.save_form();
            } else {
                form.next_field();
            }
        }
        KeyCode::Left => {
            if on_name {
                form.name.move_left();
            } else {
                form.cycle_option(false);
            }
        }
        KeyCode::Right => {
            if on_name {
                form.name.move_right();
            } else {
                form.cycle_option(true);
            }
        }
        KeyCode::Home if on_name => form.name.move_home(),
        KeyCode::End if on_name => form.name.move_end(),
        KeyCode::Backspace if on_name => form.name.delete_char(),
        KeyCode::Char(c) if on_name => form.name.insert_char(c),
        _ => {}
    }
}

fn handle_view_key(app: &mut App, key_event: KeyEvent) -> bool {
    let kb = app.config.key_bindings.clone();

    if binding_matches(&kb.quit, &key_event) {
        return true;
    }
    if binding_matches(&kb.help, &key_event) {
        app.ui.mode = Mode::Help;
        return false;
    }
    if binding_matches(&kb.new, &key_event) {
        app.open_add_form();
        return false;
    }

    // List navigation and row actions; these are no-ops while the empty or
    // completion screen is showing because nothing is selected.
    if binding_matches(&kb.list_up, &key_event) || key_event.code == KeyCode::Up {
        app.move_selection_up();
    } else if binding_matches(&kb.list_down, &key_event) || key_event.code == KeyCode::Down {
        app.move_selection_down();
    } else if binding_matches(&kb.toggle_done, &key_event) {
        app.toggle_selected_done();
    } else if binding_matches(&kb.swipe_open, &key_event) {
        app.swipe_open_selected();
    } else if binding_matches(&kb.swipe_close, &key_event) {
        app.swipe_close_selected();
    } else if binding_matches(&kb.select, &key_event) {
        app.activate_selected();
    }

    false
}
