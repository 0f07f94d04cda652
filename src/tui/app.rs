use crate::models::{
    Reminder, ReminderId, LIGHT_OPTIONS, ROOM_OPTIONS, WATERING_OPTIONS, WATER_AMOUNT_OPTIONS,
};
use crate::store::ReminderStore;
use crate::tui::widgets::editor::Editor;
use crate::Config;
use ratatui::widgets::ListState;
use std::collections::HashMap;
use std::time::Instant;

/// The three mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Completion,
    Empty,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Form,
    Help,
}

/// Per-row reveal state for the delete control, the keyboard translation of
/// the source app's swipe gesture. The offset is a cell count: each "swipe
/// open" press slides the row content left by `STEP` cells, up to
/// `MAX_REVEAL` (the width of the delete control). On settle the offset
/// snaps fully open if it passed `REVEAL_THRESHOLD`, otherwise back to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeState {
    pub offset: u16,
}

impl SwipeState {
    pub const MAX_REVEAL: u16 = 9;
    pub const REVEAL_THRESHOLD: u16 = 6;
    pub const STEP: u16 = 3;

    pub fn swipe_open(&mut self) {
        self.offset = (self.offset + Self::STEP).min(Self::MAX_REVEAL);
    }

    pub fn swipe_close(&mut self) {
        self.offset = self.offset.saturating_sub(Self::STEP);
    }

    /// Snap to fully open or fully closed, the drag-end rule.
    pub fn settle(&mut self) {
        self.offset = if self.offset >= Self::REVEAL_THRESHOLD {
            Self::MAX_REVEAL
        } else {
            0
        };
    }

    /// Whether the delete control is tappable. Gates the row's primary
    /// action: revealed rows delete, unrevealed rows open the edit form.
    pub fn is_revealed(&self) -> bool {
        self.offset >= Self::REVEAL_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Room,
    Light,
    Watering,
    WaterAmount,
    Save,
}

/// Shared state for the add and edit sheets. Picker fields hold the current
/// label as a free string; cycling walks the option list, but a value that
/// is not in the list survives untouched until the user cycles away from it.
#[derive(Debug, Clone)]
pub struct ReminderForm {
    pub current_field: FormField,
    pub name: Editor,
    pub room: String,
    pub light: String,
    pub watering: String,
    pub water_amount: String,
    pub editing_id: Option<ReminderId>,
}

impl ReminderForm {
    pub fn new() -> Self {
        Self {
            current_field: FormField::Name,
            name: Editor::new(),
            room: ROOM_OPTIONS[0].to_string(),
            light: LIGHT_OPTIONS[0].to_string(),
            watering: WATERING_OPTIONS[0].to_string(),
            water_amount: WATER_AMOUNT_OPTIONS[0].to_string(),
            editing_id: None,
        }
    }

    pub fn for_reminder(reminder: &Reminder) -> Self {
        Self {
            current_field: FormField::Name,
            name: Editor::from_string(&reminder.name),
            room: reminder.room.clone(),
            light: reminder.light.clone(),
            watering: reminder.watering.clone(),
            water_amount: reminder.water_amount.clone(),
            editing_id: Some(reminder.id),
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            FormField::Name => FormField::Room,
            FormField::Room => FormField::Light,
            FormField::Light => FormField::Watering,
            FormField::Watering => FormField::WaterAmount,
            FormField::WaterAmount => FormField::Save,
            FormField::Save => FormField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            FormField::Name => FormField::Save,
            FormField::Room => FormField::Name,
            FormField::Light => FormField::Room,
            FormField::Watering => FormField::Light,
            FormField::WaterAmount => FormField::Watering,
            FormField::Save => FormField::WaterAmount,
        };
    }

    /// Step the active picker field through its option list.
    pub fn cycle_option(&mut self, forward: bool) {
        let (value, options): (&mut String, &[&str]) = match self.current_field {
            FormField::Room => (&mut self.room, ROOM_OPTIONS),
            FormField::Light => (&mut self.light, LIGHT_OPTIONS),
            FormField::Watering => (&mut self.watering, WATERING_OPTIONS),
            FormField::WaterAmount => (&mut self.water_amount, WATER_AMOUNT_OPTIONS),
            FormField::Name | FormField::Save => return,
        };
        let next = match options.iter().position(|o| *o == value.as_str()) {
            Some(i) if forward => options[(i + 1) % options.len()],
            Some(i) => options[(i + options.len() - 1) % options.len()],
            None => options[0],
        };
        *value = next.to_string();
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: Mode,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Set when a previously non-empty collection became fully complete and
    /// was auto-cleared. Cleared the moment the collection is non-empty again.
    pub show_completion: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: Mode::View,
            selected_index: 0,
            list_state: ListState::default(),
            show_completion: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

pub struct App {
    pub config: Config,
    pub store: ReminderStore,

    pub ui: UiState,
    pub form: Option<ReminderForm>,
    pub swipe: HashMap<ReminderId, SwipeState>,
    pub status: StatusState,
}

impl App {
    const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

    pub fn new(config: Config, store: ReminderStore) -> Self {
        let mut app = Self {
            config,
            store,
            ui: UiState::default(),
            form: None,
            swipe: HashMap::new(),
            status: StatusState::default(),
        };
        app.sync_list_state();
        app
    }

    /// Which of the three top-level screens to show. The completion screen
    /// only wins while the collection is still empty; a fresh start with no
    /// reminders ever added lands on the empty screen because the flag was
    /// never set.
    pub fn screen(&self) -> Screen {
        if self.ui.show_completion && self.store.is_empty() {
            Screen::Completion
        } else if self.store.is_empty() {
            Screen::Empty
        } else {
            Screen::List
        }
    }

    pub fn selected_id(&self) -> Option<ReminderId> {
        self.store.reminders().get(self.ui.selected_index).map(|r| r.id)
    }

    pub fn selected_swipe(&self) -> SwipeState {
        self.selected_id()
            .and_then(|id| self.swipe.get(&id).copied())
            .unwrap_or_default()
    }

    pub fn move_selection_up(&mut self) {
        self.settle_selected_swipe();
        if self.ui.selected_index > 0 {
            self.ui.selected_index -= 1;
        }
        self.sync_list_state();
    }

    pub fn move_selection_down(&mut self) {
        self.settle_selected_swipe();
        if self.ui.selected_index + 1 < self.store.len() {
            self.ui.selected_index += 1;
        }
        self.sync_list_state();
    }

    pub fn swipe_open_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.swipe.entry(id).or_default().swipe_open();
        }
    }

    pub fn swipe_close_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(state) = self.swipe.get_mut(&id) {
                state.swipe_close();
            }
        }
    }

    /// Moving focus off a row ends its "drag": snap open or closed.
    fn settle_selected_swipe(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(state) = self.swipe.get_mut(&id) {
                state.settle();
            }
        }
    }

    /// The row's primary action: delete when the delete control is revealed,
    /// close the reveal if partially open, otherwise open the edit form.
    pub fn activate_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let swipe = self.swipe.get(&id).copied().unwrap_or_default();
        if swipe.is_revealed() {
            self.delete_reminder(id);
        } else if swipe.offset > 0 {
            if let Some(state) = self.swipe.get_mut(&id) {
                state.reset();
            }
        } else if let Some(reminder) = self.store.get(id) {
            self.form = Some(ReminderForm::for_reminder(reminder));
            self.ui.mode = Mode::Form;
        }
    }

    pub fn toggle_selected_done(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_done(id);
            self.after_store_change();
        }
    }

    pub fn delete_reminder(&mut self, id: ReminderId) {
        self.store.delete(id);
        self.after_store_change();
    }

    pub fn open_add_form(&mut self) {
        self.form = Some(ReminderForm::new());
        self.ui.mode = Mode::Form;
    }

    /// Save and close the sheet. An empty name means the add path creates
    /// nothing and the edit path keeps the old record; either way the sheet
    /// closes without any error display.
    pub fn save_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        let name = form.name.value();
        match form.editing_id {
            Some(id) => {
                self.store.update(
                    id,
                    &name,
                    &form.room,
                    &form.light,
                    &form.watering,
                    &form.water_amount,
                );
            }
            None => {
                if self
                    .store
                    .add(&name, &form.room, &form.light, &form.watering, &form.water_amount)
                    .is_some()
                {
                    self.set_status_message(format!("Added {}", name.trim()));
                }
            }
        }
        self.ui.mode = Mode::View;
        self.after_store_change();
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.ui.mode = Mode::View;
    }

    /// Run after every batch of store mutations: drain change events, fire
    /// the all-complete transition, clear the completion flag when the
    /// collection is populated again, and keep selection and swipe state
    /// consistent with the surviving rows.
    pub fn after_store_change(&mut self) {
        let events = self.store.drain_events();
        if events.is_empty() {
            return;
        }

        self.run_completion_check();

        if !self.store.is_empty() {
            self.ui.show_completion = false;
        }

        // Drop swipe state for rows that no longer exist
        let live: std::collections::HashSet<ReminderId> =
            self.store.reminders().iter().map(|r| r.id).collect();
        self.swipe.retain(|id, _| live.contains(id));

        if self.ui.selected_index >= self.store.len() {
            self.ui.selected_index = self.store.len().saturating_sub(1);
        }
        self.sync_list_state();
    }

    /// The all-done transition: when every reminder in a non-empty
    /// collection is complete, delete them all (snapshotting ids first) and
    /// switch to the completion screen.
    fn run_completion_check(&mut self) {
        if self.store.is_empty() || self.store.completed_count() != self.store.len() {
            return;
        }
        let ids: Vec<ReminderId> = self.store.reminders().iter().map(|r| r.id).collect();
        for id in ids {
            self.store.delete(id);
        }
        self.store.drain_events();
        self.ui.show_completion = true;
    }

    fn sync_list_state(&mut self) {
        if self.store.is_empty() {
            self.ui.list_state.select(None);
        } else {
            self.ui.list_state.select(Some(self.ui.selected_index));
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    pub fn check_status_message_timeout(&mut self) {
        if let Some(time) = self.status.message_time {
            if time.elapsed().as_secs() >= Self::STATUS_MESSAGE_TIMEOUT_SECS {
                self.status.message = None;
                self.status.message_time = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), ReminderStore::new())
    }

    fn add(app: &mut App, name: &str) -> ReminderId {
        let id = app
            .store
            .add(name, "Kitchen", "Full sun", "Every day", "20–50 ml")
            .unwrap();
        app.after_store_change();
        id
    }

    #[test]
    fn fresh_start_shows_empty_screen() {
        let app = app();
        assert_eq!(app.screen(), Screen::Empty);
        assert!(!app.ui.show_completion);
    }

    #[test]
    fn completing_every_reminder_clears_the_list() {
        let mut app = app();
        let a = add(&mut app, "A");
        let b = add(&mut app, "B");
        let c = add(&mut app, "C");

        app.store.toggle_done(a);
        app.store.toggle_done(b);
        app.after_store_change();
        assert_eq!(app.screen(), Screen::List);
        assert_eq!(app.store.completed_count(), 2);

        app.store.toggle_done(c);
        app.after_store_change();
        assert!(app.store.is_empty());
        assert_eq!(app.store.completed_count(), 0);
        assert!(app.ui.show_completion);
        assert_eq!(app.screen(), Screen::Completion);
    }

    #[test]
    fn adding_after_completion_returns_to_list() {
        let mut app = app();
        let a = add(&mut app, "A");
        app.store.toggle_done(a);
        app.after_store_change();
        assert_eq!(app.screen(), Screen::Completion);

        add(&mut app, "B");
        assert!(!app.ui.show_completion);
        assert_eq!(app.screen(), Screen::List);
    }

    #[test]
    fn deleting_the_last_reminder_shows_empty_not_completion() {
        let mut app = app();
        let a = add(&mut app, "A");
        app.delete_reminder(a);
        assert_eq!(app.screen(), Screen::Empty);
    }

    #[test]
    fn save_form_with_blank_name_closes_without_adding() {
        let mut app = app();
        app.open_add_form();
        app.form.as_mut().unwrap().name = Editor::from_string("   ");
        app.save_form();
        assert!(app.store.is_empty());
        assert_eq!(app.ui.mode, Mode::View);
        assert!(app.status.message.is_none());
    }

    #[test]
    fn save_form_edits_in_place() {
        let mut app = app();
        let id = add(&mut app, "Pothos");
        app.activate_selected();
        assert_eq!(app.ui.mode, Mode::Form);

        let form = app.form.as_mut().unwrap();
        form.name = Editor::from_string(" Golden Pothos ");
        form.room = "Bedroom".to_string();
        app.save_form();

        let reminder = app.store.get(id).unwrap();
        assert_eq!(reminder.name, "Golden Pothos");
        assert_eq!(reminder.room, "Bedroom");
    }

    #[test]
    fn revealed_row_primary_action_deletes() {
        let mut app = app();
        let id = add(&mut app, "Fern");
        app.swipe_open_selected();
        app.swipe_open_selected();
        assert!(app.swipe[&id].is_revealed());

        app.activate_selected();
        assert!(app.store.get(id).is_none());
        assert!(app.swipe.is_empty());
    }

    #[test]
    fn partially_open_row_closes_instead_of_editing() {
        let mut app = app();
        let id = add(&mut app, "Fern");
        app.swipe_open_selected();
        assert!(!app.swipe[&id].is_revealed());

        app.activate_selected();
        assert_eq!(app.ui.mode, Mode::View);
        assert_eq!(app.swipe[&id].offset, 0);
    }

    #[test]
    fn swipe_settles_past_threshold_when_leaving_row() {
        let mut app = app();
        add(&mut app, "A");
        add(&mut app, "B");

        app.ui.selected_index = 0;
        app.swipe_open_selected();
        app.swipe_open_selected();
        app.move_selection_down();

        let first = app.store.reminders()[0].id;
        assert_eq!(app.swipe[&first].offset, SwipeState::MAX_REVEAL);
    }

    #[test]
    fn swipe_snaps_closed_below_threshold() {
        let mut state = SwipeState::default();
        state.swipe_open();
        assert_eq!(state.offset, SwipeState::STEP);
        state.settle();
        assert_eq!(state.offset, 0);

        state.swipe_open();
        state.swipe_open();
        state.settle();
        assert_eq!(state.offset, SwipeState::MAX_REVEAL);
    }

    #[test]
    fn form_cycles_pickers_and_recovers_unknown_values() {
        let mut form = ReminderForm::new();
        form.current_field = FormField::Room;
        form.cycle_option(true);
        assert_eq!(form.room, "Bedroom");
        form.cycle_option(false);
        assert_eq!(form.room, "Kitchen");

        form.room = "Greenhouse".to_string();
        form.cycle_option(true);
        assert_eq!(form.room, "Kitchen");
    }

    #[test]
    fn selection_clamps_after_delete() {
        let mut app = app();
        add(&mut app, "A");
        let b = add(&mut app, "B");
        app.ui.selected_index = 1;
        app.delete_reminder(b);
        assert_eq!(app.ui.selected_index, 0);
        assert_eq!(app.ui.list_state.selected(), Some(0));
    }
}
