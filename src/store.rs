use std::collections::HashMap;

use crate::models::{Reminder, ReminderId};

/// Change notification emitted by the store after an effective mutation.
/// No-op calls (empty name, unknown id) emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ReminderId),
    Updated(ReminderId),
    Deleted(ReminderId),
    Toggled(ReminderId),
}

/// Owns the authoritative reminder collection and the parallel progress map.
///
/// All mutation goes through the methods here, which keep the two structures
/// consistent: a progress entry is created at 0.0 together with its reminder
/// and removed together with it. A missing entry reads as 0.0.
///
/// Invalid input is absorbed silently: a name that trims to empty creates
/// nothing, an unknown id changes nothing. The return values exist for
/// callers that want to know whether anything happened; they are never
/// surfaced as user-visible errors.
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    progress: HashMap<ReminderId, f64>,
    next_id: u64,
    events: Vec<StoreEvent>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self {
            reminders: Vec::new(),
            progress: HashMap::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Append a new reminder with progress 0.0. Returns `None` without any
    /// state change if the trimmed name is empty.
    pub fn add(
        &mut self,
        name: &str,
        room: &str,
        light: &str,
        watering: &str,
        water_amount: &str,
    ) -> Option<ReminderId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = ReminderId(self.next_id);
        self.next_id += 1;
        self.reminders.push(Reminder::new(
            id,
            trimmed.to_string(),
            room.to_string(),
            light.to_string(),
            watering.to_string(),
            water_amount.to_string(),
        ));
        self.progress.insert(id, 0.0);
        self.events.push(StoreEvent::Added(id));
        Some(id)
    }

    /// Overwrite all fields of the matching reminder in place, preserving
    /// collection order. Unknown id is a no-op, as is a name that trims to
    /// empty (the record keeps its previous fields for that call).
    pub fn update(
        &mut self,
        id: ReminderId,
        name: &str,
        room: &str,
        light: &str,
        watering: &str,
        water_amount: &str,
    ) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(reminder) = self.reminders.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        reminder.name = trimmed.to_string();
        reminder.room = room.to_string();
        reminder.light = light.to_string();
        reminder.watering = watering.to_string();
        reminder.water_amount = water_amount.to_string();
        self.events.push(StoreEvent::Updated(id));
        true
    }

    /// Remove the reminder and its progress entry. Idempotent.
    pub fn delete(&mut self, id: ReminderId) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.progress.remove(&id);
        let removed = self.reminders.len() != before;
        if removed {
            self.events.push(StoreEvent::Deleted(id));
        }
        removed
    }

    /// Flip progress between 0.0 and 1.0. Threshold semantics: anything
    /// below 1.0 counts as not done and toggles to fully done.
    pub fn toggle_done(&mut self, id: ReminderId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let done = self.progress_for(id) >= 1.0;
        self.progress.insert(id, if done { 0.0 } else { 1.0 });
        self.events.push(StoreEvent::Toggled(id));
        true
    }

    /// Current progress for the id, 0.0 for unknown ids. Pure query.
    pub fn progress_for(&self, id: ReminderId) -> f64 {
        self.progress.get(&id).copied().unwrap_or(0.0)
    }

    /// Count of reminders whose progress reached 1.0. Recomputed on demand.
    pub fn completed_count(&self) -> usize {
        self.reminders
            .iter()
            .filter(|r| self.progress_for(r.id) >= 1.0)
            .count()
    }

    /// Mean progress across all reminders, 0.0 when the collection is empty.
    pub fn overall_progress(&self) -> f64 {
        if self.reminders.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.reminders.iter().map(|r| self.progress_for(r.id)).sum();
        sum / self.reminders.len() as f64
    }

    /// Drain pending change events. The UI layer calls this after handling
    /// input and reacts to whatever accumulated.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_plant(store: &mut ReminderStore, name: &str) -> ReminderId {
        store
            .add(name, "Kitchen", "Full sun", "Every day", "20–50 ml")
            .unwrap()
    }

    #[test]
    fn add_starts_at_zero_progress() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "Pothos");
        assert_eq!(store.progress_for(id), 0.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_trims_name() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "  Monstera \n");
        assert_eq!(store.get(id).unwrap().name, "Monstera");
    }

    #[test]
    fn add_with_blank_name_is_a_no_op() {
        let mut store = ReminderStore::new();
        assert_eq!(store.add("   \t", "Kitchen", "Low light", "Every day", "20–50 ml"), None);
        assert!(store.is_empty());
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn delete_removes_record_and_progress() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "Fern");
        store.toggle_done(id);
        assert!(store.delete(id));
        assert!(store.get(id).is_none());
        // Unknown id defaults back to 0.0, no orphaned entry.
        assert_eq!(store.progress_for(id), 0.0);
        // Idempotent.
        assert!(!store.delete(id));
    }

    #[test]
    fn toggle_twice_returns_to_not_done() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "Cactus");
        store.toggle_done(id);
        assert_eq!(store.progress_for(id), 1.0);
        store.toggle_done(id);
        assert_eq!(store.progress_for(id), 0.0);
    }

    #[test]
    fn toggle_normalizes_partial_progress() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "Ivy");
        // Partial progress is below the done threshold, so a toggle sets it
        // fully done; a second toggle lands on 0.0, not the old partial value.
        store.progress.insert(id, 0.4);
        store.toggle_done(id);
        assert_eq!(store.progress_for(id), 1.0);
        store.toggle_done(id);
        assert_eq!(store.progress_for(id), 0.0);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = ReminderStore::new();
        assert!(!store.toggle_done(ReminderId(42)));
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn overall_progress_is_the_mean() {
        let mut store = ReminderStore::new();
        assert_eq!(store.overall_progress(), 0.0);

        let a = add_plant(&mut store, "A");
        let b = add_plant(&mut store, "B");
        let _c = add_plant(&mut store, "C");
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.overall_progress(), 0.0);

        store.toggle_done(a);
        store.toggle_done(b);
        assert_eq!(store.completed_count(), 2);
        assert!((store.overall_progress() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn update_overwrites_in_place_and_trims() {
        let mut store = ReminderStore::new();
        let a = add_plant(&mut store, "A");
        let b = add_plant(&mut store, "B");
        assert!(store.update(a, " Aloe ", "Balcony", "Partial sun", "Every 3 days", "50–100 ml"));

        let first = &store.reminders()[0];
        assert_eq!(first.id, a);
        assert_eq!(first.name, "Aloe");
        assert_eq!(first.room, "Balcony");
        // Order preserved: updated record stays first.
        assert_eq!(store.reminders()[1].id, b);
    }

    #[test]
    fn update_unknown_id_leaves_state_unchanged() {
        let mut store = ReminderStore::new();
        add_plant(&mut store, "A");
        add_plant(&mut store, "B");
        store.drain_events();

        let before = store.reminders().to_vec();
        assert!(!store.update(ReminderId(999), "X", "Kitchen", "Low light", "Every day", "20–50 ml"));
        assert_eq!(store.reminders(), &before[..]);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn effective_mutations_emit_events() {
        let mut store = ReminderStore::new();
        let id = add_plant(&mut store, "Palm");
        store.toggle_done(id);
        store.update(id, "Palm", "Bedroom", "Low light", "Once a week", "100–200 ml");
        store.delete(id);
        assert_eq!(
            store.drain_events(),
            vec![
                StoreEvent::Added(id),
                StoreEvent::Toggled(id),
                StoreEvent::Updated(id),
                StoreEvent::Deleted(id),
            ]
        );
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn ids_are_unique_across_deletes() {
        let mut store = ReminderStore::new();
        let a = add_plant(&mut store, "A");
        store.delete(a);
        let b = add_plant(&mut store, "B");
        assert_ne!(a, b);
    }
}
