use serde::{Deserialize, Serialize};

/// Stable identifier for a reminder. Assigned by the store at creation and
/// never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReminderId(pub u64);

impl std::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One plant care entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub name: String,
    pub room: String,
    pub light: String,
    pub watering: String,
    pub water_amount: String,
}

impl Reminder {
    pub fn new(
        id: ReminderId,
        name: String,
        room: String,
        light: String,
        watering: String,
        water_amount: String,
    ) -> Self {
        Self {
            id,
            name,
            room,
            light,
            watering,
            water_amount,
        }
    }
}

// Option sets offered by the add/edit form pickers. The store accepts any
// string for these fields; the lists below are suggestions, not validation.
pub const ROOM_OPTIONS: &[&str] = &["Kitchen", "Bedroom", "Living Room", "Balcony", "Bathroom"];

pub const LIGHT_OPTIONS: &[&str] = &["Full sun", "Partial sun", "Low light"];

pub const WATERING_OPTIONS: &[&str] = &[
    "Every day",
    "Every 2 days",
    "Every 3 days",
    "Once a week",
    "Every 10 days",
    "Every 2 weeks",
];

pub const WATER_AMOUNT_OPTIONS: &[&str] = &["20–50 ml", "50–100 ml", "100–200 ml", "200–300 ml"];
