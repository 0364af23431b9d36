use serde::{Deserialize, Serialize};

/// Lifecycle state of a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HabitStatus {
    None,
    #[default]
    Ongoing,
    Completed,
}

impl HabitStatus {
    pub fn code(&self) -> &'static str {
        match self {
            HabitStatus::None => "None",
            HabitStatus::Ongoing => "Ongoing",
            HabitStatus::Completed => "Completed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "None" => Some(HabitStatus::None),
            "Ongoing" => Some(HabitStatus::Ongoing),
            "Completed" => Some(HabitStatus::Completed),
            _ => None,
        }
    }
}
