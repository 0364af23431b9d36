pub mod frequency_type;
pub mod habit_status;
pub mod habit_type;

pub use frequency_type::FrequencyType;
pub use habit_status::HabitStatus;
pub use habit_type::HabitType;
