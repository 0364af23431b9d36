pub mod a001_habit;
pub mod a002_tag;
pub mod a003_habit_tag;
