use serde::{Deserialize, Serialize};

/// Kind of habit: done/not-done or measured against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HabitType {
    #[default]
    None,
    /// Also read from `"Habit"` on input
    #[serde(alias = "Habit")]
    Binary,
    Measurable,
}

impl HabitType {
    /// Stored code
    pub fn code(&self) -> &'static str {
        match self {
            HabitType::None => "None",
            HabitType::Binary => "Binary",
            HabitType::Measurable => "Measurable",
        }
    }

    pub fn all() -> Vec<HabitType> {
        vec![HabitType::None, HabitType::Binary, HabitType::Measurable]
    }

    /// Parse a stored code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for HabitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_names() {
        for t in HabitType::all() {
            let wire = serde_json::to_value(t).unwrap();
            assert_eq!(wire.as_str(), Some(t.code()));
            assert_eq!(HabitType::from_code(t.code()), Some(t));
        }
        assert_eq!(HabitType::from_code("binary"), None);
    }

    #[test]
    fn test_generic_habit_label_reads_as_binary() {
        let t: HabitType = serde_json::from_value(serde_json::json!("Habit")).unwrap();
        assert_eq!(t, HabitType::Binary);
        assert_eq!(serde_json::to_value(t).unwrap(), "Binary");
    }
}
