use serde::{Deserialize, Serialize};

/// Period a habit frequency is counted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FrequencyType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl FrequencyType {
    pub fn code(&self) -> &'static str {
        match self {
            FrequencyType::None => "None",
            FrequencyType::Daily => "Daily",
            FrequencyType::Weekly => "Weekly",
            FrequencyType::Monthly => "Monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "None" => Some(FrequencyType::None),
            "Daily" => Some(FrequencyType::Daily),
            "Weekly" => Some(FrequencyType::Weekly),
            "Monthly" => Some(FrequencyType::Monthly),
            _ => None,
        }
    }
}
