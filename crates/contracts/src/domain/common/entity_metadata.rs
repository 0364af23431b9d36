use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps of an aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

impl EntityMetadata {
    /// Both timestamps set to the same instant
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    /// Refresh `updated_at_utc`; never moves it backwards
    pub fn touch(&mut self) {
        self.updated_at_utc = Utc::now().max(self.updated_at_utc);
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
