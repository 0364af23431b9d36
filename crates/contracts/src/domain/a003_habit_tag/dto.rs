use serde::{Deserialize, Serialize};

/// PUT /habits/{id}/tags payload: the complete set of tags the habit should carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertHabitTagsDto {
    pub tag_ids: Vec<String>,
}
