use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{FrequencyType, HabitStatus, HabitType};

// ============================================================================
// Nested values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyDto {
    #[serde(rename = "type")]
    pub frequency_type: FrequencyType,
    pub times_per_period: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TargetDto {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDto {
    pub target: i32,
    pub current: i32,
}

/// Milestone as supplied by clients; progress always starts at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMilestoneDto {
    pub target: i32,
}

// ============================================================================
// Display forms
// ============================================================================

/// Display form of a habit, as returned by the list endpoint and patched by PATCH
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub frequency: FrequencyDto,
    pub target: TargetDto,
    pub status: HabitStatus,
    pub is_archived: bool,
    pub end_date: Option<NaiveDate>,
    pub milestone: Option<MilestoneDto>,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Detailed projection with related tag names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitWithTagsDto {
    #[serde(flatten)]
    pub habit: HabitDto,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HabitsCollectionDto {
    pub items: Vec<HabitDto>,
}

// ============================================================================
// Forms
// ============================================================================

/// POST /habits payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub frequency: FrequencyDto,
    #[serde(default)]
    pub target: TargetDto,
    pub end_date: Option<NaiveDate>,
    pub milestone: Option<CreateMilestoneDto>,
}

/// PUT /habits/{id} payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub frequency: FrequencyDto,
    #[serde(default)]
    pub target: TargetDto,
    pub end_date: Option<NaiveDate>,
    pub milestone: Option<CreateMilestoneDto>,
}
