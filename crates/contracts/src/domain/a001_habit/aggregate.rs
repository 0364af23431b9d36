use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dto::{CreateHabitDto, FrequencyDto, HabitDto, MilestoneDto, TargetDto, UpdateHabitDto};
use super::patch::HabitWriteBack;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::{FrequencyType, HabitStatus, HabitType};

// ============================================================================
// ID Type
// ============================================================================

/// Habit identifier, `h_` followed by a UUID v7
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub String);

impl AggregateId for HabitId {
    const PREFIX: &'static str = "h";

    fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Value objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub frequency_type: FrequencyType,
    pub times_per_period: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub target: i32,
    pub current: i32,
}

impl From<&FrequencyDto> for Frequency {
    fn from(dto: &FrequencyDto) -> Self {
        Self {
            frequency_type: dto.frequency_type,
            times_per_period: dto.times_per_period,
        }
    }
}

impl From<&TargetDto> for Target {
    fn from(dto: &TargetDto) -> Self {
        Self {
            value: dto.value,
            unit: dto.unit.clone(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A habit the user is building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub description: Option<String>,
    pub habit_type: HabitType,
    pub frequency: Frequency,
    pub target: Target,
    pub status: HabitStatus,
    pub is_archived: bool,
    pub end_date: Option<NaiveDate>,
    pub milestone: Option<Milestone>,
    pub metadata: EntityMetadata,
}

impl Habit {
    /// New ongoing habit with a fresh id; both timestamps share one instant
    pub fn new_for_insert(dto: &CreateHabitDto) -> Self {
        Self {
            id: HabitId::generate(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            habit_type: dto.habit_type,
            frequency: Frequency::from(&dto.frequency),
            target: Target::from(&dto.target),
            status: HabitStatus::Ongoing,
            is_archived: false,
            end_date: dto.end_date,
            milestone: dto.milestone.as_ref().map(|m| Milestone {
                target: m.target,
                current: 0,
            }),
            metadata: EntityMetadata::new(),
        }
    }

    /// Overwrite every field carried by a full update.
    /// Milestone progress survives; a missing milestone is created.
    pub fn update(&mut self, dto: &UpdateHabitDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.habit_type = dto.habit_type;
        self.end_date = dto.end_date;
        self.frequency = Frequency::from(&dto.frequency);
        self.target = Target::from(&dto.target);

        if let Some(m) = &dto.milestone {
            let milestone = self.milestone.get_or_insert(Milestone {
                target: 0,
                current: 0,
            });
            milestone.target = m.target;
        }
    }

    /// Copy the patchable subset back onto the aggregate
    pub fn apply_write_back(&mut self, write_back: HabitWriteBack) {
        self.name = write_back.name;
        self.description = write_back.description;
    }

    /// Hook before persisting a mutation
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }

    /// Client-facing display form
    pub fn to_dto(&self) -> HabitDto {
        HabitDto {
            id: self.id.0.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            habit_type: self.habit_type,
            frequency: FrequencyDto {
                frequency_type: self.frequency.frequency_type,
                times_per_period: self.frequency.times_per_period,
            },
            target: TargetDto {
                value: self.target.value,
                unit: self.target.unit.clone(),
            },
            status: self.status,
            is_archived: self.is_archived,
            end_date: self.end_date,
            milestone: self.milestone.map(|m| MilestoneDto {
                target: m.target,
                current: m.current,
            }),
            created_at_utc: self.metadata.created_at_utc,
            updated_at_utc: self.metadata.updated_at_utc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_habit::dto::CreateMilestoneDto;

    fn create_dto() -> CreateHabitDto {
        CreateHabitDto {
            name: "Read".into(),
            description: None,
            habit_type: HabitType::Binary,
            frequency: FrequencyDto {
                frequency_type: FrequencyType::Daily,
                times_per_period: 1,
            },
            target: TargetDto::default(),
            end_date: None,
            milestone: Some(CreateMilestoneDto { target: 30 }),
        }
    }

    #[test]
    fn test_new_for_insert() {
        let habit = Habit::new_for_insert(&create_dto());
        assert!(habit.id.as_str().starts_with("h_"));
        assert_eq!(habit.status, HabitStatus::Ongoing);
        assert!(!habit.is_archived);
        assert_eq!(habit.milestone, Some(Milestone { target: 30, current: 0 }));
        assert_eq!(habit.metadata.created_at_utc, habit.metadata.updated_at_utc);
    }

    #[test]
    fn test_update_keeps_milestone_progress() {
        let mut habit = Habit::new_for_insert(&create_dto());
        habit.milestone = Some(Milestone { target: 30, current: 12 });
        habit.status = HabitStatus::Completed;

        let dto = UpdateHabitDto {
            name: "Read more".into(),
            description: Some("books".into()),
            habit_type: HabitType::Measurable,
            frequency: FrequencyDto {
                frequency_type: FrequencyType::Weekly,
                times_per_period: 3,
            },
            target: TargetDto {
                value: 20,
                unit: "pages".into(),
            },
            end_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            milestone: Some(CreateMilestoneDto { target: 50 }),
        };
        habit.update(&dto);

        assert_eq!(habit.name, "Read more");
        assert_eq!(habit.habit_type, HabitType::Measurable);
        assert_eq!(habit.frequency.times_per_period, 3);
        assert_eq!(habit.target.unit, "pages");
        assert_eq!(habit.milestone, Some(Milestone { target: 50, current: 12 }));
        // not carried by a full update
        assert_eq!(habit.status, HabitStatus::Completed);
    }

    #[test]
    fn test_update_creates_missing_milestone() {
        let mut dto = create_dto();
        dto.milestone = None;
        let mut habit = Habit::new_for_insert(&dto);

        let update = UpdateHabitDto {
            name: dto.name.clone(),
            description: None,
            habit_type: dto.habit_type,
            frequency: dto.frequency.clone(),
            target: dto.target.clone(),
            end_date: None,
            milestone: Some(CreateMilestoneDto { target: 10 }),
        };
        habit.update(&update);
        assert_eq!(habit.milestone, Some(Milestone { target: 10, current: 0 }));
    }

    #[test]
    fn test_to_dto_round_trips_fields() {
        let habit = Habit::new_for_insert(&create_dto());
        let dto = habit.to_dto();
        assert_eq!(dto.id, habit.id.0);
        assert_eq!(dto.frequency.frequency_type, FrequencyType::Daily);
        assert_eq!(dto.milestone.map(|m| m.target), Some(30));
        assert_eq!(dto.created_at_utc, dto.updated_at_utc);
    }
}
