use contracts::domain::a001_habit::aggregate::{Frequency, Habit, HabitId, Milestone, Target};
use contracts::domain::common::EntityMetadata;
use contracts::enums::{FrequencyType, HabitStatus, HabitType};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "habits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub habit_type: String,
    pub frequency_type: String,
    pub frequency_times_per_period: i32,
    pub target_value: i32,
    pub target_unit: String,
    pub status: String,
    pub is_archived: bool,
    pub end_date: Option<chrono::NaiveDate>,
    pub milestone_target: Option<i32>,
    pub milestone_current: Option<i32>,
    pub created_at_utc: chrono::DateTime<chrono::Utc>,
    pub updated_at_utc: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Parse a stored enum code; an unknown code means the row is corrupt
fn decode<T>(id: &str, column: &str, code: &str, parse: fn(&str) -> Option<T>) -> anyhow::Result<T> {
    parse(code).ok_or_else(|| {
        anyhow::anyhow!("habit {}: unknown {} code '{}'", id, column, code)
    })
}

impl TryFrom<Model> for Habit {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> anyhow::Result<Self> {
        let milestone = match (m.milestone_target, m.milestone_current) {
            (Some(target), Some(current)) => Some(Milestone { target, current }),
            (Some(target), None) => Some(Milestone { target, current: 0 }),
            _ => None,
        };

        Ok(Habit {
            habit_type: decode(&m.id, "habit_type", &m.habit_type, HabitType::from_code)?,
            frequency: Frequency {
                frequency_type: decode(
                    &m.id,
                    "frequency_type",
                    &m.frequency_type,
                    FrequencyType::from_code,
                )?,
                times_per_period: m.frequency_times_per_period,
            },
            status: decode(&m.id, "status", &m.status, HabitStatus::from_code)?,
            id: HabitId(m.id),
            name: m.name,
            description: m.description,
            target: Target {
                value: m.target_value,
                unit: m.target_unit,
            },
            is_archived: m.is_archived,
            end_date: m.end_date,
            milestone,
            metadata: EntityMetadata {
                created_at_utc: m.created_at_utc,
                updated_at_utc: m.updated_at_utc,
            },
        })
    }
}

fn to_active_model(habit: &Habit) -> ActiveModel {
    ActiveModel {
        id: Set(habit.id.0.clone()),
        name: Set(habit.name.clone()),
        description: Set(habit.description.clone()),
        habit_type: Set(habit.habit_type.code().to_string()),
        frequency_type: Set(habit.frequency.frequency_type.code().to_string()),
        frequency_times_per_period: Set(habit.frequency.times_per_period),
        target_value: Set(habit.target.value),
        target_unit: Set(habit.target.unit.clone()),
        status: Set(habit.status.code().to_string()),
        is_archived: Set(habit.is_archived),
        end_date: Set(habit.end_date),
        milestone_target: Set(habit.milestone.map(|m| m.target)),
        milestone_current: Set(habit.milestone.map(|m| m.current)),
        created_at_utc: Set(habit.metadata.created_at_utc),
        updated_at_utc: Set(habit.metadata.updated_at_utc),
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Habit>> {
    let items = Entity::find()
        .order_by_asc(Column::CreatedAtUtc)
        .all(db)
        .await?
        .into_iter()
        .map(Habit::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: &str) -> anyhow::Result<Option<Habit>> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    result.map(Habit::try_from).transpose()
}

pub async fn insert<C: ConnectionTrait>(db: &C, habit: &Habit) -> anyhow::Result<()> {
    to_active_model(habit).insert(db).await?;
    Ok(())
}

pub async fn update<C: ConnectionTrait>(db: &C, habit: &Habit) -> anyhow::Result<()> {
    let mut active = to_active_model(habit);
    active.created_at_utc = sea_orm::ActiveValue::NotSet;
    active.update(db).await?;
    Ok(())
}

/// Hard delete; `false` when no row matched
pub async fn delete<C: ConnectionTrait>(db: &C, id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
