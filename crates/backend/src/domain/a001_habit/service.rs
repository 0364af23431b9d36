use super::repository;
use crate::domain::{a002_tag, a003_habit_tag};
use crate::shared::error::{AppError, AppResult};
use contracts::domain::a001_habit::aggregate::Habit;
use contracts::domain::a001_habit::dto::{
    CreateHabitDto, HabitDto, HabitWithTagsDto, HabitsCollectionDto, UpdateHabitDto,
};
use contracts::domain::a001_habit::patch::HabitWriteBack;
use contracts::shared::json_patch::JsonPatch;
use sea_orm::{DatabaseConnection, TransactionTrait};

pub const HABIT_REMOVED: &str = "Habit was removed from the system.";

/// Every stored habit in display form, oldest first
pub async fn list_all(db: &DatabaseConnection) -> AppResult<HabitsCollectionDto> {
    let items = repository::list_all(db)
        .await?
        .iter()
        .map(Habit::to_dto)
        .collect();
    Ok(HabitsCollectionDto { items })
}

/// Display form of one habit plus the names of its tags
pub async fn get_with_tags(db: &DatabaseConnection, id: &str) -> AppResult<HabitWithTagsDto> {
    let habit = repository::get_by_id(db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let tag_ids = a003_habit_tag::repository::tag_ids_for_habit(db, id).await?;
    let tags = a002_tag::repository::names_by_ids(db, &tag_ids).await?;

    Ok(HabitWithTagsDto {
        habit: habit.to_dto(),
        tags,
    })
}

/// `NotFound` unless the habit exists
pub async fn ensure_exists(db: &DatabaseConnection, id: &str) -> AppResult<()> {
    match repository::get_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound),
    }
}

pub async fn create(db: &DatabaseConnection, dto: CreateHabitDto) -> AppResult<HabitDto> {
    dto.validate()?;

    let habit = Habit::new_for_insert(&dto);
    repository::insert(db, &habit).await?;

    tracing::info!("Habit {} created", habit.id);
    Ok(habit.to_dto())
}

/// Full replacement of the client-editable fields
pub async fn update(db: &DatabaseConnection, id: &str, dto: UpdateHabitDto) -> AppResult<()> {
    let txn = db.begin().await?;

    let mut habit = repository::get_by_id(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;

    dto.validate()?;
    habit.update(&dto);
    habit.before_write();
    repository::update(&txn, &habit).await?;

    txn.commit().await?;
    Ok(())
}

/// Apply a JSON patch to the display form and persist only the write-back subset.
///
/// The candidate is validated as a whole, so a patch that breaks a field outside
/// the subset is still rejected even though that field would never be stored.
pub async fn patch(db: &DatabaseConnection, id: &str, patch: JsonPatch) -> AppResult<()> {
    let txn = db.begin().await?;

    let mut habit = repository::get_by_id(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let candidate = habit.to_dto().apply_patch(&patch)?;
    candidate.validate()?;

    habit.apply_write_back(HabitWriteBack::from(candidate));
    habit.before_write();
    repository::update(&txn, &habit).await?;

    txn.commit().await?;
    Ok(())
}

/// Remove a habit together with its tag links.
/// An absent id answers `Gone`, whether it was deleted before or never existed.
pub async fn delete(db: &DatabaseConnection, id: &str) -> AppResult<()> {
    let txn = db.begin().await?;

    a003_habit_tag::repository::delete_for_habit(&txn, id).await?;
    if !repository::delete(&txn, id).await? {
        return Err(AppError::Gone(HABIT_REMOVED.into()));
    }

    txn.commit().await?;
    tracing::info!("Habit {} deleted", id);
    Ok(())
}
