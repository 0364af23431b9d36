use super::repository;
use crate::domain::{a001_habit, a002_tag};
use crate::shared::error::{AppError, AppResult};
use contracts::domain::a003_habit_tag::dto::UpsertHabitTagsDto;
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Make `dto.tag_ids` the exact tag set of the habit.
/// Links already present keep their creation time.
pub async fn upsert(db: &DatabaseConnection, habit_id: &str, dto: UpsertHabitTagsDto) -> AppResult<()> {
    let mut tag_ids = dto.tag_ids;
    tag_ids.sort();
    tag_ids.dedup();

    let txn = db.begin().await?;

    if a001_habit::repository::get_by_id(&txn, habit_id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let existing_tags = a002_tag::repository::count_existing(&txn, &tag_ids).await?;
    if existing_tags != tag_ids.len() as u64 {
        return Err(AppError::BadRequest("One or more tag ids is invalid".into()));
    }

    let current = repository::tag_ids_for_habit(&txn, habit_id).await?;
    repository::delete_for_habit_except(&txn, habit_id, &tag_ids).await?;

    let added: Vec<String> = tag_ids
        .into_iter()
        .filter(|id| !current.contains(id))
        .collect();
    repository::insert_many(&txn, habit_id, &added).await?;

    txn.commit().await?;
    Ok(())
}

/// Detach one tag from a habit
pub async fn remove(db: &DatabaseConnection, habit_id: &str, tag_id: &str) -> AppResult<()> {
    if !repository::delete_link(db, habit_id, tag_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(())
}
