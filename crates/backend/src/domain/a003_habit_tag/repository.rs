use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

/// Link between a habit and a tag
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "habit_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub habit_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: String,
    pub created_at_utc: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn tag_ids_for_habit<C: ConnectionTrait>(db: &C, habit_id: &str) -> anyhow::Result<Vec<String>> {
    let ids = Entity::find()
        .filter(Column::HabitId.eq(habit_id))
        .all(db)
        .await?
        .into_iter()
        .map(|m| m.tag_id)
        .collect();
    Ok(ids)
}

pub async fn insert_many<C: ConnectionTrait>(
    db: &C,
    habit_id: &str,
    tag_ids: &[String],
) -> anyhow::Result<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    let now = Utc::now();
    let links = tag_ids.iter().map(|tag_id| ActiveModel {
        habit_id: Set(habit_id.to_string()),
        tag_id: Set(tag_id.clone()),
        created_at_utc: Set(now),
    });
    Entity::insert_many(links).exec_without_returning(db).await?;
    Ok(())
}

/// Drop the habit's links whose tag is not in `keep`
pub async fn delete_for_habit_except<C: ConnectionTrait>(
    db: &C,
    habit_id: &str,
    keep: &[String],
) -> anyhow::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::HabitId.eq(habit_id))
        .filter(Column::TagId.is_not_in(keep.iter().cloned()))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_link<C: ConnectionTrait>(db: &C, habit_id: &str, tag_id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::HabitId.eq(habit_id))
        .filter(Column::TagId.eq(tag_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_for_habit<C: ConnectionTrait>(db: &C, habit_id: &str) -> anyhow::Result<()> {
    Entity::delete_many()
        .filter(Column::HabitId.eq(habit_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn delete_for_tag<C: ConnectionTrait>(db: &C, tag_id: &str) -> anyhow::Result<()> {
    Entity::delete_many()
        .filter(Column::TagId.eq(tag_id))
        .exec(db)
        .await?;
    Ok(())
}
