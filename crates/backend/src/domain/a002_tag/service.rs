use super::repository;
use crate::domain::a003_habit_tag;
use crate::shared::error::{AppError, AppResult};
use contracts::domain::a002_tag::aggregate::{
    CreateTagDto, Tag, TagDto, TagsCollectionDto, UpdateTagDto,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

fn duplicate(name: &str) -> AppError {
    AppError::Conflict(format!("The tag '{}' already exists", name))
}

/// Reject `name` if another tag already carries it
async fn ensure_unique_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
    except_id: Option<&str>,
) -> AppResult<()> {
    match repository::get_by_name(db, name).await? {
        Some(existing) if Some(existing.id.0.as_str()) != except_id => Err(duplicate(name)),
        _ => Ok(()),
    }
}

pub async fn list_all(db: &DatabaseConnection) -> AppResult<TagsCollectionDto> {
    let items = repository::list_all(db)
        .await?
        .iter()
        .map(Tag::to_dto)
        .collect();
    Ok(TagsCollectionDto { items })
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> AppResult<TagDto> {
    repository::get_by_id(db, id)
        .await?
        .map(|tag| tag.to_dto())
        .ok_or(AppError::NotFound)
}

/// `NotFound` unless the tag exists
pub async fn ensure_exists(db: &DatabaseConnection, id: &str) -> AppResult<()> {
    match repository::get_by_id(db, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound),
    }
}

pub async fn create(db: &DatabaseConnection, dto: CreateTagDto) -> AppResult<TagDto> {
    dto.validate()?;

    let txn = db.begin().await?;
    ensure_unique_name(&txn, &dto.name, None).await?;

    let tag = Tag::new_for_insert(&dto);
    repository::insert(&txn, &tag).await?;
    txn.commit().await?;

    tracing::info!("Tag {} created", tag.id);
    Ok(tag.to_dto())
}

pub async fn update(db: &DatabaseConnection, id: &str, dto: UpdateTagDto) -> AppResult<()> {
    let txn = db.begin().await?;

    let mut tag = repository::get_by_id(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;

    dto.validate()?;
    ensure_unique_name(&txn, &dto.name, Some(id)).await?;

    tag.update(&dto);
    tag.before_write();
    repository::update(&txn, &tag).await?;

    txn.commit().await?;
    Ok(())
}

/// Remove a tag and detach it from every habit
pub async fn delete(db: &DatabaseConnection, id: &str) -> AppResult<()> {
    let txn = db.begin().await?;

    a003_habit_tag::repository::delete_for_tag(&txn, id).await?;
    if !repository::delete(&txn, id).await? {
        return Err(AppError::NotFound);
    }

    txn.commit().await?;
    tracing::info!("Tag {} deleted", id);
    Ok(())
}
