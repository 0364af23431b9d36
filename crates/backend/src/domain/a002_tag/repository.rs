use contracts::domain::a002_tag::aggregate::{Tag, TagId};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at_utc: chrono::DateTime<chrono::Utc>,
    pub updated_at_utc: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tag {
    fn from(m: Model) -> Self {
        Tag {
            id: TagId(m.id),
            name: m.name,
            description: m.description,
            metadata: EntityMetadata {
                created_at_utc: m.created_at_utc,
                updated_at_utc: m.updated_at_utc,
            },
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Tag>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: &str) -> anyhow::Result<Option<Tag>> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_name<C: ConnectionTrait>(db: &C, name: &str) -> anyhow::Result<Option<Tag>> {
    let result = Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

/// Names of the given tags, alphabetical
pub async fn names_by_ids<C: ConnectionTrait>(db: &C, ids: &[String]) -> anyhow::Result<Vec<String>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let names = Entity::find()
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();
    Ok(names)
}

/// How many of `ids` exist
pub async fn count_existing<C: ConnectionTrait>(db: &C, ids: &[String]) -> anyhow::Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let count = Entity::find()
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn insert<C: ConnectionTrait>(db: &C, tag: &Tag) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(tag.id.0.clone()),
        name: Set(tag.name.clone()),
        description: Set(tag.description.clone()),
        created_at_utc: Set(tag.metadata.created_at_utc),
        updated_at_utc: Set(tag.metadata.updated_at_utc),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn update<C: ConnectionTrait>(db: &C, tag: &Tag) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(tag.id.0.clone()),
        name: Set(tag.name.clone()),
        description: Set(tag.description.clone()),
        updated_at_utc: Set(tag.metadata.updated_at_utc),
        created_at_utc: sea_orm::ActiveValue::NotSet,
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
