use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::validation::{ValidationErrors, ValidationRules};

const NAME: ValidationRules = ValidationRules::required().with_max_length(50);
const DESCRIPTION: ValidationRules = ValidationRules::none().with_max_length(500);

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(pub String);

impl AggregateId for TagId {
    const PREFIX: &'static str = "t";

    fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Label that can be attached to any number of habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub description: Option<String>,
    pub metadata: EntityMetadata,
}

impl Tag {
    pub fn new_for_insert(dto: &CreateTagDto) -> Self {
        Self {
            id: TagId::generate(),
            name: dto.name.clone(),
            description: dto.description.clone(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: &UpdateTagDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }

    pub fn to_dto(&self) -> TagDto {
        TagDto {
            id: self.id.0.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at_utc: self.metadata.created_at_utc,
            updated_at_utc: self.metadata.updated_at_utc,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TagsCollectionDto {
    pub items: Vec<TagDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTagDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTagDto {
    pub name: String,
    pub description: Option<String>,
}

fn check(name: &str, description: Option<&str>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    NAME.check_string(&mut errors, "name", name);
    if let Some(description) = description {
        DESCRIPTION.check_string(&mut errors, "description", description);
    }
    errors.into_result()
}

impl CreateTagDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check(&self.name, self.description.as_deref())
    }
}

impl UpdateTagDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check(&self.name, self.description.as_deref())
    }
}
