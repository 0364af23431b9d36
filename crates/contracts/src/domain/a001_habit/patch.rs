//! Partial update of a habit in two stages:
//! `HabitDto::apply_patch` produces a full candidate display form, then
//! `HabitWriteBack` narrows it to the only fields a patch may persist.

use serde_json::Value;

use super::dto::HabitDto;
use crate::shared::json_patch::{self, JsonPatch};
use crate::shared::validation::ValidationErrors;

/// Error key used when a failure cannot be tied to one operation path
pub const PATCH_ERROR_KEY: &str = "patch";

/// Fields a JSON patch is allowed to persist: `name` and `description`.
/// Anything else the patch touched in the display form is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitWriteBack {
    pub name: String,
    pub description: Option<String>,
}

impl From<HabitDto> for HabitWriteBack {
    fn from(dto: HabitDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

impl HabitDto {
    /// Apply `patch` to a copy of this display form.
    ///
    /// Structural failures (bad pointer, missing target, failed `test`,
    /// members the display form does not have, values of the wrong type)
    /// come back as validation errors keyed by the offending path.
    /// The candidate itself is not validated here.
    pub fn apply_patch(&self, patch: &JsonPatch) -> Result<HabitDto, ValidationErrors> {
        let original = serde_json::to_value(self)
            .map_err(|e| ValidationErrors::single(PATCH_ERROR_KEY, e.to_string()))?;

        let mut patched = original.clone();
        json_patch::apply(&mut patched, patch.operations()).map_err(|failure| {
            let key = if failure.path.is_empty() {
                PATCH_ERROR_KEY.to_string()
            } else {
                failure.path.clone()
            };
            ValidationErrors::single(key, failure.to_string())
        })?;

        if let Some(path) = unknown_member(&original, &patched, "") {
            return Err(ValidationErrors::single(
                path.clone(),
                format!("the target location '{}' was not found", path),
            ));
        }

        serde_json::from_value(patched)
            .map_err(|e| ValidationErrors::single(PATCH_ERROR_KEY, e.to_string()))
    }
}

/// First object member present in `patched` but absent from `original`
fn unknown_member(original: &Value, patched: &Value, at: &str) -> Option<String> {
    let (Value::Object(before), Value::Object(after)) = (original, patched) else {
        return None;
    };
    for (key, value) in after {
        let path = format!("{}/{}", at, key.replace('~', "~0").replace('/', "~1"));
        match before.get(key) {
            None => return Some(path),
            Some(previous) => {
                if let Some(found) = unknown_member(previous, value, &path) {
                    return Some(found);
                }
            }
        }
    }
    None
}
