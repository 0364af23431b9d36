use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_habit_tag::dto::UpsertHabitTagsDto;

use super::{body_error, BODY_ERROR_KEY};
use crate::domain::{a001_habit, a003_habit_tag};
use crate::routes::AppState;
use crate::shared::error::AppResult;

/// PUT /habits/:id/tags
pub async fn upsert(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    payload: Result<Json<UpsertHabitTagsDto>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            a001_habit::service::ensure_exists(&state.db, &habit_id).await?;
            return Err(body_error(BODY_ERROR_KEY, rejection));
        }
    };
    a003_habit_tag::service::upsert(&state.db, &habit_id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /habits/:id/tags/:tag_id
pub async fn remove(
    State(state): State<AppState>,
    Path((habit_id, tag_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    a003_habit_tag::service::remove(&state.db, &habit_id, &tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
