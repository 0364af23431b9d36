use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::domain::a001_habit::dto::{
    CreateHabitDto, HabitWithTagsDto, HabitsCollectionDto, UpdateHabitDto,
};
use contracts::domain::a001_habit::patch::PATCH_ERROR_KEY;
use contracts::shared::json_patch::JsonPatch;

use super::{body_error, BODY_ERROR_KEY};
use crate::domain::a001_habit;
use crate::routes::AppState;
use crate::shared::error::AppResult;

/// GET /habits
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<HabitsCollectionDto>> {
    Ok(Json(a001_habit::service::list_all(&state.db).await?))
}

/// GET /habits/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<HabitWithTagsDto>> {
    Ok(Json(a001_habit::service::get_with_tags(&state.db, &id).await?))
}

/// POST /habits
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateHabitDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(dto) = payload.map_err(|rejection| body_error(BODY_ERROR_KEY, rejection))?;
    let habit = a001_habit::service::create(&state.db, dto).await?;
    let location = format!("/habits/{}", habit.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(habit)))
}

/// PUT /habits/:id
///
/// An unknown id is reported before an unreadable body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateHabitDto>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            a001_habit::service::ensure_exists(&state.db, &id).await?;
            return Err(body_error(BODY_ERROR_KEY, rejection));
        }
    };
    a001_habit::service::update(&state.db, &id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /habits/:id
///
/// A body that is not a JSON patch document is reported as a validation
/// error keyed `patch`, once the id is known to exist.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JsonPatch>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(patch) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            a001_habit::service::ensure_exists(&state.db, &id).await?;
            return Err(body_error(PATCH_ERROR_KEY, rejection));
        }
    };
    a001_habit::service::patch(&state.db, &id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /habits/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    a001_habit::service::delete(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
