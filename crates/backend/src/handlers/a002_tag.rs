use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::domain::a002_tag::aggregate::{CreateTagDto, TagDto, TagsCollectionDto, UpdateTagDto};

use super::{body_error, BODY_ERROR_KEY};
use crate::domain::a002_tag;
use crate::routes::AppState;
use crate::shared::error::AppResult;

/// GET /tags
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<TagsCollectionDto>> {
    Ok(Json(a002_tag::service::list_all(&state.db).await?))
}

/// GET /tags/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TagDto>> {
    Ok(Json(a002_tag::service::get_by_id(&state.db, &id).await?))
}

/// POST /tags
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTagDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(dto) = payload.map_err(|rejection| body_error(BODY_ERROR_KEY, rejection))?;
    let tag = a002_tag::service::create(&state.db, dto).await?;
    let location = format!("/tags/{}", tag.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(tag)))
}

/// PUT /tags/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTagDto>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            a002_tag::service::ensure_exists(&state.db, &id).await?;
            return Err(body_error(BODY_ERROR_KEY, rejection));
        }
    };
    a002_tag::service::update(&state.db, &id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tags/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    a002_tag::service::delete(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
