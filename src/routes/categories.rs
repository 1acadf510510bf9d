use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{ApiResponse, CategoryRequest},
    services::category_service,
    utils::extractors::{AppJson, parse_id},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category).get(get_all_categories))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> Result<impl IntoResponse> {
    let category = category_service::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let category = category_service::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::success(category)))
}

pub async fn get_all_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = category_service::get_all(&state.db).await?;

    Ok(Json(ApiResponse::success(categories)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> Result<impl IntoResponse> {
    // Any id in the body is ignored; the URL id identifies the row
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let category = category_service::update(&state.db, id, payload).await?;

    Ok(Json(ApiResponse::success(category)))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    category_service::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::success("Category deleted successfully")))
}
