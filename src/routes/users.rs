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
    models::{ApiResponse, UserRequest},
    services::user_service,
    utils::extractors::{AppJson, parse_id},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(get_all_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<impl IntoResponse> {
    let user = user_service::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let user = user_service::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::success(user)))
}

pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = user_service::get_all(&state.db).await?;

    Ok(Json(ApiResponse::success(users)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<impl IntoResponse> {
    // Any id in the body is ignored; the URL id identifies the row
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let user = user_service::update(&state.db, id, payload).await?;

    Ok(Json(ApiResponse::success(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    user_service::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::success("User deleted successfully")))
}
