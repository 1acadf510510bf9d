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
    models::{ApiResponse, ProductRequest},
    services::product_service,
    utils::extractors::{AppJson, parse_id},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(get_all_products))
        .route("/products/category/{categoryId}", get(get_products_by_category))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<impl IntoResponse> {
    let product = product_service::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let product = product_service::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::success(product)))
}

pub async fn get_all_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = product_service::get_all(&state.db).await?;

    Ok(Json(ApiResponse::success(products)))
}

pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse> {
    let category_id = parse_id(&category_id)
        .ok_or_else(|| AppError::BadRequest("Invalid Category ID".to_string()))?;

    let products = product_service::get_by_category_id(&state.db, category_id).await?;

    Ok(Json(ApiResponse::success(products)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<impl IntoResponse> {
    // Any id in the body is ignored; the URL id identifies the row
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let product = product_service::update(&state.db, id, payload).await?;

    Ok(Json(ApiResponse::success(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id).ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    product_service::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::success("Product deleted successfully")))
}
