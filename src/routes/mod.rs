mod categories;
mod health;
mod products;
mod users;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    let api = Router::new()
        .merge(categories::router())
        .merge(products::router())
        .merge(users::router());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", api)
}
