use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CategoryRequest},
};

/// Find category by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Get all categories
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// Create a new category
pub async fn insert(pool: &PgPool, req: &CategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING *",
    )
    .bind(&req.name)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Replace every column of an existing category
pub async fn update(pool: &PgPool, id: i32, req: &CategoryRequest) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "UPDATE categories SET name = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(&req.name)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

/// Delete a category
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
