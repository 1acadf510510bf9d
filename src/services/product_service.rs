use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest},
    queries::{category_queries, product_queries},
};

pub async fn create(pool: &PgPool, req: ProductRequest) -> Result<Product> {
    req.validate()?;

    // The referenced category must exist before a product can point at it
    if category_queries::find_by_id(pool, req.category_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    product_queries::insert(pool, &req).await
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Product> {
    product_queries::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    product_queries::get_all(pool).await
}

pub async fn get_by_category_id(pool: &PgPool, category_id: i32) -> Result<Vec<Product>> {
    // A category with no products yields an empty list, not an error
    product_queries::find_by_category_id(pool, category_id).await
}

pub async fn update(pool: &PgPool, id: i32, req: ProductRequest) -> Result<Product> {
    req.validate()?;

    product_queries::update(pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<()> {
    product_queries::delete(pool, id).await?;

    Ok(())
}
