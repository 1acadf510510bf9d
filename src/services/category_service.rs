use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{Category, CategoryRequest, CategoryWithProducts},
    queries::{category_queries, product_queries},
};

pub async fn create(pool: &PgPool, req: CategoryRequest) -> Result<Category> {
    req.validate()?;

    category_queries::insert(pool, &req).await
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<CategoryWithProducts> {
    let category = category_queries::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    let products = product_queries::find_by_category_id(pool, id).await?;

    Ok(CategoryWithProducts { category, products })
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<CategoryWithProducts>> {
    let categories = category_queries::get_all(pool).await?;

    let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    let mut product_map = product_queries::find_by_category_ids(pool, &category_ids).await?;

    let result = categories
        .into_iter()
        .map(|category| CategoryWithProducts {
            products: product_map.remove(&category.id).unwrap_or_default(),
            category,
        })
        .collect();

    Ok(result)
}

pub async fn update(pool: &PgPool, id: i32, req: CategoryRequest) -> Result<Category> {
    req.validate()?;

    category_queries::update(pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<()> {
    // Zero affected rows is not an error
    category_queries::delete(pool, id).await?;

    Ok(())
}
