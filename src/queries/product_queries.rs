use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

/// Find product by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Get all products
pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Get products belonging to a single category
pub async fn find_by_category_id(pool: &PgPool, category_id: i32) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category_id = $1")
            .bind(category_id)
            .fetch_all(pool)
            .await?;

    Ok(products)
}

/// Get products for multiple categories, grouped by category ID
pub async fn find_by_category_ids(
    pool: &PgPool,
    category_ids: &[i32],
) -> Result<HashMap<i32, Vec<Product>>> {
    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category_id = ANY($1)")
            .bind(category_ids)
            .fetch_all(pool)
            .await?;

    let mut product_map: HashMap<i32, Vec<Product>> = HashMap::new();
    for product in products {
        product_map
            .entry(product.category_id)
            .or_default()
            .push(product);
    }

    Ok(product_map)
}

/// Create a new product
pub async fn insert(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (title, price, description, category_id)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&req.title)
    .bind(req.price)
    .bind(&req.description)
    .bind(req.category_id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Replace every column of an existing product
pub async fn update(pool: &PgPool, id: i32, req: &ProductRequest) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET title = $1, price = $2, description = $3, category_id = $4, updated_at = NOW()
         WHERE id = $5
         RETURNING *",
    )
    .bind(&req.title)
    .bind(req.price)
    .bind(&req.description)
    .bind(req.category_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
