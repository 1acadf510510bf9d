use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{CategoryRequest, ProductRequest, UserRequest},
    queries::{category_queries, product_queries, user_queries},
    services::user_service,
};

const SCHEMA: &str = include_str!("../migrations/0001_create_tables.sql");

/// Drop and recreate every table, then load all fixtures. Categories are
/// seeded before products so category references point at existing rows.
/// The first failing record aborts the whole run.
pub async fn run(pool: &PgPool) -> Result<()> {
    reset_schema(pool).await?;

    categories(pool).await?;
    products(pool).await?;
    users(pool).await?;

    Ok(())
}

async fn reset_schema(pool: &PgPool) -> Result<()> {
    sqlx::raw_sql("DROP TABLE IF EXISTS products, categories, users")
        .execute(pool)
        .await?;

    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    tracing::info!("Tables dropped and recreated");

    Ok(())
}

pub async fn categories(pool: &PgPool) -> Result<()> {
    let records: Vec<CategoryRequest> = read_fixture("data/categories.json")?;

    for record in &records {
        category_queries::insert(pool, record).await?;
    }

    tracing::info!("Seeded {} categories", records.len());

    Ok(())
}

pub async fn products(pool: &PgPool) -> Result<()> {
    let records: Vec<ProductRequest> = read_fixture("data/products.json")?;

    for record in &records {
        product_queries::insert(pool, record).await?;
    }

    tracing::info!("Seeded {} products", records.len());

    Ok(())
}

pub async fn users(pool: &PgPool) -> Result<()> {
    let records: Vec<UserRequest> = read_fixture("data/users.json")?;

    for record in &records {
        let password_hash = user_service::hash_password(&record.password)?;
        user_queries::insert(pool, &record.username, &record.email, &password_hash).await?;
    }

    tracing::info!("Seeded {} users", records.len());

    Ok(())
}

fn read_fixture<T: serde::de::DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AppError::InternalError(format!("Failed to read {}: {}", path, e)))?;

    serde_json::from_str(&data)
        .map_err(|e| AppError::InternalError(format!("Failed to parse {}: {}", path, e)))
}
