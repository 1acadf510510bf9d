use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::{User, UserRequest},
    queries::user_queries,
};

pub async fn create(pool: &PgPool, req: UserRequest) -> Result<User> {
    req.validate()?;

    let password_hash = hash_password(&req.password)?;

    user_queries::insert(pool, &req.username, &req.email, &password_hash).await
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<User> {
    user_queries::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<User>> {
    user_queries::get_all(pool).await
}

pub async fn update(pool: &PgPool, id: i32, req: UserRequest) -> Result<User> {
    req.validate()?;

    let password_hash = hash_password(&req.password)?;

    user_queries::update(pool, id, &req.username, &req.email, &password_hash)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<()> {
    user_queries::delete(pool, id).await?;

    Ok(())
}

pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_produces_verifiable_hash() {
        let hash = hash_password("hunter2").unwrap();

        assert_ne!(hash, "hunter2");
        assert!(bcrypt::verify("hunter2", &hash).unwrap());
    }
}
