use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// JSON extractor whose rejection is an `AppError`, so binding failures come
/// back as a 400 inside the standard response envelope.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(AppJson(data))
    }
}

/// Parse a path segment as a non-negative record ID.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), Some(0));
    }

    #[test]
    fn test_parse_id_rejects_non_numeric_input() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("12abc"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_parse_id_rejects_negative_and_overflowing_input() {
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
