use serde::Serialize;

/// Uniform response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error_field() {
        let json = serde_json::to_value(ApiResponse::success("hello")).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "hello");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_omits_data_field() {
        let json = serde_json::to_value(ApiResponse::<()>::error("Invalid ID")).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid ID");
        assert!(json.get("data").is_none());
    }
}
