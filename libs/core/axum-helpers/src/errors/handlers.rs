use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        ErrorCode::NotFound,
        "The requested resource was not found",
    )
    .into_response_with(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_not_found_body() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["code"], 1004);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
