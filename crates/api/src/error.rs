//! Error boundary for request handlers.
//!
//! Input errors are returned to the caller as plain text with a 4xx status.
//! Everything else becomes a 500 with a fixed message; the cause is only
//! logged.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fxrates_core::currency::RateError;
use fxrates_shared::AppError;
use tracing::error;

/// Body of every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler error convertible into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0 {
            AppError::Validation(message) => (status, message).into_response(),
            err @ (AppError::Config(_) | AppError::Internal(_)) => {
                error!(error = %err, code = err.error_code(), "Request failed");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
}

/// Turns a handler panic into the generic 500 response.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = detail, "Handler panicked");
    internal_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_validation_is_plain_text_400() {
        let response = ApiError::from(RateError::InvalidAmount).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_text(response).await, "Amount must be greater than 0");
    }

    #[tokio::test]
    async fn test_invalid_currency_message() {
        let response =
            ApiError::from(RateError::InvalidCurrency("xyz".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Currency xyz not supported");
    }

    #[tokio::test]
    async fn test_internal_detail_is_hidden() {
        let response =
            ApiError::from(RateError::Arithmetic("cannot divide".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_MESSAGE);

        let response = ApiError(AppError::Config("bad table".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_MESSAGE);
    }

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let app: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], INTERNAL_ERROR_MESSAGE.as_bytes());
    }
}
