use crate::application::booking::BookingApplicationError;
use crate::domain::RequestValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層・入力検証のエラーをHTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(BookingApplicationError),
    Validation(RequestValidationError),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - リクエスト本文がない、または解釈できない
            ApiError::Application(BookingApplicationError::InvalidArgument(param)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("Missing or malformed {}", param),
            ),

            // 422 Unprocessable Entity - 入力値の検証エラー
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                err.to_string(),
            ),

            // 500 Internal Server Error - ポートの障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(BookingApplicationError::DeskDirectoryError(e)) => {
                tracing::error!("Desk directory error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DESK_DIRECTORY_ERROR",
                    "Failed to look up available desks".to_string(),
                )
            }
            ApiError::Application(BookingApplicationError::BookingStoreError(e)) => {
                tracing::error!("Booking store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_STORE_ERROR",
                    "Failed to save booking".to_string(),
                )
            }
            ApiError::Application(BookingApplicationError::BookingLedgerError(e)) => {
                tracing::error!("Booking ledger error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_LEDGER_ERROR",
                    "Failed to load bookings".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
