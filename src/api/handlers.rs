use crate::application::booking::{
    ServiceDependencies, book_desk as execute_book_desk, list_bookings as execute_list_bookings,
};
use crate::domain::{BookingResultCode, validate_request};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookDeskRequest, BookDeskResponse, BookingResponse},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// POST /bookings - 座席を予約
///
/// 本文がない、またはJSONとして解釈できない場合はリクエストなしとして
/// 予約処理に渡し、400を返す。
///
/// - 予約成功: 201 Created
/// - 空き座席なし: 409 Conflict（本文は同じ形式で`booking_id`がnull）
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    body: Option<Json<BookDeskRequest>>,
) -> Result<(StatusCode, Json<BookDeskResponse>), ApiError> {
    let request = body.map(|Json(req)| req.to_request());

    if let Some(request) = &request {
        validate_request(request)?;
    }

    let result = execute_book_desk(&state.service_deps, request).await?;

    let status = match result.code {
        BookingResultCode::Success => StatusCode::CREATED,
        BookingResultCode::NoDeskAvailable => StatusCode::CONFLICT,
    };

    Ok((status, Json(BookDeskResponse::from(result))))
}

/// GET /bookings - 予約一覧を日付順に取得
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = execute_list_bookings(&state.service_deps).await?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
