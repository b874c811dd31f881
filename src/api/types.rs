use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{BookingRequest, BookingResult, SavedBooking};

/// 座席予約リクエスト（POST /bookings）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookDeskRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl BookDeskRequest {
    pub fn to_request(self) -> BookingRequest {
        BookingRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date: self.date,
        }
    }
}

/// 座席予約レスポンス（POST /bookings）
///
/// 空き座席がない場合も同じ形で返し、`booking_id`はnullになる。
#[derive(Debug, Deserialize, Serialize)]
pub struct BookDeskResponse {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub booking_id: Option<i32>,
}

impl From<BookingResult> for BookDeskResponse {
    fn from(result: BookingResult) -> Self {
        Self {
            code: result.code.as_str().to_string(),
            first_name: result.first_name,
            last_name: result.last_name,
            email: result.email,
            date: result.date,
            booking_id: result.booking_id.map(|id| id.value()),
        }
    }
}

/// 予約一覧の要素（GET /bookings）
#[derive(Debug, Deserialize, Serialize)]
pub struct BookingResponse {
    pub booking_id: i32,
    pub desk_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl From<SavedBooking> for BookingResponse {
    fn from(saved: SavedBooking) -> Self {
        Self {
            booking_id: saved.id.value(),
            desk_id: saved.booking.desk_id.value(),
            first_name: saved.booking.first_name,
            last_name: saved.booking.last_name,
            email: saved.booking.email,
            date: saved.booking.date,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
