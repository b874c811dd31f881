use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookingId, BookingResultCode, DeskId, RequestValidationError};

/// 氏名・メールアドレスの最大文字数
pub const MAX_FIELD_LENGTH: usize = 50;

/// 座席予約リクエスト
///
/// 呼び出し側で構築される不変の入力値。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

/// 座席 - 座席ディレクトリが列挙する物理的な座席
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub id: DeskId,
    pub description: Option<String>,
}

impl Desk {
    pub fn new(id: DeskId) -> Self {
        Self {
            id,
            description: None,
        }
    }
}

/// 未保存の予約
///
/// 予約IDは持たない。IDは予約ストアの保存結果としてのみ得られる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub desk_id: DeskId,
}

impl Booking {
    /// 純粋関数：リクエストと空き座席から予約を組み立てる
    pub fn for_desk(request: &BookingRequest, desk: &Desk) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            desk_id: desk.id,
        }
    }
}

/// 保存済みの予約（予約台帳の参照用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBooking {
    pub id: BookingId,
    #[serde(flatten)]
    pub booking: Booking,
}

impl std::ops::Deref for SavedBooking {
    type Target = Booking;

    fn deref(&self) -> &Self::Target {
        &self.booking
    }
}

/// 予約処理の結果
///
/// 氏名・メールアドレス・日付は結果コードに関わらずリクエストから引き写す。
/// `booking_id`は`Success`の場合のみ存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResult {
    pub code: BookingResultCode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub booking_id: Option<BookingId>,
}

impl BookingResult {
    /// 純粋関数：リクエストと保存結果から処理結果を組み立てる
    pub fn from_request(request: &BookingRequest, booking_id: Option<BookingId>) -> Self {
        let code = match booking_id {
            Some(_) => BookingResultCode::Success,
            None => BookingResultCode::NoDeskAvailable,
        };

        Self {
            code,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            booking_id,
        }
    }
}

/// 純粋関数：リクエストの入力値を検証する
///
/// ルール：
/// - 氏名・メールアドレスは必須（空白のみは不可）
/// - 各項目は50文字以内
/// - メールアドレスは`@`を1つだけ含み、前後が空でないこと
pub fn validate_request(request: &BookingRequest) -> Result<(), RequestValidationError> {
    let fields = [
        ("first_name", &request.first_name),
        ("last_name", &request.last_name),
        ("email", &request.email),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(RequestValidationError::Required(name));
        }
        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(RequestValidationError::TooLong {
                field: name,
                max: MAX_FIELD_LENGTH,
            });
        }
    }

    match request.email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(RequestValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            first_name: "Diego".to_string(),
            last_name: "Martins".to_string(),
            email: "dvieira@email.com".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 28).unwrap(),
        }
    }

    #[test]
    fn test_booking_for_desk_copies_request_fields() {
        let request = request();
        let desk = Desk::new(DeskId::new(7));

        let booking = Booking::for_desk(&request, &desk);

        assert_eq!(booking.first_name, "Diego");
        assert_eq!(booking.last_name, "Martins");
        assert_eq!(booking.email, "dvieira@email.com");
        assert_eq!(booking.date, request.date);
        assert_eq!(booking.desk_id, DeskId::new(7));
    }

    #[test]
    fn test_result_from_request_with_booking_id_is_success() {
        let request = request();

        let result = BookingResult::from_request(&request, Some(BookingId::new(5)));

        assert_eq!(result.code, BookingResultCode::Success);
        assert_eq!(result.booking_id, Some(BookingId::new(5)));
        assert_eq!(result.first_name, request.first_name);
        assert_eq!(result.date, request.date);
    }

    #[test]
    fn test_result_from_request_without_booking_id_is_no_desk_available() {
        let request = request();

        let result = BookingResult::from_request(&request, None);

        assert_eq!(result.code, BookingResultCode::NoDeskAvailable);
        assert_eq!(result.booking_id, None);
        assert_eq!(result.email, request.email);
    }

    #[test]
    fn test_saved_booking_derefs_to_booking() {
        let saved = SavedBooking {
            id: BookingId::new(1),
            booking: Booking::for_desk(&request(), &Desk::new(DeskId::new(3))),
        };

        assert_eq!(saved.desk_id, DeskId::new(3));
        assert_eq!(saved.last_name, "Martins");
    }

    #[test]
    fn test_validate_request_accepts_valid_request() {
        assert_eq!(validate_request(&request()), Ok(()));
    }

    #[test]
    fn test_validate_request_rejects_blank_first_name() {
        let mut request = request();
        request.first_name = "   ".to_string();

        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::Required("first_name"))
        );
    }

    #[test]
    fn test_validate_request_rejects_long_last_name() {
        let mut request = request();
        request.last_name = "x".repeat(MAX_FIELD_LENGTH + 1);

        assert_eq!(
            validate_request(&request),
            Err(RequestValidationError::TooLong {
                field: "last_name",
                max: MAX_FIELD_LENGTH
            })
        );
    }

    #[test]
    fn test_validate_request_rejects_malformed_email() {
        for email in ["dvieira", "@email.com", "dvieira@", "a@b@c"] {
            let mut request = request();
            request.email = email.to_string();

            assert_eq!(
                validate_request(&request),
                Err(RequestValidationError::InvalidEmail),
                "email: {}",
                email
            );
        }
    }
}
