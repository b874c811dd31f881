use crate::domain::{Booking, BookingRequest, BookingResult, SavedBooking};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、純粋な関数に依存関係を渡すためのデータ構造。
/// 各ポートは単一の操作だけを公開するので、テストでは差し替えが容易。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub desk_directory: Arc<dyn DeskDirectory>,
    pub booking_store: Arc<dyn BookingStore>,
    pub booking_ledger: Arc<dyn BookingLedger>,
}

/// 座席を予約する
///
/// ビジネスルール：
/// - リクエストが渡されない場合は`InvalidArgument("request")`。ポートは一切呼ばない
/// - 指定日の空き座席のうち、座席ディレクトリが返した先頭の座席を割り当てる
/// - 空き座席がある場合のみ予約を組み立て、予約ストアに1回だけ保存する
/// - 結果の予約IDは予約ストアが返したIDのみ
/// - 氏名・メールアドレス・日付は結果コードに関わらずリクエストから引き写す
///
/// # 並行性
///
/// プロセッサ自身は状態を持たない。同時に呼ばれた2つの予約が同じ座席を
/// 空きと判断する可能性があり、二重予約の防止はポートの実装側
/// （例: PostgreSQLアダプタの一意制約）に委ねる。
///
/// # エラー
/// - InvalidArgument: リクエストが存在しない
/// - DeskDirectoryError / BookingStoreError: ポートのエラーをそのまま返す（再試行なし）
pub async fn book_desk(
    deps: &ServiceDependencies,
    request: Option<BookingRequest>,
) -> Result<BookingResult> {
    let request = request.ok_or(BookingApplicationError::InvalidArgument("request"))?;

    // 1. 指定日の空き座席を取得
    let available_desks = deps
        .desk_directory
        .get_available_desks(request.date)
        .await
        .map_err(BookingApplicationError::DeskDirectoryError)?;

    // 2. 先頭の座席を選択（並び順は座席ディレクトリに従う）
    let booking_id = match available_desks.first() {
        Some(desk) => {
            let booking = Booking::for_desk(&request, desk);

            // 3. 予約ストアに保存し、採番されたIDを受け取る
            let booking_id = deps
                .booking_store
                .save(booking)
                .await
                .map_err(BookingApplicationError::BookingStoreError)?;

            tracing::info!(
                booking_id = booking_id.value(),
                desk_id = desk.id.value(),
                date = %request.date,
                "desk booked"
            );
            Some(booking_id)
        }
        None => {
            tracing::debug!(date = %request.date, "no desk available");
            None
        }
    };

    // 4. 結果を組み立てる
    Ok(BookingResult::from_request(&request, booking_id))
}

/// 保存済みの予約を日付順に取得する
pub async fn list_bookings(deps: &ServiceDependencies) -> Result<Vec<SavedBooking>> {
    deps.booking_ledger
        .get_all()
        .await
        .map_err(BookingApplicationError::BookingLedgerError)
}
