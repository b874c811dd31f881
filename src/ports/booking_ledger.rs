use crate::domain::SavedBooking;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約台帳ポート（参照専用）
///
/// 予約一覧の表示に使用される。予約処理からは参照しない。
#[async_trait]
pub trait BookingLedger: Send + Sync {
    /// 保存済みの予約を日付順にすべて取得する
    async fn get_all(&self) -> Result<Vec<SavedBooking>>;
}
