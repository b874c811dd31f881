use crate::domain::{Booking, BookingId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ストアポート
///
/// 予約の永続化と予約IDの採番を担う。
/// 予約IDを決めるのはこのポートの実装のみ。
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約を保存し、採番された予約IDを返す
    async fn save(&self, booking: Booking) -> Result<BookingId>;
}
