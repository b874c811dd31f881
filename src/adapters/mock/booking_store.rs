use crate::domain::{Booking, BookingId, SavedBooking};
use crate::ports::booking_ledger::{self, BookingLedger};
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// モックアダプタ間で共有する予約テーブル
pub type SharedBookings = Arc<Mutex<Vec<SavedBooking>>>;

/// BookingStoreのモック実装
///
/// 保存された予約をメモリ上に保持し、1から順に予約IDを採番する。
/// 予約台帳としても利用できる。
/// 予約テーブルは`DeskDirectory::for_store`で座席ディレクトリと共有できる。
#[derive(Debug)]
pub struct BookingStore {
    bookings: SharedBookings,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 予約テーブルへの共有ハンドル
    pub fn shared_bookings(&self) -> SharedBookings {
        Arc::clone(&self.bookings)
    }

    /// テスト用に保存済みの予約を保存順で取得
    pub fn saved_bookings(&self) -> Vec<SavedBooking> {
        self.bookings.lock().unwrap().clone()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 直前に採番したIDの次を採番する（上限を超える場合はエラー）
    async fn save(&self, booking: Booking) -> Result<BookingId> {
        let mut bookings = self.bookings.lock().unwrap();
        let next = bookings
            .last()
            .map_or(0, |saved| saved.id.value())
            .checked_add(1)
            .ok_or("booking id space exhausted")?;
        let id = BookingId::new(next);
        bookings.push(SavedBooking { id, booking });
        Ok(id)
    }
}

#[async_trait]
impl BookingLedger for BookingStore {
    /// 日付順（同日は保存順）に返す
    async fn get_all(&self) -> booking_ledger::Result<Vec<SavedBooking>> {
        let mut bookings = self.bookings.lock().unwrap().clone();
        bookings.sort_by_key(|saved| saved.date);
        Ok(bookings)
    }
}
