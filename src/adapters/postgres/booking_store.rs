use crate::domain::{Booking, BookingId, DeskId, SavedBooking};
use crate::ports::booking_ledger::{self, BookingLedger};
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをSavedBookingに変換する
fn map_row_to_saved_booking(row: &PgRow) -> SavedBooking {
    SavedBooking {
        id: BookingId::new(row.get("id")),
        booking: Booking {
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            date: row.get("date"),
            desk_id: DeskId::new(row.get("desk_id")),
        },
    }
}

/// BookingStore / BookingLedgerのPostgreSQL実装
///
/// desk_bookingsには(desk_id, date)の一意制約があるため、
/// 同じ座席・同じ日付への二重保存はデータベースエラーとして返る。
pub struct BookingStore {
    pool: PgPool,
}

impl BookingStore {
    /// PostgreSQLコネクションプールから新しいBookingStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 予約を保存し、採番されたIDを返す
    async fn save(&self, booking: Booking) -> Result<BookingId> {
        let row = sqlx::query(
            r#"
            INSERT INTO desk_bookings (
                desk_id,
                first_name,
                last_name,
                email,
                date
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(booking.desk_id.value())
        .bind(booking.first_name)
        .bind(booking.last_name)
        .bind(booking.email)
        .bind(booking.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(BookingId::new(row.get("id")))
    }
}

#[async_trait]
impl BookingLedger for BookingStore {
    /// 全予約を日付順に取得
    async fn get_all(&self) -> booking_ledger::Result<Vec<SavedBooking>> {
        let rows: Vec<PgRow> = sqlx::query(
            r#"
            SELECT
                id,
                desk_id,
                first_name,
                last_name,
                email,
                date
            FROM desk_bookings
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch(&self.pool)
        .try_collect()
        .await?;

        Ok(rows.iter().map(map_row_to_saved_booking).collect())
    }
}
