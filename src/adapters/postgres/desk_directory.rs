use crate::domain::{Desk, DeskId};
use crate::ports::desk_directory::{DeskDirectory as DeskDirectoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

/// DeskDirectoryのPostgreSQL実装
///
/// desk_bookingsに同日の予約がない座席を空き座席とする。
pub struct DeskDirectory {
    pool: PgPool,
}

impl DeskDirectory {
    /// PostgreSQLコネクションプールから新しいDeskDirectoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeskDirectoryTrait for DeskDirectory {
    /// 指定日の空き座席を取得
    ///
    /// 割り当て結果を決定的にするため、座席IDの昇順で返す。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        let rows = sqlx::query(
            r#"
            SELECT
                d.id,
                d.description
            FROM desks d
            WHERE NOT EXISTS (
                SELECT 1
                FROM desk_bookings b
                WHERE b.desk_id = d.id AND b.date = $1
            )
            ORDER BY d.id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| Desk {
                id: DeskId::new(row.get("id")),
                description: row.get("description"),
            })
            .collect())
    }
}
