use crate::domain::Desk;
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 座席ディレクトリポート
///
/// 座席の列挙と空き状況を管理する外部コンテキストとの境界。
/// 予約処理は座席IDと並び順のみを利用する。
#[async_trait]
pub trait DeskDirectory: Send + Sync {
    /// 指定日に予約のない座席を取得する
    ///
    /// 空の場合は空き座席なしを意味する。
    /// 返却順がそのまま割り当ての優先順位になる。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>>;
}
