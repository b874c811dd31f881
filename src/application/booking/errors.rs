use thiserror::Error;

/// 座席予約アプリケーション層のエラー
///
/// 協調コンポーネントのエラーは再試行も変換もせず、元のエラーをそのまま保持する。
/// Displayと`source()`は元のエラーに委譲される。
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// 必須の引数が渡されなかった（引数名を保持）
    #[error("Value cannot be null (parameter '{0}')")]
    InvalidArgument(&'static str),

    /// DeskDirectoryのエラー
    #[error(transparent)]
    DeskDirectoryError(Box<dyn std::error::Error + Send + Sync>),

    /// BookingStoreのエラー
    #[error(transparent)]
    BookingStoreError(Box<dyn std::error::Error + Send + Sync>),

    /// BookingLedgerのエラー
    #[error(transparent)]
    BookingLedgerError(Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
