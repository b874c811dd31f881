use thiserror::Error;

/// 予約リクエストの入力検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// 必須項目が空
    #[error("{0} is required")]
    Required(&'static str),

    /// 最大文字数を超えている
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// メールアドレスの形式が不正
    #[error("email is not a valid email address")]
    InvalidEmail,
}
