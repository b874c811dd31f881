use serde::{Deserialize, Serialize};

/// 座席ID - 座席ディレクトリが採番・管理する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeskId(i32);

impl DeskId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 予約ID - 予約ストアが保存時にのみ採番する
///
/// プロセッサ側で推測・事前採番してはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(i32);

impl BookingId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 予約処理の結果コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingResultCode {
    /// 座席を確保し、予約を保存した
    Success,
    /// 指定日に空き座席がない
    NoDeskAvailable,
}

impl BookingResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingResultCode::Success => "success",
            BookingResultCode::NoDeskAvailable => "no_desk_available",
        }
    }
}

impl std::str::FromStr for BookingResultCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(BookingResultCode::Success),
            "no_desk_available" => Ok(BookingResultCode::NoDeskAvailable),
            _ => Err(format!("Invalid booking result code: {}", s)),
        }
    }
}
