//! エラー型定義

use thiserror::Error;

use crate::types::ItemId;

/// 共通エラー型（設定の読み込みなど）
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 注文操作のエラー
///
/// どれもユーザー入力に起因する回復可能なエラーで、
/// 画面上では一時的な通知として表示される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Please select at least one photo")]
    EmptySelection,

    #[error("Maximum {max} photos allowed! You can add {remaining} more.")]
    CapacityExceeded { max: usize, remaining: usize },

    #[error("Some files are too large! Maximum file size is {}MB ({}).", .max_bytes / (1024 * 1024), .names.join(", "))]
    OversizedFile { names: Vec<String>, max_bytes: u64 },

    #[error("Please upload only image files (JPG, PNG, HEIC, etc.): {}", .names.join(", "))]
    InvalidType { names: Vec<String> },

    #[error("Please upload at least one photo before checkout!")]
    EmptyCheckout,

    #[error("Checkout is already being processed")]
    CheckoutInProgress,

    #[error("Photo {0} is not in the order")]
    UnknownItem(ItemId),

    #[error("Unknown print size: {0} (expected 4x6, 5x7 or 8x10)")]
    UnknownSize(String),

    #[error("Could not create a preview: {0}")]
    PreviewUnavailable(String),
}
