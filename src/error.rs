use print_shop_common::OrderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintShopError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("サイズ指定が多すぎます: {sizes}件のサイズに対して写真は{photos}枚です")]
    TooManySizes { sizes: usize, photos: usize },

    #[error("{0}")]
    Order(#[from] OrderError),

    #[error("設定エラー: {0}")]
    Shop(#[from] print_shop_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PrintShopError>;
