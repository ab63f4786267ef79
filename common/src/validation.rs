//! 写真選択のバリデーション
//!
//! 状態を変更する前に、選択されたファイル群をまとめて検査する。
//! 検査順: 空選択 → 枚数上限 → ファイルサイズ → MIMEタイプ

use crate::config::ShopConfig;
use crate::error::OrderError;
use crate::types::FileMeta;

pub fn validate_selection(
    config: &ShopConfig,
    current_count: usize,
    batch: &[FileMeta],
) -> Result<(), OrderError> {
    if batch.is_empty() {
        return Err(OrderError::EmptySelection);
    }

    if current_count + batch.len() > config.max_items {
        return Err(OrderError::CapacityExceeded {
            max: config.max_items,
            remaining: config.max_items.saturating_sub(current_count),
        });
    }

    let oversized: Vec<String> = batch
        .iter()
        .filter(|file| file.byte_len > config.max_file_bytes)
        .map(|file| file.name.clone())
        .collect();
    if !oversized.is_empty() {
        return Err(OrderError::OversizedFile {
            names: oversized,
            max_bytes: config.max_file_bytes,
        });
    }

    let invalid: Vec<String> = batch
        .iter()
        .filter(|file| !file.is_image())
        .map(|file| file.name.clone())
        .collect();
    if !invalid.is_empty() {
        return Err(OrderError::InvalidType { names: invalid });
    }

    Ok(())
}
