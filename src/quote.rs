//! 見積もり（注文の組み立てと表示）

use crate::error::{PrintShopError, Result};
use crate::scanner::LocalPhoto;
use print_shop_common::{
    FileMeta, Money, Order, OrderSummary, PreviewHandle, PrintSize, ShopConfig,
};
use std::path::PathBuf;

/// ローカルファイルのプレビュー（パス表示のみ。解放するものはない）
#[derive(Debug, Clone)]
pub struct FilePreview(String);

impl PreviewHandle for FilePreview {
    fn url(&self) -> &str {
        &self.0
    }
}

/// 写真とサイズ指定から注文を作る
///
/// サイズは写真の順番どおりに適用し、指定のない写真はデフォルト（4x6）のまま。
pub fn build_order(
    config: &ShopConfig,
    photos: Vec<LocalPhoto>,
    sizes: &[PrintSize],
) -> Result<Order<FilePreview>> {
    if sizes.len() > photos.len() {
        return Err(PrintShopError::TooManySizes {
            sizes: sizes.len(),
            photos: photos.len(),
        });
    }

    let mut order = Order::new(config.clone());
    let batch: Vec<(FileMeta, PathBuf)> = photos
        .into_iter()
        .map(|photo| (photo.meta, photo.path))
        .collect();
    let ids = order.add_photos(batch, |_, path| Ok(FilePreview(path.display().to_string())))?;

    for (id, size) in ids.into_iter().zip(sizes) {
        order.set_size(id, *size)?;
    }

    Ok(order)
}

const LINE_WIDTH: usize = 48;

fn row(label: &str, value: &str) -> String {
    let padding = LINE_WIDTH.saturating_sub(label.chars().count() + value.chars().count());
    format!("{}{}{}\n", label, " ".repeat(padding.max(1)), value)
}

/// 端末表示用のサマリー
pub fn render_summary(summary: &OrderSummary) -> String {
    let mut out = String::from("Order Summary\n");
    out.push_str(&"=".repeat(LINE_WIDTH));
    out.push('\n');

    for line in &summary.lines {
        out.push_str(&row(&line.title(), &line.price.to_string()));
        out.push_str(&format!("  {}\n", line.file_name));
    }

    out.push_str(&"-".repeat(LINE_WIDTH));
    out.push('\n');
    out.push_str(&row("Subtotal:", &summary.subtotal.to_string()));
    let delivery = if summary.delivery_fee == Money::ZERO {
        "Free".to_string()
    } else {
        summary.delivery_fee.to_string()
    };
    out.push_str(&row("Delivery:", &delivery));
    out.push_str(&row("Total:", &summary.total.to_string()));
    out
}
