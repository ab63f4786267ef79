//! 疑似決済（実際の支払いは行わない）

use crate::error::Result;
use crate::quote::FilePreview;
use indicatif::{ProgressBar, ProgressStyle};
use print_shop_common::{Checkout, Order, Receipt};
use std::time::Duration;

/// 処理中の待ち時間を経てレシートを返す
///
/// 待機中に Ctrl-C が押された場合は決済を取り消して `None` を返す。
pub async fn run_checkout(order: &Order<FilePreview>, delay: Duration) -> Result<Option<Receipt>> {
    let mut checkout = Checkout::default();
    let ticket = checkout.begin(order)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("⏳ Processing...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let receipt = tokio::select! {
        _ = tokio::time::sleep(delay) => checkout.finish(ticket, order),
        _ = tokio::signal::ctrl_c() => {
            checkout.cancel();
            None
        }
    };

    spinner.finish_and_clear();
    Ok(receipt)
}
