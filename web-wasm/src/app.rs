//! メインアプリケーションコンポーネント
//!
//! 注文・エラー通知・決済状態はすべてここで保持する。
//! 子コンポーネントはコールバック経由で変更を要求するだけ。

use gloo::console::{log, warn};
use leptos::prelude::*;
use print_shop_common::{
    Checkout, FileMeta, ItemId, NoticeBoard, Order, OrderError, PrintSize, ShopConfig,
};
use web_sys::File;

use crate::components::{
    header::Header,
    notice_banner::NoticeBanner,
    order_summary::OrderSummary,
    photo_gallery::PhotoGallery,
    photo_uploader::PhotoUploader,
};
use crate::dialog;
use crate::preview::ObjectUrl;
use crate::timer::ScopedTimeout;

fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.size() as u64, file.type_())
}

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::default();
    let max_items = config.max_items;
    let notice_timeout_ms = config.notice_timeout_ms;
    let checkout_delay_ms = config.checkout_delay_ms;

    // アプリケーション状態
    let order = RwSignal::new(Order::<ObjectUrl>::new(config));
    let notices = RwSignal::new(NoticeBoard::default());
    let checkout = RwSignal::new(Checkout::default());
    let notice_timer = ScopedTimeout::new();
    let checkout_timer = ScopedTimeout::new();

    // 派生値（描画のたびに注文から再計算）
    let lines = Signal::derive(move || order.with(|o| o.lines()));
    let summary = Signal::derive(move || order.with(|o| o.summary()));
    let remaining = Signal::derive(move || order.with(|o| o.remaining()));
    let processing = Signal::derive(move || checkout.with(|c| c.is_processing()));
    let notice = Signal::derive(move || notices.with(|n| n.message().map(str::to_string)));

    let report = move |error: OrderError| {
        warn!(error.to_string());
        if let Some(id) = notices.try_update(|n| n.report(&error)) {
            notice_timer.schedule(notice_timeout_ms, move || {
                notices.try_update(|n| n.expire(id));
            });
        }
    };

    let dismiss_notice = move || {
        notice_timer.cancel();
        notices.update(|n| n.dismiss());
    };

    let cancel_checkout = move || {
        if checkout.try_update(|c| c.cancel()).unwrap_or(false) {
            checkout_timer.cancel();
            log!("決済をキャンセルしました");
        }
    };

    // 写真追加ハンドラ
    let on_files_selected = move |files: Vec<File>| {
        let batch: Vec<(FileMeta, File)> =
            files.into_iter().map(|file| (file_meta(&file), file)).collect();
        let result = order.try_update(|o| {
            o.add_photos(batch, |_, file| ObjectUrl::for_blob(&file))
        });
        match result {
            Some(Ok(added)) => {
                log!(format!("{}枚の写真を追加", added.len()));
                dismiss_notice();
            }
            Some(Err(error)) => report(error),
            None => {}
        }
    };

    // サイズ変更ハンドラ
    let on_size_change = move |id: ItemId, size: PrintSize| {
        if let Some(Err(error)) = order.try_update(|o| o.set_size(id, size)) {
            report(error);
        }
    };

    // 削除ハンドラ
    let on_remove = move |id: ItemId| {
        match order.try_update(|o| o.remove(id)) {
            Some(Ok(())) => log!(format!("写真 {} を削除", id)),
            Some(Err(error)) => report(error),
            None => {}
        }
        if order.with_untracked(|o| o.is_empty()) {
            cancel_checkout();
        }
    };

    // 全削除ハンドラ
    let on_clear_all = move |_: ()| {
        let count = order.with_untracked(|o| o.len());
        if count == 0 {
            return;
        }
        if !dialog::confirm(&format!("Remove all {} photo(s) from your order?", count)) {
            return;
        }
        order.update(|o| {
            o.clear();
        });
        cancel_checkout();
        log!(format!("{}枚の写真をすべて削除", count));
    };

    // 決済ハンドラ（疑似）
    let on_checkout = move |_: ()| {
        let begun = checkout.try_update(|c| order.with_untracked(|o| c.begin(o)));
        match begun {
            Some(Ok(ticket)) => {
                log!("決済処理中...");
                checkout_timer.schedule(checkout_delay_ms, move || {
                    let receipt = checkout
                        .try_update(|c| order.try_with_untracked(|o| c.finish(ticket, o)))
                        .flatten()
                        .flatten();
                    if let Some(receipt) = receipt {
                        log!(format!("決済完了: {}", receipt.total));
                        dialog::alert(&receipt.to_string());
                    }
                });
            }
            Some(Err(error)) => {
                warn!(error.to_string());
                dialog::alert(&format!("⚠️ {}", error));
            }
            None => {}
        }
    };

    view! {
        <div class="container">
            <Header />

            <NoticeBanner message=notice on_dismiss=move |_: ()| dismiss_notice() />

            <PhotoUploader
                max_items=max_items
                remaining=remaining
                on_files_selected=on_files_selected
            />

            <Show
                when=move || !lines.with(|l| l.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="text-large">"No photos uploaded yet."</p>
                        <p class="text-muted">
                            {format!("Upload up to {} photos to get started!", max_items)}
                        </p>
                    </div>
                }
            >
                <p class="upload-success">
                    {move || format!("✅ {} photo(s) uploaded successfully!", lines.with(|l| l.len()))}
                </p>
                <PhotoGallery
                    lines=lines
                    on_size_change=on_size_change
                    on_remove=on_remove
                />
                <OrderSummary
                    summary=summary
                    processing=processing
                    on_checkout=on_checkout
                    on_clear_all=on_clear_all
                />
            </Show>
        </div>
    }
}
