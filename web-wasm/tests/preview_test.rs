//! オブジェクトURLプレビューのブラウザテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use print_shop_common::{FileMeta, Order, PreviewHandle};
use print_shop_wasm::preview::ObjectUrl;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Blob;

wasm_bindgen_test_configure!(run_in_browser);

/// URLを読み込めるか（解放済みのblob URLは fetch が失敗する）
async fn is_fetchable(url: &str) -> bool {
    let window = web_sys::window().expect("windowがない");
    JsFuture::from(window.fetch_with_str(url)).await.is_ok()
}

#[wasm_bindgen_test]
fn object_url_is_blob_url() {
    let blob = Blob::new().expect("Blob作成失敗");
    let preview = ObjectUrl::for_blob(&blob).expect("URL作成失敗");
    assert!(preview.url().starts_with("blob:"));
}

#[wasm_bindgen_test]
async fn order_owns_object_urls() {
    let mut order: Order<ObjectUrl> = Order::default();
    let batch: Vec<(FileMeta, Blob)> = (0..3)
        .map(|i| {
            let blob = Blob::new().expect("Blob作成失敗");
            (FileMeta::new(format!("photo_{}.jpg", i), 1024, "image/jpeg"), blob)
        })
        .collect();

    order
        .add_photos(batch, |_, blob| ObjectUrl::for_blob(&blob))
        .expect("追加失敗");

    let urls: Vec<String> = order.lines().into_iter().map(|line| line.preview_url).collect();
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().all(|url| url.starts_with("blob:")));
    for url in &urls {
        assert!(is_fetchable(url).await, "解放前に読めない: {}", url);
    }

    assert_eq!(order.clear(), 3);
    assert!(order.lines().is_empty());

    // clear でプレビューが破棄され、URLも解放される
    for url in &urls {
        assert!(!is_fetchable(url).await, "解放されていない: {}", url);
    }
}

#[wasm_bindgen_test]
async fn dropped_preview_is_revoked() {
    let blob = Blob::new().expect("Blob作成失敗");
    let preview = ObjectUrl::for_blob(&blob).expect("URL作成失敗");
    let url = preview.url().to_string();
    assert!(is_fetchable(&url).await);

    drop(preview);
    assert!(!is_fetchable(&url).await);
}
