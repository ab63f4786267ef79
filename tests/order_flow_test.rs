//! 写真選択から疑似決済までの統合テスト

use print_shop::checkout::run_checkout;
use print_shop::error::PrintShopError;
use print_shop::quote::{build_order, FilePreview};
use print_shop::scanner;
use print_shop_common::{Money, Order, OrderError, PrintSize, ShopConfig};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

const MIB: u64 = 1024 * 1024;

fn write_file(dir: &Path, name: &str, byte_len: u64) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("ファイル作成失敗");
    file.set_len(byte_len).expect("サイズ設定失敗");
    path
}

fn quote(paths: &[PathBuf], sizes: &[PrintSize]) -> Result<Order<FilePreview>, PrintShopError> {
    let photos = scanner::collect_photos(paths)?;
    build_order(&ShopConfig::default(), photos, sizes)
}

/// 3枚の画像 → すべて4x6で追加
#[test]
fn test_three_images_default_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths: Vec<PathBuf> = (1..=3)
        .map(|i| write_file(dir.path(), &format!("photo_{}.jpg", i), 1024))
        .collect();

    let order = quote(&paths, &[]).expect("見積もり失敗");

    assert_eq!(order.len(), 3);
    assert!(order.items().iter().all(|item| item.size() == PrintSize::Small));
    assert_eq!(order.total(), PrintSize::Small.price().times(3));
}

/// 6枚 → 枚数超過で拒否
#[test]
fn test_six_images_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths: Vec<PathBuf> = (1..=6)
        .map(|i| write_file(dir.path(), &format!("photo_{}.png", i), 1024))
        .collect();

    let err = quote(&paths, &[]).unwrap_err();

    assert!(matches!(
        err,
        PrintShopError::Order(OrderError::CapacityExceeded { max: 5, remaining: 5 })
    ));
}

/// 11MiBのファイル → サイズ超過で拒否
#[test]
fn test_oversized_file_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_file(dir.path(), "huge.jpg", 11 * MIB);

    let err = quote(&[path], &[]).unwrap_err();

    match err {
        PrintShopError::Order(OrderError::OversizedFile { names, .. }) => {
            assert_eq!(names, vec!["huge.jpg".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// 画像以外のファイルを直接指定 → 種類エラー
#[test]
fn test_non_image_file_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = write_file(dir.path(), "ok.jpg", 1024);
    let text = write_file(dir.path(), "notes.txt", 10);

    let err = quote(&[image, text], &[]).unwrap_err();

    assert!(matches!(
        err,
        PrintShopError::Order(OrderError::InvalidType { .. })
    ));
}

/// フォルダ指定時は直下の画像のみをファイル名順に集める
#[test]
fn test_folder_scan_filters_and_sorts() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_file(dir.path(), "b.jpg", 100);
    write_file(dir.path(), "a.PNG", 100);
    write_file(dir.path(), "readme.md", 100);
    std::fs::create_dir(dir.path().join("nested")).expect("フォルダ作成失敗");
    write_file(&dir.path().join("nested"), "c.jpg", 100);

    let photos = scanner::collect_photos(&[dir.path().to_path_buf()]).expect("スキャン失敗");
    let names: Vec<&str> = photos.iter().map(|p| p.meta.name.as_str()).collect();

    assert_eq!(names, vec!["a.PNG", "b.jpg"]);
    assert_eq!(photos[0].meta.mime_type, "image/png");
}

/// 画像のないフォルダは JSON 出力でも通常出力でも同じエラー
#[test]
fn test_folder_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_file(dir.path(), "readme.md", 100);

    let err = scanner::collect_order_photos(&[dir.path().to_path_buf()]).unwrap_err();
    assert!(matches!(err, PrintShopError::NoImagesFound(_)));

    // 画像があれば通常どおり
    write_file(dir.path(), "a.jpg", 100);
    let photos = scanner::collect_order_photos(&[dir.path().to_path_buf()]).expect("スキャン失敗");
    assert_eq!(photos.len(), 1);
}

/// 存在しないパス
#[test]
fn test_missing_path() {
    let err = scanner::collect_photos(&[PathBuf::from("/nonexistent/path/12345.jpg")]).unwrap_err();
    assert!(matches!(err, PrintShopError::FileNotFound(_)));
}

/// 2枚のうち1枚を8x10に変更
#[test]
fn test_upgrade_one_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = vec![
        write_file(dir.path(), "a.jpg", 1024),
        write_file(dir.path(), "b.jpg", 1024),
    ];

    let order = quote(&paths, &[PrintSize::Small, PrintSize::Large]).expect("見積もり失敗");

    assert_eq!(order.total(), PrintSize::Small.price() + PrintSize::Large.price());
    assert_eq!(order.total(), Money(650));
}

/// 空の注文は決済できない
#[tokio::test]
async fn test_checkout_empty_order() {
    let order: Order<FilePreview> = Order::default();

    let err = run_checkout(&order, Duration::from_millis(1)).await.unwrap_err();

    assert!(matches!(err, PrintShopError::Order(OrderError::EmptyCheckout)));
    assert!(order.is_empty());
}

/// 決済後も注文内容は変わらない
#[tokio::test]
async fn test_checkout_returns_receipt() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = vec![
        write_file(dir.path(), "a.jpg", 1024),
        write_file(dir.path(), "b.jpg", 1024),
    ];
    let order = quote(&paths, &[PrintSize::Medium]).expect("見積もり失敗");

    let receipt = run_checkout(&order, Duration::from_millis(10))
        .await
        .expect("決済失敗")
        .expect("レシートなし");

    assert_eq!(receipt.item_count, 2);
    assert_eq!(receipt.total, Money(450));
    assert_eq!(order.len(), 2);
}
