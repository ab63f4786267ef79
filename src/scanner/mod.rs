use crate::error::{PrintShopError, Result};
use print_shop_common::FileMeta;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct LocalPhoto {
    pub path: PathBuf,
    pub meta: FileMeta,
}

const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定する
pub fn mime_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return UNKNOWN_MIME_TYPE;
    };
    let ext = ext.to_string_lossy().to_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

fn is_image_file(path: &Path) -> bool {
    mime_type_for(path).starts_with("image/")
}

/// 指定されたファイル・フォルダから写真を集める
///
/// ファイルはそのまま（画像以外も含めて）対象にし、種類のチェックは注文側で行う。
/// フォルダは直下の画像ファイルのみをファイル名順に追加する。
pub fn collect_photos(paths: &[PathBuf]) -> Result<Vec<LocalPhoto>> {
    let mut photos = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(PrintShopError::FileNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            photos.extend(scan_folder(path)?);
        } else {
            photos.push(local_photo(path)?);
        }
    }

    Ok(photos)
}

/// 注文用に写真を集める。1枚も見つからなければエラー
pub fn collect_order_photos(paths: &[PathBuf]) -> Result<Vec<LocalPhoto>> {
    let photos = collect_photos(paths)?;
    if photos.is_empty() {
        let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        return Err(PrintShopError::NoImagesFound(joined.join(", ")));
    }
    Ok(photos)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<LocalPhoto>> {
    let mut photos = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            photos.push(local_photo(path)?);
        }
    }

    // ファイル名でソート
    photos.sort_by(|a, b| a.meta.name.cmp(&b.meta.name));

    Ok(photos)
}

fn local_photo(path: &Path) -> Result<LocalPhoto> {
    let byte_len = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(LocalPhoto {
        path: path.to_path_buf(),
        meta: FileMeta::new(name, byte_len, mime_type_for(path)),
    })
}
