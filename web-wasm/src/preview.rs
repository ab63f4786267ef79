//! オブジェクトURLによるプレビュー
//!
//! `URL.createObjectURL` で作ったURLを保持し、破棄時に `URL.revokeObjectURL` する。

use gloo::console::warn;
use print_shop_common::{OrderError, PreviewHandle};
use web_sys::{Blob, Url};

#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn for_blob(blob: &Blob) -> Result<Self, OrderError> {
        Url::create_object_url_with_blob(blob)
            .map(|url| Self { url })
            .map_err(|e| OrderError::PreviewUnavailable(format!("{:?}", e)))
    }
}

impl PreviewHandle for ObjectUrl {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            warn!(format!("プレビューの解放に失敗: {} {:?}", self.url, e));
        }
    }
}
