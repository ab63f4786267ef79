//! ショップ設定
//!
//! 上限値と遅延時間。すべての項目にデフォルトがあり、JSONで上書きできる。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopConfig {
    /// 1注文あたりの最大枚数
    pub max_items: usize,
    /// 1ファイルあたりの最大バイト数
    pub max_file_bytes: u64,
    /// エラー通知を自動で消すまでの時間
    pub notice_timeout_ms: u64,
    /// 決済処理の疑似待ち時間
    pub checkout_delay_ms: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            checkout_delay_ms: DEFAULT_CHECKOUT_DELAY_MS,
        }
    }
}

impl ShopConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(Error::Config("maxItems must be at least 1".into()));
        }
        if self.max_file_bytes == 0 {
            return Err(Error::Config("maxFileBytes must be at least 1".into()));
        }
        Ok(())
    }

    pub fn max_file_mb(&self) -> u64 {
        self.max_file_bytes / (1024 * 1024)
    }

    /// 最大ファイルサイズをMB単位で設定する
    pub fn set_max_file_mb(&mut self, mb: u64) -> Result<()> {
        self.max_file_bytes = mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| Error::Config(format!("maxFileMb is too large: {}", mb)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.max_items, 5);
        assert_eq!(config.max_file_bytes, 10_485_760);
        assert_eq!(config.notice_timeout_ms, 5000);
        assert_eq!(config.checkout_delay_ms, 500);
        assert_eq!(config.max_file_mb(), 10);
    }

    #[test]
    fn test_set_max_file_mb() {
        let mut config = ShopConfig::default();
        config.set_max_file_mb(25).expect("設定失敗");
        assert_eq!(config.max_file_bytes, 25 * 1024 * 1024);
        assert_eq!(config.max_file_mb(), 25);
    }

    #[test]
    fn test_set_max_file_mb_overflow() {
        let mut config = ShopConfig::default();
        let err = config.set_max_file_mb(18_000_000_000_000).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        // 失敗時は元の値のまま
        assert_eq!(config.max_file_bytes, DEFAULT_MAX_FILE_BYTES);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ShopConfig::from_json(r#"{"maxItems": 3}"#).expect("パース失敗");
        assert_eq!(config.max_items, 3);
        assert_eq!(config.max_file_bytes, DEFAULT_MAX_FILE_BYTES);
    }

    #[test]
    fn test_from_json_rejects_zero_items() {
        let err = ShopConfig::from_json(r#"{"maxItems": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ShopConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_roundtrip_keys_are_camel_case() {
        let json = serde_json::to_string(&ShopConfig::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"maxFileBytes\":10485760"));
        assert!(json.contains("\"checkoutDelayMs\":500"));
    }
}
