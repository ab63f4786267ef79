use crate::error::{PrintShopError, Result};
use print_shop_common::ShopConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "PRINT_SHOP_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub shop: ShopConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let shop = ShopConfig::from_json(&content)?;
            Ok(Self { shop })
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込みに失敗した場合はデフォルト値と失敗理由を返す
    pub fn load_or_default() -> (Self, Option<PrintShopError>) {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_or_default_from(path: &Path) -> (Self, Option<PrintShopError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.shop.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| PrintShopError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("print-shop").join("config.json"))
    }
}
