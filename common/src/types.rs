//! 注文モデルの基本型
//!
//! CLIとWeb(WASM)で共有される型:
//! - PrintSize: プリントサイズ（価格表を兼ねる）
//! - Money: 金額（fils単位の整数）
//! - ItemId: 写真アイテムの識別子
//! - FileMeta: 選択されたファイルのメタデータ

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// 通貨コード（表示用）
pub const CURRENCY: &str = "AED";

/// 金額（1/100 AED 単位）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_fils(fils: u64) -> Self {
        Money(fils)
    }

    pub const fn fils(self) -> u64 {
        self.0
    }

    /// 表示用の数値部分（"1.50"）
    pub fn amount(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    pub fn times(self, count: u64) -> Money {
        Money(self.0 * count)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY, self.amount())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// プリントサイズ
///
/// 価格表はここにだけ定義する。アイテムの価格は常にサイズから導出される。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrintSize {
    #[default]
    #[serde(rename = "4x6")]
    Small,
    #[serde(rename = "5x7")]
    Medium,
    #[serde(rename = "8x10")]
    Large,
}

impl PrintSize {
    pub const ALL: [PrintSize; 3] = [PrintSize::Small, PrintSize::Medium, PrintSize::Large];

    pub const fn price(self) -> Money {
        match self {
            PrintSize::Small => Money(150),
            PrintSize::Medium => Money(300),
            PrintSize::Large => Money(500),
        }
    }

    /// select の value やCLI引数に使うキー
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintSize::Small => "4x6",
            PrintSize::Medium => "5x7",
            PrintSize::Large => "8x10",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrintSize::Small => "4×6",
            PrintSize::Medium => "5×7",
            PrintSize::Large => "8×10",
        }
    }

    /// 選択肢の表示（"4×6 - AED 1.50"）
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.label(), self.price())
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintSize {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('×', "x");
        PrintSize::ALL
            .into_iter()
            .find(|size| size.as_str() == normalized)
            .ok_or_else(|| OrderError::UnknownSize(s.to_string()))
    }
}

/// 写真アイテムの識別子（セッション内で一意）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub byte_len: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, byte_len: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_len,
            mime_type: mime_type.into(),
        }
    }

    /// 宣言されたMIMEタイプが画像か
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(PrintSize::Small.price(), Money(150));
        assert_eq!(PrintSize::Medium.price(), Money(300));
        assert_eq!(PrintSize::Large.price(), Money(500));
    }

    #[test]
    fn test_default_size_is_cheapest() {
        let cheapest = PrintSize::ALL
            .into_iter()
            .min_by_key(|size| size.price())
            .unwrap();
        assert_eq!(PrintSize::default(), cheapest);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money(150).to_string(), "AED 1.50");
        assert_eq!(Money(0).to_string(), "AED 0.00");
        assert_eq!(Money(1205).to_string(), "AED 12.05");
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money(150), Money(300), Money(500)].into_iter().sum();
        assert_eq!(total, Money(950));
        assert_eq!(Money(150).times(3), Money(450));
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("4x6".parse::<PrintSize>().unwrap(), PrintSize::Small);
        assert_eq!("5×7".parse::<PrintSize>().unwrap(), PrintSize::Medium);
        assert_eq!(" 8X10 ".parse::<PrintSize>().unwrap(), PrintSize::Large);
    }

    #[test]
    fn test_size_from_str_unknown() {
        let err = "A4".parse::<PrintSize>().unwrap_err();
        assert_eq!(err, OrderError::UnknownSize("A4".to_string()));
    }

    #[test]
    fn test_size_serialize_uses_dimension_key() {
        let json = serde_json::to_string(&PrintSize::Large).expect("シリアライズ失敗");
        assert_eq!(json, "\"8x10\"");
        let size: PrintSize = serde_json::from_str("\"5x7\"").expect("デシリアライズ失敗");
        assert_eq!(size, PrintSize::Medium);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(PrintSize::Small.option_label(), "4×6 - AED 1.50");
    }

    #[test]
    fn test_file_meta_is_image() {
        assert!(FileMeta::new("a.jpg", 10, "image/jpeg").is_image());
        assert!(FileMeta::new("b.heic", 10, "image/heic").is_image());
        assert!(!FileMeta::new("c.pdf", 10, "application/pdf").is_image());
        assert!(!FileMeta::new("d", 10, "").is_image());
    }
}
