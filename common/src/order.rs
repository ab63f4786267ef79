//! 注文（写真アイテムのコレクション）
//!
//! アイテムの追加・サイズ変更・削除・全削除と、合計金額の導出。
//! プレビューハンドルはアイテムが所有し、アイテムが破棄されたとき
//! （削除・全削除・注文自体の破棄）に `Drop` で一度だけ解放される。

use serde::Serialize;

use crate::config::ShopConfig;
use crate::error::OrderError;
use crate::types::{FileMeta, ItemId, Money, PrintSize};
use crate::validation::validate_selection;

/// 表示用プレビューへの一時的な参照
///
/// 解放処理は実装側の `Drop` で行う（Webならオブジェクト URL の revoke）。
pub trait PreviewHandle {
    fn url(&self) -> &str;
}

/// 写真アイテム
#[derive(Debug)]
pub struct PrintItem<P> {
    id: ItemId,
    file: FileMeta,
    preview: P,
    size: PrintSize,
}

impl<P> PrintItem<P> {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn file(&self) -> &FileMeta {
        &self.file
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn size(&self) -> PrintSize {
        self.size
    }

    /// 価格は常にサイズから導出する
    pub fn price(&self) -> Money {
        self.size.price()
    }
}

/// 画面表示用の1行
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLine {
    pub id: ItemId,
    /// 1始まりの表示順
    pub ordinal: usize,
    pub file_name: String,
    pub preview_url: String,
    pub size: PrintSize,
    pub price: Money,
}

impl ItemLine {
    /// "Photo 1 (4x6)"
    pub fn title(&self) -> String {
        format!("Photo {} ({})", self.ordinal, self.size)
    }
}

/// 注文サマリー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<ItemLine>,
    pub item_count: usize,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

#[derive(Debug)]
pub struct Order<P> {
    config: ShopConfig,
    items: Vec<PrintItem<P>>,
    next_id: u64,
}

impl<P> Default for Order<P> {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

impl<P> Order<P> {
    pub fn new(config: ShopConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn items(&self) -> &[PrintItem<P>] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&PrintItem<P>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// あと何枚追加できるか
    pub fn remaining(&self) -> usize {
        self.config.max_items.saturating_sub(self.items.len())
    }

    /// 写真を追加する
    ///
    /// バッチ全体を検査してから、各ファイルのプレビューを `make_preview` で作成し、
    /// 既存のアイテムの後ろに追加する。途中でプレビュー作成に失敗した場合、
    /// 作成済みのプレビューは破棄され、注文は変更されない。
    pub fn add_photos<S, F>(
        &mut self,
        batch: Vec<(FileMeta, S)>,
        mut make_preview: F,
    ) -> Result<Vec<ItemId>, OrderError>
    where
        F: FnMut(&FileMeta, S) -> Result<P, OrderError>,
    {
        let (metas, sources): (Vec<FileMeta>, Vec<S>) = batch.into_iter().unzip();
        validate_selection(&self.config, self.items.len(), &metas)?;

        let previews = metas
            .iter()
            .zip(sources)
            .map(|(meta, source)| make_preview(meta, source))
            .collect::<Result<Vec<P>, OrderError>>()?;

        let mut added = Vec::with_capacity(previews.len());
        for (file, preview) in metas.into_iter().zip(previews) {
            let id = ItemId(self.next_id);
            self.next_id += 1;
            self.items.push(PrintItem {
                id,
                file,
                preview,
                size: PrintSize::default(),
            });
            added.push(id);
        }
        Ok(added)
    }

    pub fn set_size(&mut self, id: ItemId, size: PrintSize) -> Result<(), OrderError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(OrderError::UnknownItem(id))?;
        item.size = size;
        Ok(())
    }

    /// 1枚削除（プレビューはここで解放される）
    pub fn remove(&mut self, id: ItemId) -> Result<(), OrderError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(OrderError::UnknownItem(id))?;
        drop(self.items.remove(index));
        Ok(())
    }

    /// 全削除。削除した枚数を返す
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(PrintItem::price).sum()
    }

    pub fn delivery_fee(&self) -> Money {
        Money::ZERO
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.delivery_fee()
    }
}

impl<P: PreviewHandle> Order<P> {
    pub fn lines(&self) -> Vec<ItemLine> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemLine {
                id: item.id,
                ordinal: index + 1,
                file_name: item.file.name.clone(),
                preview_url: item.preview.url().to_string(),
                size: item.size,
                price: item.price(),
            })
            .collect()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self.lines(),
            item_count: self.items.len(),
            subtotal: self.subtotal(),
            delivery_fee: self.delivery_fee(),
            total: self.total(),
        }
    }
}
