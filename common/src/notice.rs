//! エラー通知
//!
//! 表示する通知は常に最新の1件だけ。自動消去のタイマーは通知IDを持ち、
//! その間に新しい通知が出ていれば何もしない。

use crate::error::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    issued: u64,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|notice| notice.message.as_str())
    }

    pub fn report(&mut self, error: &OrderError) -> NoticeId {
        self.post(error.to_string())
    }

    /// 以前の通知を置き換える
    pub fn post(&mut self, message: String) -> NoticeId {
        self.issued += 1;
        let id = NoticeId(self.issued);
        self.current = Some(Notice { id, message });
        id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// 自動消去。指定IDの通知がまだ表示中なら消して true を返す
    pub fn expire(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
