//! コンポーネントの寿命に紐づいたタイムアウト
//!
//! スロットごとに保留中のタイムアウトは最大1つ。再スケジュールすると
//! 前のタイムアウトは取り消される。所有コンポーネントの破棄時にも取り消す。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ScopedTimeout {
    slot: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ScopedTimeout {
    pub fn new() -> Self {
        let slot = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            slot.try_update_value(|timeout| drop(timeout.take()));
        });
        Self { slot }
    }

    pub fn schedule<F>(&self, millis: u64, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let millis = u32::try_from(millis).unwrap_or(u32::MAX);
        // 古い Timeout は drop された時点で clearTimeout される
        self.slot.set_value(Some(Timeout::new(millis, callback)));
    }

    pub fn cancel(&self) {
        self.slot.try_update_value(|timeout| drop(timeout.take()));
    }
}
