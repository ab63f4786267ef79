//! 疑似決済の状態遷移
//!
//! 実際の決済は行わない。`begin` で処理中になり、遅延の後に `finish` で
//! レシートを返して待機状態に戻る。遅延中に `cancel` された場合や、
//! 古いチケットで `finish` が呼ばれた場合は何も起きない。

use std::fmt;

use serde::Serialize;

use crate::error::OrderError;
use crate::order::Order;
use crate::types::Money;

/// 処理中の決済を識別するチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing(Ticket),
}

/// 決済完了時のサマリー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub total: Money,
    pub item_count: usize,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🎉 Order Placed Successfully!\n\nTotal: {}\n{} photo(s)\n\nThank you for your order!",
            self.total, self.item_count
        )
    }
}

#[derive(Debug, Default)]
pub struct Checkout {
    state: CheckoutState,
    issued: u64,
}

impl Checkout {
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, CheckoutState::Processing(_))
    }

    pub fn begin<P>(&mut self, order: &Order<P>) -> Result<Ticket, OrderError> {
        if order.is_empty() {
            return Err(OrderError::EmptyCheckout);
        }
        if self.is_processing() {
            return Err(OrderError::CheckoutInProgress);
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = CheckoutState::Processing(ticket);
        Ok(ticket)
    }

    /// 遅延後に呼ばれる。レシートは完了時点の注文内容から作る
    pub fn finish<P>(&mut self, ticket: Ticket, order: &Order<P>) -> Option<Receipt> {
        if self.state != CheckoutState::Processing(ticket) {
            return None;
        }
        self.state = CheckoutState::Idle;
        if order.is_empty() {
            return None;
        }
        Some(Receipt {
            total: order.total(),
            item_count: order.len(),
        })
    }

    /// 処理中なら待機状態に戻す。戻した場合は true
    pub fn cancel(&mut self) -> bool {
        let was_processing = self.is_processing();
        self.state = CheckoutState::Idle;
        was_processing
    }
}
