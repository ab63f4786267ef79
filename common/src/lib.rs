//! Print Shop Common Library
//!
//! CLIとWeb(WASM)で共有される注文モデル

pub mod types;
pub mod config;
pub mod error;
pub mod validation;
pub mod order;
pub mod checkout;
pub mod notice;

pub use types::{FileMeta, ItemId, Money, PrintSize, CURRENCY};
pub use config::ShopConfig;
pub use error::{Error, OrderError, Result};
pub use validation::validate_selection;
pub use order::{ItemLine, Order, OrderSummary, PreviewHandle, PrintItem};
pub use checkout::{Checkout, CheckoutState, Receipt, Ticket};
pub use notice::{Notice, NoticeBoard, NoticeId};
