pub mod checkout;
pub mod cli;
pub mod config;
pub mod error;
pub mod quote;
pub mod scanner;
