use clap::{Parser, Subcommand};
use print_shop_common::PrintSize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "print-shop")]
#[command(about = "写真プリントの見積もり・疑似注文ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真の見積もりを表示
    Quote {
        /// 写真ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// プリントサイズ（写真の順に適用、例: 4x6,8x10）
        #[arg(short, long, value_delimiter = ',')]
        size: Vec<PrintSize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 疑似決済（実際の支払いは行いません）
    Checkout {
        /// 写真ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// プリントサイズ（写真の順に適用、例: 4x6,8x10）
        #[arg(short, long, value_delimiter = ',')]
        size: Vec<PrintSize>,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定を表示・変更
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// 1注文あたりの最大枚数
        #[arg(long)]
        max_items: Option<usize>,

        /// 1ファイルあたりの最大サイズ（MB）
        #[arg(long)]
        max_file_mb: Option<u64>,

        /// エラー通知の表示時間（ミリ秒）
        #[arg(long)]
        notice_timeout_ms: Option<u64>,

        /// 疑似決済の待ち時間（ミリ秒）
        #[arg(long)]
        checkout_delay_ms: Option<u64>,
    },
}
